//! Shared test helpers for wire tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use keep_wire::{Color, List, Node, ParentNode, Timestamp, Timestamps};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fixed instant with millisecond precision.
pub fn instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap() + chrono::Duration::milliseconds(123)
}

/// The "Groceries" list used by the end-to-end scenarios.
pub fn groceries() -> List {
    let mut node = Node::new("1a2b3c", "root", 42);
    node.timestamps = Timestamps {
        updated: Timestamp::try_from(instant()).unwrap(),
        ..Timestamps::default()
    };
    let mut parent = ParentNode::new(node, "Groceries");
    parent.color = Color::Green;
    List::new(parent)
}
