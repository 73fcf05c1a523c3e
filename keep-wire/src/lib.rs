//! JSON wire codec for the Keep notes sync protocol.
//!
//! The sync API speaks an undocumented JSON dialect. This crate defines the
//! records it carries and guarantees they serialize to, and only accept,
//! the exact shapes the service expects:
//! - Literal tags: fixed discriminator strings such as `"notes#node"`
//! - Enumerated tokens: colors, reminder periods and reminder state
//! - Sentinel timestamps: millisecond UTC strings where the epoch means unset
//! - Entities: nodes, notes, lists, list items and reminders
//!
//! Transport, authentication and sync logic live elsewhere and consume the
//! values decoded here.

mod error;
mod node;
mod reminder;
mod tag;
mod timestamp;
mod token;

pub use error::{WireError, WireResult};
pub use node::{Item, List, Node, Note, ParentNode, Timestamps};
pub use reminder::{Reminder, Time};
pub use tag::{ItemType, ListType, Literal, NodeKind, NoteType, Tag, TimestampsKind};
pub use timestamp::{Timestamp, UNSET_SENTINEL};
pub use token::{Color, Dismissed, Period, Token};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::type_name;
use tracing::{debug, trace};

/// Encodes a value as a wire JSON string.
pub fn encode<T: Serialize>(value: &T) -> WireResult<String> {
    error::reset();
    let out = serde_json::to_string(value)
        .map_err(error::recover)
        .inspect_err(|e| {
            debug!("Failed to encode {}: {}", type_name::<T>(), e);
        })?;
    trace!("Encoded {} ({} bytes)", type_name::<T>(), out.len());
    Ok(out)
}

/// Encodes a value as wire JSON bytes.
pub fn encode_vec<T: Serialize>(value: &T) -> WireResult<Vec<u8>> {
    encode(value).map(String::into_bytes)
}

/// Decodes a wire JSON string. The whole record is rejected on the first
/// field that fails, and a failing tag, token or timestamp is reported as
/// its own [`WireError`] variant rather than as [`WireError::Json`].
pub fn decode<T: DeserializeOwned>(json: &str) -> WireResult<T> {
    decode_slice(json.as_bytes())
}

/// Decodes wire JSON bytes.
pub fn decode_slice<T: DeserializeOwned>(json: &[u8]) -> WireResult<T> {
    error::reset();
    let value = serde_json::from_slice::<T>(json)
        .map_err(error::recover)
        .inspect_err(|e| {
            debug!("Rejected {} payload: {}", type_name::<T>(), e);
        })?;
    trace!("Decoded {} ({} bytes)", type_name::<T>(), json.len());
    Ok(value)
}
