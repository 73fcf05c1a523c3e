//! Node records: notes, lists and list items.
//!
//! Every entry in the tree shares a [`Node`] header. Top-level containers
//! (notes and lists) extend it with a title, archive flag and color as a
//! [`ParentNode`]; list items extend the bare node. On the wire the shared
//! parts are inlined into one flat JSON object.

use crate::tag::{ItemType, ListType, Literal, NodeKind, NoteType, TimestampsKind};
use crate::timestamp::Timestamp;
use crate::token::Color;
use serde::{Deserialize, Serialize};

/// Time-related data about a node. Any field may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub kind: Literal<TimestampsKind>,
    pub created: Timestamp,
    pub deleted: Timestamp,
    pub trashed: Timestamp,
    pub updated: Timestamp,
    pub user_edited: Timestamp,
}

impl Timestamps {
    /// Timestamps for a node created at `at`; everything else unset.
    #[must_use]
    pub fn created_at(at: Timestamp) -> Self {
        Self {
            created: at,
            ..Self::default()
        }
    }

    /// Returns true if the node has been moved to the trash.
    #[must_use]
    pub fn is_trashed(&self) -> bool {
        self.trashed.is_set()
    }

    /// Returns true if the node has been deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted.is_set()
    }
}

/// Identity of an entry in the notes tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub kind: Literal<NodeKind>,
    /// Empty for top-level nodes.
    pub parent_id: String,
    pub sort_value: i64,
    pub timestamps: Timestamps,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<String>, parent_id: impl Into<String>, sort_value: i64) -> Self {
        Self {
            id: id.into(),
            kind: Literal::new(),
            parent_id: parent_id.into(),
            sort_value,
            timestamps: Timestamps::default(),
        }
    }

    /// Returns true if the node sits at the top of the tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }
}

/// Shared header of the top-level containers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentNode {
    #[serde(flatten)]
    pub node: Node,
    pub title: String,
    #[serde(rename = "isArchived")]
    pub archived: bool,
    pub color: Color,
}

impl ParentNode {
    #[must_use]
    pub fn new(node: Node, title: impl Into<String>) -> Self {
        Self {
            node,
            title: title.into(),
            archived: false,
            color: Color::Default,
        }
    }
}

/// A textual entry. Its text lives in a single child node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    pub parent: ParentNode,
    #[serde(rename = "type")]
    pub kind: Literal<NoteType>,
}

impl Note {
    #[must_use]
    pub fn new(parent: ParentNode) -> Self {
        Self {
            parent,
            kind: Literal::new(),
        }
    }
}

/// A checklist. Its entries are child [`Item`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct List {
    #[serde(flatten)]
    pub parent: ParentNode,
    #[serde(rename = "type")]
    pub kind: Literal<ListType>,
}

impl List {
    #[must_use]
    pub fn new(parent: ParentNode) -> Self {
        Self {
            parent,
            kind: Literal::new(),
        }
    }
}

/// One line of a list (or the body of a note).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(flatten)]
    pub node: Node,
    #[serde(rename = "type")]
    pub kind: Literal<ItemType>,
    pub checked: bool,
    pub text: String,
}

impl Item {
    #[must_use]
    pub fn new(node: Node, text: impl Into<String>) -> Self {
        Self {
            node,
            kind: Literal::new(),
            checked: false,
            text: text.into(),
        }
    }
}
