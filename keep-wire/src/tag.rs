//! Literal tag fields.
//!
//! Some wire fields carry no information at all: a node's `kind` is always
//! `"notes#node"`, a note's `type` is always `"NOTE"`, and so on. They exist
//! so the service can tell record shapes apart. [`Literal`] models such a
//! field as a zero-sized value that always encodes to its constant and only
//! decodes from exactly that constant.

use crate::error::{WireError, WireResult, de_error};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A marker naming the constant carried by a [`Literal`] field.
pub trait Tag {
    /// The exact string found on the wire.
    const VALUE: &'static str;
}

/// A field whose wire value is always `K::VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Literal<K>(PhantomData<K>);

impl<K: Tag> Literal<K> {
    /// Creates the (only) value of this tag.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Returns the constant this tag encodes to.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        K::VALUE
    }

    /// Checks an observed wire string against the constant.
    pub fn check(found: &str) -> WireResult<Self> {
        if found == K::VALUE {
            Ok(Self::new())
        } else {
            Err(WireError::TagMismatch {
                expected: K::VALUE,
                found: found.to_string(),
            })
        }
    }
}

impl<K: Tag> fmt::Display for Literal<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(K::VALUE)
    }
}

impl<K: Tag> Serialize for Literal<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(K::VALUE)
    }
}

impl<'de, K: Tag> Deserialize<'de> for Literal<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LiteralVisitor<K>(PhantomData<K>);

        impl<K: Tag> Visitor<'_> for LiteralVisitor<K> {
            type Value = Literal<K>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "the string {:?}", K::VALUE)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Literal::check(v).map_err(de_error)
            }
        }

        deserializer.deserialize_str(LiteralVisitor(PhantomData))
    }
}

macro_rules! tags {
    ($($(#[$meta:meta])* $name:ident => $value:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Tag for $name {
                const VALUE: &'static str = $value;
            }
        )*
    };
}

tags! {
    /// `kind` of every node.
    NodeKind => "notes#node";
    /// `kind` of a node's timestamps block.
    TimestampsKind => "notes#timestamps";
    /// `type` of a note.
    NoteType => "NOTE";
    /// `type` of a list.
    ListType => "LIST";
    /// `type` of a list item.
    ItemType => "LIST_ITEM";
}
