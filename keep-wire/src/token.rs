//! Enumerated string tokens.
//!
//! Each closed enumeration on the wire maps one-to-one onto a fixed set of
//! upper-case tokens. The mapping lives in an exhaustive `match` per type, so
//! adding a variant without a token fails to compile.

use crate::error::{WireError, WireResult, de_error, ser_error};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// An enumeration with a fixed wire token per variant.
pub trait Token: Sized + Copy + 'static {
    /// Name used in error messages.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Returns the wire token, or `None` for a variant that must be omitted.
    fn token(self) -> Option<&'static str>;

    /// Parses a wire token.
    fn from_token(token: &str) -> WireResult<Self>;

    /// Like [`Token::token`] but reports unencodable variants as an error.
    fn encode(self) -> WireResult<&'static str> {
        self.token()
            .ok_or(WireError::UnencodableVariant { kind: Self::KIND })
    }
}

fn unknown<T: Token>(found: &str) -> WireError {
    WireError::UnknownToken {
        kind: T::KIND,
        found: found.to_string(),
    }
}

fn serialize_token<T: Token, S: Serializer>(value: T, serializer: S) -> Result<S::Ok, S::Error> {
    let token = value.encode().map_err(ser_error)?;
    serializer.serialize_str(token)
}

fn deserialize_token<'de, T: Token, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    struct TokenVisitor<T>(PhantomData<T>);

    impl<T: Token> Visitor<'_> for TokenVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a {} token", T::KIND)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            T::from_token(v).map_err(de_error)
        }
    }

    deserializer.deserialize_str(TokenVisitor(PhantomData))
}

macro_rules! token_serde {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serialize_token(*self, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserialize_token(deserializer)
                }
            }

            impl FromStr for $ty {
                type Err = WireError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Token>::from_token(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    match self.token() {
                        Some(token) => f.write_str(token),
                        None => write!(f, "{:?}", self),
                    }
                }
            }
        )*
    };
}

token_serde!(Period, Color, Dismissed);

// ── Period ───────────────────────────────────────────────────────

/// A coarse time-of-day bucket for reminders.
///
/// `SpecificTime` means the reminder carries an explicit hour, minute and
/// second instead. It has no token: entities omit the `period` field when
/// it is unset, and encoding it directly is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    #[default]
    SpecificTime,
    /// 9am.
    Morning,
    /// 1pm.
    Afternoon,
    /// 5pm.
    Evening,
    /// 8pm.
    Night,
}

impl Period {
    /// Returns true for the unset default.
    #[must_use]
    pub fn is_specific_time(&self) -> bool {
        matches!(self, Self::SpecificTime)
    }

    /// Returns the hour a named bucket stands for.
    #[must_use]
    pub const fn hour(self) -> Option<u32> {
        match self {
            Self::SpecificTime => None,
            Self::Morning => Some(9),
            Self::Afternoon => Some(13),
            Self::Evening => Some(17),
            Self::Night => Some(20),
        }
    }
}

impl Token for Period {
    const KIND: &'static str = "Period";
    const ALL: &'static [Self] = &[
        Self::SpecificTime,
        Self::Morning,
        Self::Afternoon,
        Self::Evening,
        Self::Night,
    ];

    fn token(self) -> Option<&'static str> {
        match self {
            Self::SpecificTime => None,
            Self::Morning => Some("MORNING"),
            Self::Afternoon => Some("AFTERNOON"),
            Self::Evening => Some("EVENING"),
            Self::Night => Some("NIGHT"),
        }
    }

    fn from_token(token: &str) -> WireResult<Self> {
        match token {
            "MORNING" => Ok(Self::Morning),
            "AFTERNOON" => Ok(Self::Afternoon),
            "EVENING" => Ok(Self::Evening),
            "NIGHT" => Ok(Self::Night),
            other => Err(unknown::<Self>(other)),
        }
    }
}

// ── Color ────────────────────────────────────────────────────────

/// Background color of a note or list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Gray,
}

impl Token for Color {
    const KIND: &'static str = "Color";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Teal,
        Self::Blue,
        Self::Gray,
    ];

    fn token(self) -> Option<&'static str> {
        Some(match self {
            Self::Default => "DEFAULT",
            Self::Red => "RED",
            Self::Orange => "ORANGE",
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::Teal => "TEAL",
            Self::Blue => "BLUE",
            Self::Gray => "GRAY",
        })
    }

    fn from_token(token: &str) -> WireResult<Self> {
        match token {
            "DEFAULT" => Ok(Self::Default),
            "RED" => Ok(Self::Red),
            "ORANGE" => Ok(Self::Orange),
            "YELLOW" => Ok(Self::Yellow),
            "GREEN" => Ok(Self::Green),
            "TEAL" => Ok(Self::Teal),
            "BLUE" => Ok(Self::Blue),
            "GRAY" => Ok(Self::Gray),
            other => Err(unknown::<Self>(other)),
        }
    }
}

// ── Dismissed ────────────────────────────────────────────────────

/// Whether the user has acknowledged a reminder. Sent as the reminder's
/// `state` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dismissed {
    #[default]
    NotDismissed,
    Dismissed,
}

impl Dismissed {
    /// Returns true once the user has acknowledged the reminder.
    #[must_use]
    pub fn is_dismissed(self) -> bool {
        matches!(self, Self::Dismissed)
    }
}

impl From<bool> for Dismissed {
    fn from(dismissed: bool) -> Self {
        if dismissed {
            Self::Dismissed
        } else {
            Self::NotDismissed
        }
    }
}

impl From<Dismissed> for bool {
    fn from(d: Dismissed) -> Self {
        d.is_dismissed()
    }
}

impl Token for Dismissed {
    const KIND: &'static str = "Dismissed";
    const ALL: &'static [Self] = &[Self::NotDismissed, Self::Dismissed];

    fn token(self) -> Option<&'static str> {
        Some(match self {
            Self::NotDismissed => "INITIAL",
            Self::Dismissed => "DISMISSED",
        })
    }

    fn from_token(token: &str) -> WireResult<Self> {
        match token {
            "INITIAL" => Ok(Self::NotDismissed),
            "DISMISSED" => Ok(Self::Dismissed),
            other => Err(unknown::<Self>(other)),
        }
    }
}
