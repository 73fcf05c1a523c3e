//! Error types for the wire codec.

use std::cell::RefCell;
use thiserror::Error;

/// Errors raised while encoding or decoding wire values.
#[derive(Debug, Error)]
pub enum WireError {
    /// A literal field held something other than its fixed constant.
    #[error("tag mismatch: expected {expected:?} got {found:?}")]
    TagMismatch {
        expected: &'static str,
        found: String,
    },

    /// An enumerated field held a token outside its closed set.
    #[error("unknown {kind} token {found:?}")]
    UnknownToken { kind: &'static str, found: String },

    /// A timestamp was neither the unset sentinel nor `YYYY-MM-DDTHH:mm:ss.sssZ`.
    #[error("malformed timestamp {0:?}")]
    MalformedTimestamp(String),

    /// The variant has no wire token and must be omitted instead.
    #[error("{kind} default variant has no wire token")]
    UnencodableVariant { kind: &'static str },

    /// Reminder fields do not name a real date and time.
    #[error("invalid reminder time: {0}")]
    InvalidReminderTime(String),

    /// Structural JSON error: bad syntax, wrong value type, missing field.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WireError {
    /// Returns true if this error means the peer sent (or we produced) a
    /// payload outside the protocol, as opposed to a local value problem.
    #[must_use]
    pub fn is_incompatible_format(&self) -> bool {
        match self {
            Self::TagMismatch { .. } | Self::UnknownToken { .. } | Self::MalformedTimestamp(_) => {
                true
            }
            Self::Json(err) => err.is_data() || err.is_syntax() || err.is_eof(),
            Self::UnencodableVariant { .. } | Self::InvalidReminderTime(_) => false,
        }
    }
}

/// Result type for wire operations.
pub type WireResult<T> = Result<T, WireError>;

thread_local! {
    /// Last codec error raised from inside a serde impl on this thread.
    static RAISED: RefCell<Option<WireError>> = const { RefCell::new(None) };
}

fn stash(err: WireError) -> String {
    let msg = err.to_string();
    RAISED.with(|slot| *slot.borrow_mut() = Some(err));
    msg
}

/// Converts a codec error into a deserializer error, remembering the typed
/// value so [`recover`] can hand it back.
pub(crate) fn de_error<E: serde::de::Error>(err: WireError) -> E {
    E::custom(stash(err))
}

/// Converts a codec error into a serializer error, remembering the typed
/// value so [`recover`] can hand it back.
pub(crate) fn ser_error<E: serde::ser::Error>(err: WireError) -> E {
    E::custom(stash(err))
}

/// Forgets any error left over from an earlier call.
pub(crate) fn reset() {
    RAISED.with(|slot| *slot.borrow_mut() = None);
}

/// Returns the typed codec error behind a serde_json failure, or the json
/// error itself when the failure was structural.
pub(crate) fn recover(err: serde_json::Error) -> WireError {
    match RAISED.with(|slot| slot.borrow_mut().take()) {
        Some(raised) if err.to_string().starts_with(&raised.to_string()) => raised,
        _ => WireError::Json(err),
    }
}
