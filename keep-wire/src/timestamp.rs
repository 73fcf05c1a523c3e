//! Sentinel-encoded timestamps.
//!
//! The service writes every timestamp as `YYYY-MM-DDTHH:mm:ss.sssZ` in UTC.
//! It has no null: a timestamp that was never set (a note that was never
//! trashed, say) is sent as the Unix epoch, `1970-01-01T00:00:00.000Z`.
//! [`Timestamp`] keeps that distinction explicit in memory so callers never
//! confuse "unset" with a real instant.

use crate::error::{WireError, WireResult, de_error};
use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Timelike, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire string standing for an unset timestamp.
pub const UNSET_SENTINEL: &str = "1970-01-01T00:00:00.000Z";

/// Length of every wire timestamp.
const WIRE_LEN: usize = UNSET_SENTINEL.len();

/// Years the four-digit wire layout can carry.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A point in time that may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The unset timestamp.
    pub const UNSET: Self = Self(None);

    /// Creates a timestamp from an instant in any zone.
    ///
    /// The epoch instant is the service's "no value" marker, so it becomes
    /// [`Timestamp::UNSET`] whatever offset it was expressed in. Instants
    /// outside years 0000 to 9999 have no wire form and are rejected.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> WireResult<Self> {
        let utc = dt.with_timezone(&Utc);
        if utc == DateTime::UNIX_EPOCH {
            Ok(Self::UNSET)
        } else if YEARS.contains(&utc.year()) {
            Ok(Self(Some(utc)))
        } else {
            Err(WireError::MalformedTimestamp(
                utc.to_rfc3339_opts(SecondsFormat::Millis, true),
            ))
        }
    }

    /// Returns the current time, truncated to what the wire can carry.
    #[must_use]
    pub fn now() -> Self {
        let now = Utc::now();
        let millis = now.nanosecond() / 1_000_000 * 1_000_000;
        Self(Some(now.with_nanosecond(millis).unwrap_or(now)))
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the instant, or `None` when unset.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Formats for the wire.
    #[must_use]
    pub fn format(&self) -> String {
        match self.0 {
            None => UNSET_SENTINEL.to_string(),
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        }
    }

    /// Parses a wire string.
    ///
    /// The layout is fixed width: exactly four year digits and three
    /// fractional digits, a literal `T` and a literal `Z`.
    pub fn parse(s: &str) -> WireResult<Self> {
        if s == UNSET_SENTINEL {
            return Ok(Self::UNSET);
        }
        let malformed = || WireError::MalformedTimestamp(s.to_string());

        let b = s.as_bytes();
        if b.len() != WIRE_LEN {
            return Err(malformed());
        }
        for (i, &c) in b.iter().enumerate() {
            let ok = match i {
                4 | 7 => c == b'-',
                10 => c == b'T',
                13 | 16 => c == b':',
                19 => c == b'.',
                23 => c == b'Z',
                _ => c.is_ascii_digit(),
            };
            if !ok {
                return Err(malformed());
            }
        }

        let num = |from: usize, to: usize| {
            b[from..to]
                .iter()
                .fold(0u32, |acc, &c| acc * 10 + u32::from(c - b'0'))
        };
        let year = i32::try_from(num(0, 4)).map_err(|_| malformed())?;
        let dt = NaiveDate::from_ymd_opt(year, num(5, 7), num(8, 10))
            .and_then(|d| d.and_hms_milli_opt(num(11, 13), num(14, 16), num(17, 19), num(20, 23)))
            .ok_or_else(malformed)?;
        Self::from_datetime(&dt.and_utc())
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = WireError;

    fn try_from(dt: DateTime<Utc>) -> WireResult<Self> {
        Self::from_datetime(&dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a timestamp string like 2006-01-02T15:04:05.000Z")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
                Timestamp::parse(v).map_err(de_error)
            }
        }

        deserializer.deserialize_str(TimestampVisitor)
    }
}
