//! Reminders attached to notes and lists.

use crate::error::{WireError, WireResult};
use crate::token::{Dismissed, Period};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

fn is_zero(n: &i32) -> bool {
    *n == 0
}

/// When a reminder should fire.
///
/// The date is always present. The time of day is either a named
/// [`Period`] or, when the period is [`Period::SpecificTime`], the explicit
/// `hour`, `minute` and `second`. The wire does not forbid both being set;
/// a named period wins when deriving the point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Time {
    pub year: i32,
    pub month: i32,
    pub day: i32,

    #[serde(default, skip_serializing_if = "Period::is_specific_time")]
    pub period: Period,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub hour: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub minute: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub second: i32,
}

impl Time {
    /// A reminder on the given date during a named part of the day.
    #[must_use]
    pub fn with_period(year: i32, month: i32, day: i32, period: Period) -> Self {
        Self {
            year,
            month,
            day,
            period,
            ..Self::default()
        }
    }

    /// A reminder at an exact time of day.
    #[must_use]
    pub fn at(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            period: Period::SpecificTime,
            hour,
            minute,
            second,
        }
    }

    /// Returns the hour, minute and second this reminder fires at.
    ///
    /// A named period maps to its canonical hour on the hour; only
    /// [`Period::SpecificTime`] consults the explicit fields.
    #[must_use]
    pub fn hms(&self) -> (i32, i32, i32) {
        match self.period.hour() {
            Some(h) => (h as i32, 0, 0),
            None => (self.hour, self.minute, self.second),
        }
    }

    /// Returns the zone-less date and time this reminder fires at.
    pub fn naive_datetime(&self) -> WireResult<NaiveDateTime> {
        let invalid = || WireError::InvalidReminderTime(format!("{self:?}"));
        let unsigned = |n: i32| u32::try_from(n).map_err(|_| invalid());

        let (h, m, s) = self.hms();
        NaiveDate::from_ymd_opt(self.year, unsigned(self.month)?, unsigned(self.day)?)
            .and_then(|d| d.and_hms_opt(unsigned(h).ok()?, unsigned(m).ok()?, unsigned(s).ok()?))
            .ok_or_else(invalid)
    }

    /// Returns the point in time this reminder fires at in `tz`.
    ///
    /// During a daylight-saving overlap the earlier instant is used; a time
    /// skipped by a transition is an error.
    pub fn datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> WireResult<DateTime<Tz>> {
        let naive = self.naive_datetime()?;
        tz.from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| WireError::InvalidReminderTime(format!("{naive} does not exist locally")))
    }

    /// Returns the point in time this reminder fires at in the local zone.
    pub fn local_datetime(&self) -> WireResult<DateTime<Local>> {
        self.datetime_in(&Local)
    }
}

/// A time and message to tell the user about a note or list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(rename = "state")]
    pub dismissed: Dismissed,
    pub description: String,
    #[serde(flatten)]
    pub time: Time,
}

impl Reminder {
    #[must_use]
    pub fn new(description: impl Into<String>, time: Time) -> Self {
        Self {
            dismissed: Dismissed::NotDismissed,
            description: description.into(),
            time,
        }
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed.is_dismissed()
    }

    /// Marks the reminder as acknowledged.
    pub fn dismiss(&mut self) {
        self.dismissed = Dismissed::Dismissed;
    }
}
