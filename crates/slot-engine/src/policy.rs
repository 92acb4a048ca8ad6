//! Working-hours policies with DST-aware local time mapping.
//!
//! A policy defines the recurring daily time range and weekday set during
//! which slots may be offered, interpreted in an IANA timezone. Day bounds are
//! computed in local wall-clock time and resolved to UTC via `chrono-tz`.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// The recurring daily window and weekday set during which slots may be
/// offered.
///
/// Defaults to 09:00–17:00 UTC, Monday through Friday. An empty weekday set
/// is valid and yields no slots.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingHoursPolicy {
    /// IANA timezone in which `start_of_day` and `end_of_day` are interpreted.
    pub timezone: Tz,
    pub start_of_day: NaiveTime,
    pub end_of_day: NaiveTime,
    /// Weekdays on which slots may be offered.
    pub active_weekdays: Vec<Weekday>,
}

impl Default for WorkingHoursPolicy {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            start_of_day: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_of_day: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            active_weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
        }
    }
}

impl WorkingHoursPolicy {
    /// Check the policy invariant: the day must open before it closes.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidParameter` if `start_of_day >= end_of_day`.
    pub fn validate(&self) -> Result<()> {
        if self.start_of_day >= self.end_of_day {
            return Err(SlotError::InvalidParameter(format!(
                "start of day {} is not before end of day {}",
                self.start_of_day, self.end_of_day
            )));
        }
        Ok(())
    }

    /// Whether slots may be offered on the given weekday.
    pub fn is_active(&self, weekday: Weekday) -> bool {
        self.active_weekdays.contains(&weekday)
    }

    /// Local working-hours bounds for a calendar day.
    pub fn day_bounds(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (day.and_time(self.start_of_day), day.and_time(self.end_of_day))
    }

    /// Resolve a local wall-clock time in this policy's timezone to UTC.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    /// Nonexistent local times (DST spring-forward gap) have no UTC instant
    /// and return `None`; the finder skips candidates in the gap.
    pub fn to_utc(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self.timezone.from_local_datetime(&local) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => None,
        }
    }
}
