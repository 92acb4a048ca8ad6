//! Candidate slot enumeration over working-hours calendars.
//!
//! Iterates calendar days across the search window, steps candidate start
//! times by the request granularity within each day's working hours, and
//! emits every candidate that clears the window bounds and the padded busy
//! intervals. The output is "all viable start points", not a disjoint
//! packing: with a 15-minute granularity and a 30-minute duration,
//! consecutive candidates overlap by design.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::conflict::{merge_blocked_spans, overlaps_any, BusyInterval};
use crate::error::{Result, SlotError};
use crate::policy::WorkingHoursPolicy;

/// Optional meeting metadata carried alongside a search.
///
/// These fields never affect which slots are found; the calling layer
/// forwards them when it turns an accepted slot into a calendar event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingDetails {
    pub description: Option<String>,
    pub location: Option<String>,
    pub attendees: Vec<String>,
}

/// Parameters for one slot search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    /// Length of the meeting to place, in minutes. Must be positive.
    pub duration_minutes: i64,
    pub policy: WorkingHoursPolicy,
    /// Padding applied around every busy interval before conflict testing.
    /// Must be non-negative.
    pub buffer_minutes: i64,
    /// Step size for candidate start times, anchored at each day's
    /// start-of-day. Must be positive.
    pub granularity_minutes: i64,
    pub details: Option<MeetingDetails>,
}

impl SearchRequest {
    /// Build a request with the default policy, a 15-minute granularity, and
    /// no buffer.
    pub fn new(
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        duration_minutes: i64,
    ) -> Self {
        Self {
            window_start,
            window_end,
            duration_minutes,
            policy: WorkingHoursPolicy::default(),
            buffer_minutes: 0,
            granularity_minutes: 15,
            details: None,
        }
    }
}

/// A candidate meeting slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Find every available slot in the search window.
///
/// Iterates calendar days (in the policy timezone) from the window start's
/// day to the window end's day inclusive. On each active weekday, candidate
/// starts step from `start_of_day` by `granularity_minutes` while the
/// candidate still fits before `end_of_day`. A candidate is emitted iff it
/// lies within `[window_start, window_end)` and does not overlap any padded
/// busy interval under the half-open test. Results are strictly increasing by
/// start time by construction; no sort step is needed.
///
/// Pure function of its inputs: no I/O, no shared state, safe to call
/// concurrently.
///
/// # Errors
/// - `SlotError::InvalidRange` if `window_end <= window_start`.
/// - `SlotError::InvalidParameter` for a non-positive duration or
///   granularity, a negative buffer, or inverted working hours.
/// - `SlotError::MalformedBusy` if any busy interval has `end <= start`.
pub fn find_available_slots(
    request: &SearchRequest,
    busy: &[BusyInterval],
) -> Result<Vec<CandidateSlot>> {
    if request.window_end <= request.window_start {
        return Err(SlotError::InvalidRange(format!(
            "window end {} is not after window start {}",
            request.window_end, request.window_start
        )));
    }
    if request.duration_minutes <= 0 {
        return Err(SlotError::InvalidParameter(format!(
            "duration must be positive, got {}",
            request.duration_minutes
        )));
    }
    if request.granularity_minutes <= 0 {
        return Err(SlotError::InvalidParameter(format!(
            "granularity must be positive, got {}",
            request.granularity_minutes
        )));
    }
    if request.buffer_minutes < 0 {
        return Err(SlotError::InvalidParameter(format!(
            "buffer must be non-negative, got {}",
            request.buffer_minutes
        )));
    }
    request.policy.validate()?;

    let blocked = merge_blocked_spans(busy, request.buffer_minutes)?;

    let duration = Duration::minutes(request.duration_minutes);
    let step = Duration::minutes(request.granularity_minutes);
    let tz = request.policy.timezone;

    let first_day = request.window_start.with_timezone(&tz).date_naive();
    let last_day = request.window_end.with_timezone(&tz).date_naive();

    let mut slots = Vec::new();
    for day in first_day.iter_days() {
        if day > last_day {
            break;
        }
        if !request.policy.is_active(day.weekday()) {
            continue;
        }

        let (open, close) = request.policy.day_bounds(day);
        let mut cursor = open;
        while cursor + duration <= close {
            // Candidates in the DST spring-forward gap have no UTC instant.
            if let Some(start) = request.policy.to_utc(cursor) {
                let end = start + duration;
                if start >= request.window_start
                    && end <= request.window_end
                    && !overlaps_any(start, end, &blocked)
                {
                    slots.push(CandidateSlot {
                        start,
                        end,
                        duration_minutes: request.duration_minutes,
                    });
                }
            }
            cursor += step;
        }
    }

    Ok(slots)
}

/// Find the first available slot in the search window, if any.
///
/// Delegates to [`find_available_slots`] and returns the earliest candidate.
pub fn find_first_available(
    request: &SearchRequest,
    busy: &[BusyInterval],
) -> Result<Option<CandidateSlot>> {
    Ok(find_available_slots(request, busy)?.into_iter().next())
}
