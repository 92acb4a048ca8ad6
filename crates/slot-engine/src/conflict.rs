//! Busy-interval conflict algebra.
//!
//! Validates raw busy intervals from an external calendar, pads each one with
//! the scheduling buffer, and merges the padded set into a sorted,
//! non-overlapping list of blocked spans. Candidates are tested against the
//! spans with a half-open overlap check: adjacent ranges (one ends exactly
//! when the other starts) are NOT conflicts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A pre-existing commitment block sourced from an external calendar.
///
/// Input is untrusted: an interval whose `end` is not strictly after its
/// `start` is rejected rather than skipped, since a dropped interval could
/// surface a slot that actually conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Pad each busy interval by `buffer_minutes` on both sides, then merge
/// overlapping or touching padded intervals.
///
/// Returns a sorted, non-overlapping list of (start, end) blocked spans.
/// Intervals are NOT clipped to any search window — a commitment outside the
/// window still blocks every candidate its padded form overlaps. Merging the
/// padded set does not change conflict outcomes: overlap against the union is
/// the same as overlap against any member.
///
/// # Errors
/// Returns `SlotError::MalformedBusy` if any interval has `end <= start`.
pub fn merge_blocked_spans(
    busy: &[BusyInterval],
    buffer_minutes: i64,
) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>> {
    let pad = Duration::minutes(buffer_minutes);

    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::with_capacity(busy.len());
    for interval in busy {
        if interval.end <= interval.start {
            return Err(SlotError::MalformedBusy(format!(
                "interval ends at or before it starts: {} -> {}",
                interval.start, interval.end
            )));
        }
        intervals.push((interval.start - pad, interval.end + pad));
    }

    if intervals.is_empty() {
        return Ok(Vec::new());
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|&(start, end)| (start, end));

    // Merge overlapping intervals.
    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or touching — extend the current span.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    Ok(merged)
}

/// Half-open overlap test against a list of blocked spans.
///
/// `[start, end)` conflicts with `[span_start, span_end)` iff
/// `start < span_end && end > span_start`. A candidate ending exactly at a
/// span start, or starting exactly at a span end, is free.
pub fn overlaps_any(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    blocked: &[(DateTime<Utc>, DateTime<Utc>)],
) -> bool {
    blocked
        .iter()
        .any(|&(span_start, span_end)| start < span_end && end > span_start)
}
