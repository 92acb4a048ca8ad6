//! Tests for busy-interval padding and merging.

use chrono::{TimeZone, Utc};
use slot_engine::{merge_blocked_spans, BusyInterval, SlotError};

fn busy(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> BusyInterval {
    BusyInterval {
        start: Utc
            .with_ymd_and_hms(2024, 1, 1, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(2024, 1, 1, end_hour, end_min, 0)
            .unwrap(),
    }
}

#[test]
fn empty_input_yields_no_spans() {
    let spans = merge_blocked_spans(&[], 15).unwrap();
    assert!(spans.is_empty());
}

#[test]
fn zero_buffer_keeps_separate_intervals_separate() {
    let spans = merge_blocked_spans(&[busy(10, 0, 10, 30), busy(11, 0, 11, 30)], 0).unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].0, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    assert_eq!(spans[0].1, Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap());
}

#[test]
fn overlapping_intervals_merge() {
    // 10:00-11:30 and 11:00-12:00 → single span 10:00-12:00.
    let spans = merge_blocked_spans(&[busy(10, 0, 11, 30), busy(11, 0, 12, 0)], 0).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].0, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    assert_eq!(spans[0].1, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
}

#[test]
fn padding_joins_nearby_intervals() {
    // 10:00-10:30 and 11:00-11:30 padded by 15 min become [09:45, 10:45] and
    // [10:45, 11:45] — touching, so they coalesce.
    let spans = merge_blocked_spans(&[busy(10, 0, 10, 30), busy(11, 0, 11, 30)], 15).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].0, Utc.with_ymd_and_hms(2024, 1, 1, 9, 45, 0).unwrap());
    assert_eq!(spans[0].1, Utc.with_ymd_and_hms(2024, 1, 1, 11, 45, 0).unwrap());
}

#[test]
fn unsorted_input_comes_back_sorted() {
    let spans = merge_blocked_spans(
        &[busy(14, 0, 15, 0), busy(9, 0, 10, 0), busy(11, 0, 12, 0)],
        0,
    )
    .unwrap();
    assert_eq!(spans.len(), 3);
    for pair in spans.windows(2) {
        assert!(pair[0].1 < pair[1].0, "spans must be sorted and disjoint");
    }
}

#[test]
fn zero_length_interval_is_malformed() {
    let err = merge_blocked_spans(&[busy(10, 0, 10, 0)], 0).unwrap_err();
    assert!(matches!(err, SlotError::MalformedBusy(_)));
}

#[test]
fn inverted_interval_is_malformed() {
    let err = merge_blocked_spans(&[busy(11, 0, 10, 0)], 15).unwrap_err();
    assert!(matches!(err, SlotError::MalformedBusy(_)));
}

#[test]
fn malformed_interval_rejected_even_among_valid_ones() {
    // The bad interval must fail the whole call, not get skipped.
    let err = merge_blocked_spans(&[busy(9, 0, 10, 0), busy(12, 0, 11, 0)], 0).unwrap_err();
    assert!(matches!(err, SlotError::MalformedBusy(_)));
}
