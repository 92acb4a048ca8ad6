//! # slot-engine
//!
//! Deterministic available-slot finding over working-hours calendars.
//!
//! Given a search window, a set of busy intervals from an external calendar,
//! a working-hours policy, and a desired meeting duration, the engine
//! enumerates every candidate slot that fits the policy and does not conflict
//! (within a buffer) with any busy interval. The whole computation is a pure
//! function of its inputs: no I/O, no shared state, safe to call from any
//! thread.
//!
//! ## Modules
//!
//! - [`finder`] — candidate slot enumeration over the search window
//! - [`conflict`] — busy-interval validation, padding, and merging
//! - [`policy`] — working-hours policies with DST-aware local time mapping
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod finder;
pub mod policy;

pub use conflict::{merge_blocked_spans, BusyInterval};
pub use error::SlotError;
pub use finder::{
    find_available_slots, find_first_available, CandidateSlot, MeetingDetails, SearchRequest,
};
pub use policy::WorkingHoursPolicy;
