//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid search window: {0}")]
    InvalidRange(String),

    #[error("Invalid search parameter: {0}")]
    InvalidParameter(String),

    #[error("Malformed busy interval: {0}")]
    MalformedBusy(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
