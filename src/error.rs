//! Error type shared by the generator and the entry point functions.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::timestamp::ParseTimestampError;

/// Errors that can occur while producing a UUID.
#[derive(Debug, Error)]
pub enum Error {
    /// The cryptographically secure random source could not supply bytes.
    #[error("secure random source unavailable: {0}")]
    RandomSource(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The timestamp cannot be expressed as a 48-bit count of Unix milliseconds.
    #[error("timestamp {0} is outside the range representable by UUIDv7 (1970-01-01 to 10889-08-02)")]
    TimestampOutOfRange(DateTime<Utc>),

    /// The timestamp string could not be parsed.
    #[error(transparent)]
    Timestamp(#[from] ParseTimestampError),
}
