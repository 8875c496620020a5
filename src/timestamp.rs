//! Parsing of free-form timestamp strings into UTC points in time.
//!
//! Accepted formats, in the order they are tried:
//!
//! 1. Exactly 10 ASCII digits: Unix seconds (`1686742245`).
//! 2. Exactly 13 ASCII digits: Unix milliseconds (`1686742245123`).
//! 3. RFC 3339 with an offset (`2023-06-14T10:30:45Z`, `2023-06-14T10:30:45-05:00`).
//! 4. Date and time without an offset, read as UTC (`2023-06-14T10:30:45`).
//! 5. Date only, read as midnight UTC (`2023-06-14`).
//! 6. Date and space-separated time, read as UTC (`2023-06-14 10:30:45`).
//! 7. Any other all-digit string: milliseconds if greater than 10^12, seconds otherwise.
//!
//! The last rule is a heuristic for digit counts other than 10 and 13 and its threshold is
//! implementation-defined.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

/// A point in time normalized to UTC.
pub type Timestamp = DateTime<Utc>;

/// Inputs longer than this many bytes are rejected before any parse is attempted.
pub const MAX_INPUT_LEN: usize = 64;

/// Numeric inputs of irregular length above this value are read as milliseconds.
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

const SUPPORTED_FORMATS: &str = "Unix timestamp (seconds/milliseconds), \
    RFC3339 (2023-06-14T10:30:45Z), ISO date (2023-06-14), \
    or date-time (2023-06-14 10:30:45)";

/// Errors that can occur during timestamp parsing.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ParseTimestampError {
    /// The timestamp string is empty.
    #[error("empty timestamp string; supported formats: {}", SUPPORTED_FORMATS)]
    Empty,

    /// The timestamp string exceeds [`MAX_INPUT_LEN`].
    #[error("timestamp string of {len} bytes exceeds the limit of {} bytes", MAX_INPUT_LEN)]
    TooLong {
        /// Length of the rejected input in bytes.
        len: usize,
    },

    /// No supported format matched.
    #[error("unable to parse timestamp '{0}'; supported formats: {}", SUPPORTED_FORMATS)]
    Unrecognized(String),

    /// The input is numeric but names an instant chrono cannot represent.
    #[error("timestamp '{0}' is out of the representable range")]
    OutOfRange(String),
}

/// Parses a timestamp string into a UTC point in time.
///
/// # Examples
///
/// ```rust
/// use uuidgen::timestamp::parse_timestamp;
///
/// let t = parse_timestamp("2023-06-14T10:30:45-05:00")?;
/// assert_eq!(t.to_rfc3339(), "2023-06-14T15:30:45+00:00");
/// # Ok::<(), uuidgen::timestamp::ParseTimestampError>(())
/// ```
///
/// # Errors
///
/// Returns [`ParseTimestampError`] if the input is empty, too long, matches none of the
/// supported formats, or is a number out of the representable range.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, ParseTimestampError> {
    if input.is_empty() {
        return Err(ParseTimestampError::Empty);
    }
    if input.len() > MAX_INPUT_LEN {
        return Err(ParseTimestampError::TooLong { len: input.len() });
    }

    let all_digits = input.bytes().all(|b| b.is_ascii_digit());
    if all_digits && input.len() == 10 {
        return from_unix_seconds(input);
    }
    if all_digits && input.len() == 13 {
        return from_unix_millis(input);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&midnight));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if all_digits {
        if let Ok(value) = input.parse::<i64>() {
            return if value > MILLIS_THRESHOLD {
                millis_to_timestamp(value, input)
            } else {
                seconds_to_timestamp(value, input)
            };
        }
    }

    Err(ParseTimestampError::Unrecognized(input.to_owned()))
}

fn from_unix_seconds(input: &str) -> Result<Timestamp, ParseTimestampError> {
    let secs = input
        .parse()
        .map_err(|_| ParseTimestampError::Unrecognized(input.to_owned()))?;
    seconds_to_timestamp(secs, input)
}

fn from_unix_millis(input: &str) -> Result<Timestamp, ParseTimestampError> {
    let millis = input
        .parse()
        .map_err(|_| ParseTimestampError::Unrecognized(input.to_owned()))?;
    millis_to_timestamp(millis, input)
}

fn seconds_to_timestamp(secs: i64, input: &str) -> Result<Timestamp, ParseTimestampError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| ParseTimestampError::OutOfRange(input.to_owned()))
}

fn millis_to_timestamp(millis: i64, input: &str) -> Result<Timestamp, ParseTimestampError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ParseTimestampError::OutOfRange(input.to_owned()))
}
