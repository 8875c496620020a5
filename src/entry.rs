//! Entry point functions backed by the operating system random number generator

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;

use crate::generator::with_rand08::Adapter;
use crate::{Error, Generator};

/// Returns a generator that reads the system clock and draws from the operating system random
/// number generator. Nothing is shared between calls.
fn os_generator() -> Generator<Adapter<OsRng>> {
    Generator::with_rand08(OsRng)
}

/// Generates a UUIDv4 string.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::generate_v4()?;
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuidgen::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the operating system random number generator fails.
pub fn generate_v4() -> Result<String, Error> {
    Ok(os_generator().v4()?.to_string())
}

/// Generates a UUIDv6 string from the current time.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::generate_v6()?;
/// println!("{uuid}"); // e.g., "1f04b7c2-9d3e-6a10-8f52-3c1e9b7d0a44"
/// # Ok::<(), uuidgen::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the operating system random number generator fails.
pub fn generate_v6() -> Result<String, Error> {
    Ok(os_generator().v6()?.to_string())
}

/// Generates a UUIDv7 string from the current time.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidgen::generate_v7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// # Ok::<(), uuidgen::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the operating system random number generator fails.
pub fn generate_v7() -> Result<String, Error> {
    Ok(os_generator().v7()?.to_string())
}

/// Generates a UUIDv7 string that embeds `timestamp` instead of the current time.
///
/// # Examples
///
/// ```rust
/// let t = uuidgen::timestamp::parse_timestamp("2023-06-14")?;
/// let uuid = uuidgen::generate_v7_with_timestamp(t)?;
/// assert!(uuid.starts_with("0188b733-b800-7"));
/// # Ok::<(), uuidgen::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if `timestamp` cannot be held in 48 bits of Unix
/// milliseconds, or [`Error::RandomSource`] if the operating system random number generator
/// fails.
pub fn generate_v7_with_timestamp(timestamp: DateTime<Utc>) -> Result<String, Error> {
    Ok(os_generator().v7_at(timestamp)?.to_string())
}
