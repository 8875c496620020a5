//! Generators of UUID versions 4, 6 and 7, and a parser for the timestamps UUIDv7 can be built
//! from
//!
//! ```rust
//! let uuid = uuidgen::generate_v7()?;
//! println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//!
//! let t = uuidgen::timestamp::parse_timestamp("2023-06-14T10:30:45Z")?;
//! let uuid = uuidgen::generate_v7_with_timestamp(t)?;
//! assert!(uuid.starts_with("0188b975-3008-7"));
//! # Ok::<(), uuidgen::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout
//!
//! UUIDv7 carries a 48-bit Unix timestamp in milliseconds followed by 74 random bits:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           unix_ts_ms                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! UUIDv6 reorders the 60-bit count of 100-nanosecond intervals since 1582-10-15 so that the
//! most significant bits come first:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_high                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_low        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`, `0110` or `0111` for UUIDv4, UUIDv6 and UUIDv7.
//! - The 2-bit `var` field is set at `10`.
//! - `rand_a`, `rand_b`, `clock_seq` and `node` are filled with a cryptographically strong random
//!   number. This implementation never writes a hardware address into `node`.
//! - UUIDv4 fills all 122 bits other than `ver` and `var` with a cryptographically strong random
//!   number.
//!
//! A UUIDv6 timestamp that falls outside the 60-bit field is clamped to the nearest bound. A
//! UUIDv7 timestamp that falls outside the 48-bit field is rejected with
//! [`Error::TimestampOutOfRange`].
//!
//! # Randomness
//!
//! The entry point functions draw from the operating system random number generator on every call
//! and keep no state between calls. When the operating system cannot supply random bytes, they
//! fail with [`Error::RandomSource`] rather than fall back to anything predictable.

mod error;
mod id;
pub use error::Error;
pub use id::{ParseUuidError, Uuid, Variant};

pub mod generator;
pub use generator::Generator;

pub mod timestamp;

mod entry;
pub use entry::{generate_v4, generate_v6, generate_v7, generate_v7_with_timestamp};

pub mod cli;
