//! UUID generator and the random number and clock interfaces it is built on.

use chrono::{DateTime, Utc};

use crate::{Error, Uuid};

pub mod with_rand08;


/// A trait that defines the random number source interface for [`Generator`].
pub trait RandSource {
    /// Fills `dest` entirely with cryptographically strong random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the source cannot supply the bytes. Implementations must
    /// fail rather than substitute weaker randomness.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current point in time.
    fn now(&mut self) -> DateTime<Utc>;
}

/// The default [`TimeSource`] that reads the system wall clock.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Number of 100-nanosecond intervals from 1582-10-15T00:00:00Z to the Unix epoch.
const GREGORIAN_OFFSET: i64 = 122_192_928_000_000_000;

const MAX_GREGORIAN_TS: u64 = (1 << 60) - 1;

const MAX_UNIX_TS_MS: u64 = (1 << 48) - 1;

/// Represents a UUID generator that produces UUIDv4, UUIDv6 and UUIDv7 values.
///
/// The generator holds nothing but its random number source and its clock, so every call is
/// independent of the previous ones. Both sources are pluggable to make the encoding testable with
/// a fixed clock or a seeded random number generator.
///
/// # Examples
///
/// ```rust
/// use uuidgen::Generator;
///
/// let mut g = Generator::with_rand08(rand::rngs::OsRng);
/// println!("{}", g.v4()?);
/// println!("{}", g.v6()?);
/// println!("{}", g.v7()?);
/// # Ok::<(), uuidgen::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    rand_source: R,
    time_source: T,
}

impl<R: RandSource> Generator<R> {
    /// Creates a generator object with a random number source and the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator object with specified random number and time sources.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the random number source fails.
    pub fn v4(&mut self) -> Result<Uuid, Error> {
        let mut bytes = [0u8; 16];
        self.rand_source.try_fill_bytes(&mut bytes)?;
        bytes[6] = 0x40 | (bytes[6] >> 4);
        bytes[8] = 0x80 | (bytes[8] >> 2);
        Ok(Uuid::from(bytes))
    }

    /// Generates a new UUIDv6 object from the current time.
    ///
    /// The clock sequence and node fields are filled with random bits instead of a hardware
    /// address. A clock reading outside the 60-bit range of the timestamp field is clamped to the
    /// nearest bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the random number source fails.
    pub fn v6(&mut self) -> Result<Uuid, Error> {
        let gregorian_ts = gregorian_ts(&self.time_source.now());

        let mut clock_seq = [0u8; 2];
        let mut node = [0u8; 8];
        self.rand_source.try_fill_bytes(&mut clock_seq)?;
        self.rand_source.try_fill_bytes(&mut node)?;

        Ok(Uuid::from_fields_v6(
            u32::try_from(gregorian_ts >> 28).unwrap_or(u32::MAX),
            u16::try_from((gregorian_ts >> 12) & 0xffff).unwrap_or(u16::MAX),
            u16::try_from(gregorian_ts & 0x0fff).unwrap_or(0x0fff),
            u16::from_be_bytes(clock_seq) >> 2,
            u64::from_be_bytes(node) >> 16,
        ))
    }

    /// Generates a new UUIDv7 object from the current time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the random number source fails, or
    /// [`Error::TimestampOutOfRange`] if the clock reads earlier than the Unix epoch.
    pub fn v7(&mut self) -> Result<Uuid, Error> {
        let now = self.time_source.now();
        self.v7_at(now)
    }

    /// Generates a new UUIDv7 object that embeds the `timestamp` passed.
    ///
    /// Calls with the same `timestamp` share the leading 48 bits but differ in the 74 random
    /// bits that follow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `timestamp` is earlier than the Unix epoch or
    /// does not fit in 48 bits of milliseconds, or [`Error::RandomSource`] if the random number
    /// source fails.
    pub fn v7_at(&mut self, timestamp: DateTime<Utc>) -> Result<Uuid, Error> {
        let unix_ts_ms = u64::try_from(timestamp.timestamp_millis())
            .ok()
            .filter(|&ms| ms <= MAX_UNIX_TS_MS)
            .ok_or(Error::TimestampOutOfRange(timestamp))?;

        let mut rand_a = [0u8; 2];
        let mut rand_b = [0u8; 8];
        self.rand_source.try_fill_bytes(&mut rand_a)?;
        self.rand_source.try_fill_bytes(&mut rand_b)?;

        Ok(Uuid::from_fields_v7(
            unix_ts_ms,
            u16::from_be_bytes(rand_a) >> 4,
            u64::from_be_bytes(rand_b) >> 2,
        ))
    }
}

/// Converts a point in time into the count of 100-nanosecond intervals since 1582-10-15, clamped
/// to `0..=2^60 - 1`.
fn gregorian_ts(time: &DateTime<Utc>) -> u64 {
    let intervals = time
        .timestamp()
        .checked_mul(10_000_000)
        .and_then(|t| t.checked_add(i64::from(time.timestamp_subsec_nanos() / 100)))
        .and_then(|t| t.checked_add(GREGORIAN_OFFSET));

    match intervals {
        Some(t) => u64::try_from(t).map_or(0, |t| t.min(MAX_GREGORIAN_TS)),
        None if time.timestamp() < 0 => 0,
        None => MAX_GREGORIAN_TS,
    }
}
