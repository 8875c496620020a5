use std::{fmt, str};

use fstr::FStr;
use thiserror::Error;

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The layout family of a UUID, as indicated by the top bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// Nil UUID.
    VarNil,
    /// Apollo NCS variant (`0xxx`).
    Var0,
    /// RFC variant (`10xx`), the only one this crate produces.
    Var10,
    /// Microsoft variant (`110x`).
    Var110,
    /// Reserved for future definition (`111x`).
    VarReserved,
    /// Max UUID.
    VarMax,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv6 field values.
    ///
    /// `time_high`, `time_mid` and `time_low` are the top 32, middle 16 and bottom 12 bits of the
    /// 60-bit count of 100-nanosecond intervals since 1582-10-15T00:00:00Z.
    ///
    /// # Panics
    ///
    /// Panics if `time_low` exceeds 12 bits, `clock_seq` exceeds 14 bits, or `node` exceeds 48
    /// bits.
    pub const fn from_fields_v6(
        time_high: u32,
        time_mid: u16,
        time_low: u16,
        clock_seq: u16,
        node: u64,
    ) -> Self {
        if time_low >= 1 << 12 || clock_seq >= 1 << 14 || node >= 1 << 48 {
            panic!("invalid field value");
        }

        Self([
            (time_high >> 24) as u8,
            (time_high >> 16) as u8,
            (time_high >> 8) as u8,
            time_high as u8,
            (time_mid >> 8) as u8,
            time_mid as u8,
            0x60 | (time_low >> 8) as u8,
            time_low as u8,
            0x80 | (clock_seq >> 8) as u8,
            clock_seq as u8,
            (node >> 40) as u8,
            (node >> 32) as u8,
            (node >> 24) as u8,
            (node >> 16) as u8,
            (node >> 8) as u8,
            node as u8,
        ])
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` exceeds 48 bits, `rand_a` exceeds 12 bits, or `rand_b` exceeds 62
    /// bits.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    pub fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0x0..=0x7 if self.0 == [0x00; 16] => Variant::VarNil,
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            0xe..=0xf if self.0 == [0xff; 16] => Variant::VarMax,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.0[8] >> 6 {
            0b10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Reads the top 48 bits, which hold the Unix timestamp in milliseconds of a UUIDv7.
    pub fn unix_ts_ms(&self) -> u64 {
        self.0[..6]
            .iter()
            .fold(0u64, |acc, &e| (acc << 8) | u64::from(e))
    }

    /// Reassembles the 60-bit count of 100-nanosecond intervals since 1582-10-15 that a UUIDv6
    /// splits across its first eight bytes.
    pub fn gregorian_ts(&self) -> u64 {
        let high_and_mid = self.0[..6]
            .iter()
            .fold(0u64, |acc, &e| (acc << 8) | u64::from(e));
        (high_and_mid << 12) | (u64::from(self.0[6] & 0x0f) << 8) | u64::from(self.0[7])
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// [`FStr`] that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidgen::Uuid;
    ///
    /// let x = "1ec9414c-232a-6b00-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
    /// assert_eq!(format!("{}", y), "1ec9414c-232a-6b00-b3c8-9f6bdeced846");
    /// # Ok::<(), uuidgen::ParseUuidError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, &e) in self.0.iter().enumerate() {
            buffer[j] = DIGITS[usize::from(e >> 4)];
            buffer[j + 1] = DIGITS[usize::from(e & 15)];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[j] = b'-';
                j += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written above is an ASCII hex digit or a hyphen
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseUuidError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseUuidError = ParseUuidError {};
        let mut dst = [0u8; 16];
        let mut iter = src.chars();
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            let lo = iter.next().ok_or(ERR)?.to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            if (i == 3 || i == 5 || i == 7 || i == 9) && iter.next().ok_or(ERR)? != '-' {
                return Err(ERR);
            }
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("invalid string representation of UUID")]
pub struct ParseUuidError {}
