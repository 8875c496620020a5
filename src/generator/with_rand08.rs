//! Integration with `rand` (v0.8) crate.

use super::{Generator, RandSource};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// Bytes are drawn through the fallible [`RngCore::try_fill_bytes`] so that an unavailable
/// operating system generator surfaces as [`Error::RandomSource`] instead of a panic.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| Error::RandomSource(Box::new(e)))
    }
}

impl<T: RngCore> Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate and the system clock.
    ///
    /// Only a cryptographically secure generator such as [`rand::rngs::OsRng`] is suitable for
    /// production use.
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}
