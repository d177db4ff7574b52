//! Integration with `rand` (v0.8) crate.

use super::{RandSource, RandomGenerator, TimeBasedGenerator, TimeSource};
use crate::SourceExhaustedError;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceExhaustedError> {
        self.0.try_fill_bytes(dest).map_err(SourceExhaustedError::from)
    }
}

impl<T: RngCore> RandomGenerator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{generator::Generator, RandomGenerator};
    ///
    /// let mut g = RandomGenerator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), uuid4122::SourceExhaustedError>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

impl<T: RngCore, C: TimeSource> TimeBasedGenerator<Adapter<T>, C> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate and a specified clock.
    pub const fn with_rand08(rng: T, clock: C) -> Self {
        Self::new(Adapter(rng), clock)
    }
}
