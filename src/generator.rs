//! Generator capability, pluggable random and time sources, and the factory keyed on version.

use crate::{SourceExhaustedError, Uuid, Version};

pub mod with_rand08;

pub use crate::v1::TimeBasedGenerator;
pub use crate::v4::RandomGenerator;

/// The default random source: the operating system's cryptographically strong generator.
///
/// [`rand::rngs::OsRng`] keeps no state of its own, so every generation call reads fresh bytes
/// from the operating system. Its thread safety is that of the platform facility.
pub type OsRandSource = with_rand08::Adapter<rand::rngs::OsRng>;

/// A trait that defines the minimum random number generator interface for the generators.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    ///
    /// # Errors
    ///
    /// Returns [`SourceExhaustedError`] if the source cannot supply the bytes. Implementations
    /// must not fall back to a weaker source.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), SourceExhaustedError>;
}

/// A trait that provides the current timestamp to [`TimeBasedGenerator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in nanoseconds.
    fn unix_ts_ns(&mut self) -> u64;
}

/// [`TimeSource`] implementation that reads the system real-time clock.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ns(&mut self) -> u64 {
        use std::time;
        // a clock set before 1970 yields zero rather than failing
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    }
}

/// A strategy that produces new UUIDs.
///
/// Each call is independent: the strategies keep no counters or sequence state between calls.
///
/// # Examples
///
/// ```rust
/// use uuid4122::generator::{self, Generator};
/// use uuid4122::{Variant, Version};
///
/// let mut g = generator::new_generator(Version::TIME_BASED);
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), g.version());
/// assert_eq!(uuid.variant(), Variant::Rfc4122);
/// # Ok::<(), uuid4122::SourceExhaustedError>(())
/// ```
pub trait Generator {
    /// Generates a new UUID.
    ///
    /// # Errors
    ///
    /// Returns [`SourceExhaustedError`] if the underlying random source fails.
    fn generate(&mut self) -> Result<Uuid, SourceExhaustedError>;

    /// Returns the version tag stamped on every UUID this strategy generates.
    fn version(&self) -> Version;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&mut self) -> Result<Uuid, SourceExhaustedError> {
        (**self).generate()
    }

    fn version(&self) -> Version {
        (**self).version()
    }
}

/// Returns a generator backed by [`OsRandSource`] for the requested version.
///
/// [`Version::TIME_BASED`] selects [`TimeBasedGenerator`] and [`Version::RANDOM`] selects
/// [`RandomGenerator`]. Any other tag silently falls back to [`RandomGenerator`], whose
/// [`Generator::version`] then reports [`Version::RANDOM`].
pub fn new_generator(version: Version) -> Box<dyn Generator + Send> {
    match version {
        Version::TIME_BASED => Box::<TimeBasedGenerator>::default(),
        Version::RANDOM => Box::<RandomGenerator>::default(),
        _ => {
            log::debug!("no generator for UUID version {version}; falling back to random");
            Box::<RandomGenerator>::default()
        }
    }
}
