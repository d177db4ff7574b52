//! Random (version 4) generation

use crate::generator::{Generator, OsRandSource, RandSource};
use crate::{SourceExhaustedError, Uuid, Version};

/// Generates random UUIDs from a cryptographically strong random source.
///
/// All 16 bytes are drawn from the source, then the version nibble is forced to `0100` and the
/// variant bits to `10`. Only 122 bits of each UUID therefore carry entropy.
///
/// # Examples
///
/// ```rust
/// use uuid4122::{generator::Generator, RandomGenerator, Version};
///
/// let mut g: RandomGenerator = Default::default();
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Version::RANDOM);
/// # Ok::<(), uuid4122::SourceExhaustedError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RandomGenerator<R = OsRandSource> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> RandomGenerator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandSource> Generator for RandomGenerator<R> {
    fn generate(&mut self) -> Result<Uuid, SourceExhaustedError> {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes)?;
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Ok(Uuid::from(bytes))
    }

    fn version(&self) -> Version {
        Version::RANDOM
    }
}
