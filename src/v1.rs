//! Simplified time-based (version 1) generation

use crate::generator::{Generator, OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::{SourceExhaustedError, Uuid, Version};

/// Generates best-effort time-based UUIDs.
///
/// This is a simplified generator, NOT an RFC 4122 compliant version 1 implementation: it does
/// not use the 100-nanosecond Gregorian epoch, a clock sequence, or a node identifier. It only
/// places the current Unix timestamp in the leading bytes:
///
/// - all 16 bytes are first filled from the random source;
/// - bytes 0 to 5 receive the low 48 bits of the nanosecond timestamp, least significant byte
///   first;
/// - the low nibble of byte 6 receives timestamp bits 48 to 51 and the high nibble is set to
///   `0001`;
/// - the top two bits of byte 8 are set to `10`.
///
/// Because the timestamp is stored little-endian, the byte order of the resulting UUIDs does not
/// follow their creation order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TimeBasedGenerator<R = OsRandSource, C = StdSystemTime> {
    /// The random number generator used by the generator.
    rng: R,

    /// The clock used by the generator.
    clock: C,
}

impl<R: RandSource, C: TimeSource> TimeBasedGenerator<R, C> {
    /// Creates a generator instance.
    pub const fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Generates a new UUID from the `unix_ts_ns` passed.
    ///
    /// # Errors
    ///
    /// Returns [`SourceExhaustedError`] if the underlying random source fails.
    pub fn generate_core(&mut self, unix_ts_ns: u64) -> Result<Uuid, SourceExhaustedError> {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes)?;
        bytes[..6].copy_from_slice(&unix_ts_ns.to_le_bytes()[..6]);
        bytes[6] = 0x10 | ((unix_ts_ns >> 48) as u8 & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Ok(Uuid::from(bytes))
    }
}

impl<R: RandSource, C: TimeSource> Generator for TimeBasedGenerator<R, C> {
    fn generate(&mut self) -> Result<Uuid, SourceExhaustedError> {
        let unix_ts_ns = self.clock.unix_ts_ns();
        self.generate_core(unix_ts_ns)
    }

    fn version(&self) -> Version {
        Version::TIME_BASED
    }
}
