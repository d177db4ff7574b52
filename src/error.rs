//! Error types

use std::error;

/// Error decoding an invalid text or byte representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum FormatError {
    /// The input does not hold 32 hexadecimal digits (text) or 16 bytes (binary) after
    /// separators are stripped. Carries the length found.
    #[error("invalid UUID length: {0}")]
    InvalidLength(usize),

    /// The input contains a character that is not a hexadecimal digit.
    #[error("invalid UUID character {found:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// Byte index of the offending character in the input.
        index: usize,
    },
}

/// Error raised when the underlying random source fails to supply bytes.
///
/// This is treated as a non-retriable environment fault; generators never substitute a weaker
/// source of randomness.
#[derive(Debug, thiserror::Error)]
#[error("random source failed to supply bytes")]
pub struct SourceExhaustedError {
    #[source]
    source: Box<dyn error::Error + Send + Sync>,
}

impl SourceExhaustedError {
    /// Creates an error from the failure reported by a random source.
    pub fn new(source: impl Into<Box<dyn error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl From<rand::Error> for SourceExhaustedError {
    fn from(src: rand::Error) -> Self {
        Self::new(src)
    }
}

/// Error converting a persistence-layer value of an unrecognized shape into UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("cannot scan {0} into UUID")]
pub struct UnsupportedInputError(pub(crate) &'static str);

impl UnsupportedInputError {
    /// Returns the name of the rejected input type.
    pub const fn type_name(&self) -> &'static str {
        self.0
    }
}

/// Any error this crate can report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text or bytes do not decode to a UUID.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The random source failed to supply bytes.
    #[error(transparent)]
    SourceExhausted(#[from] SourceExhaustedError),

    /// A storage value of an unrecognized type was handed over.
    #[error(transparent)]
    UnsupportedInput(#[from] UnsupportedInputError),
}
