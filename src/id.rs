use fstr::FStr;
use std::{fmt, str};

use crate::FormatError;

/// Represents a Universally Unique IDentifier.
///
/// The value is an immutable 16-byte array. Equality, hashing, and ordering all operate on the
/// bytes: ordering is lexicographic from the first byte to the last, which is a total order but
/// does not reflect creation time for random UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// The version tag held in the most significant four bits of byte 6.
///
/// Nibble values without a named constant (6 to 15) are carried as-is rather than rejected.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// Unknown or unset version (`0`).
    pub const UNKNOWN: Self = Self(0);

    /// Time-based version (`1`).
    pub const TIME_BASED: Self = Self(1);

    /// DCE security version (`2`).
    pub const DCE_SECURITY: Self = Self(2);

    /// Name-based version using MD5 hashing (`3`).
    pub const NAME_BASED_MD5: Self = Self(3);

    /// Randomly generated version (`4`).
    pub const RANDOM: Self = Self(4);

    /// Name-based version using SHA-1 hashing (`5`).
    pub const NAME_BASED_SHA1: Self = Self(5);

    /// Returns the raw four-bit tag.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Version {
    /// Creates a version tag from the low four bits of `src`.
    fn from(src: u8) -> Self {
        Self(src & 0x0f)
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The layout family indicated by the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// `0xxx`: reserved for NCS backward compatibility.
    Ncs,

    /// `10xx`: the layout described in RFC 4122.
    Rfc4122,

    /// `110x`: reserved for Microsoft backward compatibility.
    Microsoft,

    /// `111x`: reserved for future definition.
    Future,
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

    /// Creates a UUID from a byte slice of exactly 16 bytes, in the same byte order.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidLength`] if `src` is not 16 bytes long.
    pub fn from_slice(src: &[u8]) -> Result<Self, FormatError> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| FormatError::InvalidLength(src.len()))
    }

    /// Returns the version tag held in the high nibble of byte 6.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::{Uuid, Version};
    ///
    /// let x: Uuid = "550e8400-e29b-41d4-a716-446655440000".parse()?;
    /// assert_eq!(x.version(), Version::RANDOM);
    /// # Ok::<(), uuid4122::FormatError>(())
    /// ```
    pub const fn version(&self) -> Version {
        Version(self.0[6] >> 4)
    }

    /// Returns the variant indicated by the top bits of byte 8.
    pub const fn variant(&self) -> Variant {
        match self.0[8] {
            n if n & 0x80 == 0x00 => Variant::Ncs,
            n if n & 0xc0 == 0x80 => Variant::Rfc4122,
            n if n & 0xe0 == 0xc0 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Returns `true` if all 16 bytes are zero.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns the 8-4-4-4-12 lowercase hexadecimal string representation stored in a
    /// stack-allocated structure that can be dereferenced as `str` and
    /// [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid4122::Uuid;
    ///
    /// let x = "{550E8400E29B41D4A716446655440000}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "550e8400-e29b-41d4-a716-446655440000");
    /// assert_eq!(format!("{}", y), "550e8400-e29b-41d4-a716-446655440000");
    /// # Ok::<(), uuid4122::FormatError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut j = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[j] = DIGITS[(e >> 4) as usize];
            buffer[j + 1] = DIGITS[(e & 15) as usize];
            j += 2;
            if i == 3 || i == 5 || i == 7 || i == 9 {
                buffer[j] = b'-';
                j += 1;
            }
        }
        debug_assert!(buffer.is_ascii());

        // SAFETY: ok because buffer consists of ASCII code points
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the RFC 4122 URN form, i.e. the canonical string prefixed with `urn:uuid:`.
    pub fn urn(&self) -> String {
        format!("urn:uuid:{}", self.encode())
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = FormatError;

    /// Creates an object from a hexadecimal string representation.
    ///
    /// Hyphens and curly braces are stripped wherever they appear; exactly 32 hexadecimal digits
    /// of either case must remain.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let digits = src
            .char_indices()
            .filter(|(_, c)| !matches!(c, '-' | '{' | '}'));

        let len = digits.clone().count();
        if len != 32 {
            return Err(FormatError::InvalidLength(len));
        }

        let mut dst = [0u8; 16];
        for (i, (index, c)) in digits.enumerate() {
            let n = c
                .to_digit(16)
                .ok_or(FormatError::InvalidCharacter { found: c, index })? as u8;
            dst[i / 2] |= if i % 2 == 0 { n << 4 } else { n };
        }
        Ok(Self(dst))
    }
}

impl TryFrom<&str> for Uuid {
    type Error = FormatError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Uuid {
    type Error = FormatError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = FormatError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
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

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
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

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    /// Accepts a string or a 16-byte sequence whichever the format hands over.
    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID string or a 16-byte sequence")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::from_slice(value).map_err(de::Error::custom)
        }
    }

}
