//! A UUID value type following the RFC 4122 layout, with random and simplified time-based
//! generators
//!
//! ```rust
//! use uuid4122::{uuid4, Uuid, Variant, Version};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! assert_eq!(uuid.version(), Version::RANDOM);
//! assert_eq!(uuid.variant(), Variant::Rfc4122);
//!
//! let parsed: Uuid = "{550E8400E29B41D4A716446655440000}".parse()?;
//! assert_eq!(parsed.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//! # Ok::<(), uuid4122::FormatError>(())
//! ```
//!
//! # Field and bit layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           bytes 0-3                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           bytes 4-5           |  ver  |       bytes 6-7       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         bytes 8-11                        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          bytes 12-15                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 4-bit `ver` field is the high nibble of byte 6 and is read back by
//!   [`Uuid::version`].
//! - The `var` field is the top bits of byte 8 and is read back by [`Uuid::variant`]: `0` is
//!   NCS, `10` is RFC 4122, `110` is Microsoft, and anything else is reserved for the future.
//!
//! # Generators
//!
//! [`RandomGenerator`] fills all bytes from a cryptographically strong source and then stamps
//! `ver = 0100` and `var = 10`, leaving 122 bits of entropy. [`TimeBasedGenerator`] is a
//! simplified, non-compliant version 1 generator that places the Unix timestamp in nanoseconds at
//! the front of otherwise random bytes. [`generator::new_generator`] picks one by [`Version`].
//!
//! # Crate features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: enables conversions between [`Uuid`] and `uuid::Uuid`.
//! - `rusqlite`: implements `ToSql` and `FromSql` for [`Uuid`], storing the canonical string.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant, Version};

mod error;
pub use error::{Error, FormatError, SourceExhaustedError, UnsupportedInputError};

pub mod generator;
pub use generator::{RandomGenerator, TimeBasedGenerator};

mod v1;
mod v4;

mod entry;
pub use entry::{must, try_uuid1, try_uuid4, uuid1, uuid4};

pub mod sql;
