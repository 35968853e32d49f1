//! Random strings, numbers, and UUIDs
//!
//! ```rust
//! let code = randkit::random_str_from_pattern("INV-?u?u?d?d?d?d")?;
//! println!("{}", code); // e.g. "INV-KQ0492"
//!
//! let uuid = randkit::uuid4()?;
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), randkit::Error>(())
//! ```
//!
//! The free functions draw from a process-wide [`Generator`]. Construct a generator directly
//! to inject your own random sources or to replay a fixed seed:
//!
//! ```rust
//! use randkit::Generator;
//!
//! let mut g = Generator::from_seed(7);
//! let first = g.random_hex_string(16);
//! assert_eq!(first, Generator::from_seed(7).random_hex_string(16));
//! ```
//!
//! # UUID field and bit layout
//!
//! UUIDv1 identifiers produced by this library have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_high       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp split across `time_low`, `time_mid`, and `time_high` counts
//!   100-nanosecond intervals since the Unix epoch. RFC 4122 counts from 1582-10-15 instead;
//!   this library deliberately keeps the Unix epoch.
//! - The 4-bit `ver` field is set at `0001`.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field is filled with a cryptographically strong random number.
//! - The 48-bit `node` field is random, with the multicast bit (the least significant bit of its
//!   first octet) set to 1 so that it never collides with a real MAC address.
//!
//! UUIDv4 identifiers carry 122 cryptographically strong random bits plus `ver` (`0100`) and
//! `var`. UUIDv5 identifiers are the first 128 bits of SHA-1(namespace || name) with `ver`
//! (`0101`) and `var` overwritten.
//!
//! # Crate features
//!
//! - `global_gen` (default): process-wide generator and the free functions.
//! - `serde`: `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid`: conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{Uuid, Variant};

pub mod pattern;
#[doc(inline)]
pub use pattern::Pattern;

pub mod generator;
#[doc(inline)]
pub use generator::Generator;

mod v5;
pub use v5::uuid5;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{
    random_bytes, random_hex_string, random_int_in_range, random_int_with_digits,
    random_str_from_pattern, uuid1, uuid4,
};
