use std::{fmt, str};

use fstr::FStr;
use sha1::{Digest, Sha1};

use crate::{Error, Result};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Byte offsets of the hyphens in the 8-4-4-4-12 string representation.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Namespace for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUID byte array from UUIDv1 field values.
    ///
    /// The 60-bit `timestamp` is split into the low, mid, and high fields; the top two bits of
    /// `clock_seq` are overwritten by the variant. `node` is copied as is.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit integer.
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        if timestamp >= 1 << 60 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | ((timestamp >> 56) as u8 & 0x0f),
            (timestamp >> 48) as u8,
            0x80 | ((clock_seq >> 8) as u8 & 0x3f),
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Overwrites the version and variant fields of `bytes`, keeping all other bits.
    pub(crate) const fn with_version(mut bytes: [u8; 16], version: u8) -> Self {
        bytes[6] = (version << 4) | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates a name-based UUIDv5 by hashing `namespace` and `name` with SHA-1.
    ///
    /// The same pair of inputs always produces the same UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randkit::Uuid;
    ///
    /// let uuid = Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"python.org");
    /// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name);
        let digest = hasher.finalize();

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        Self::with_version(bytes, 5)
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    pub fn variant(&self) -> Variant {
        if *self == Self::NIL {
            return Variant::Nil;
        }
        if *self == Self::MAX {
            return Variant::Max;
        }
        match self.0[8] >> 4 {
            0x0..=0x7 => Variant::Var0,
            0x8..=0xb => Variant::Var10,
            0xc..=0xd => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `0b10`.
    pub fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randkit::Uuid;
    ///
    /// let x = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), randkit::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut r = 0;
        let mut w = 0;
        while r < 16 {
            let e = self.0[r] as usize;
            buffer[w] = DIGITS[e >> 4];
            buffer[w + 1] = DIGITS[e & 15];
            if r == 3 || r == 5 || r == 7 || r == 9 {
                buffer[w + 2] = b'-';
                w += 1;
            }
            r += 1;
            w += 2;
        }

        // SAFETY: ok because buffer consists of ASCII code points
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Parses the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// The input must be exactly 36 bytes long with hyphens at the four fixed positions;
    /// otherwise [`Error::InvalidUuid`] is returned. Non-hexadecimal digits produce
    /// [`Error::Decode`]. Both lowercase and uppercase digits are accepted.
    pub fn parse_str(src: &str) -> Result<Self> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(Error::InvalidUuid(format!(
                "expected 36 characters, found {}",
                src.len()
            )));
        }
        if let Some(pos) = HYPHENS.into_iter().find(|&i| src[i] != b'-') {
            return Err(Error::InvalidUuid(format!("expected '-' at position {pos}")));
        }

        let mut digits = [0u8; 32];
        let stripped = src
            .iter()
            .enumerate()
            .filter(|(i, _)| !HYPHENS.contains(i))
            .map(|(_, e)| *e);
        for (dst, e) in digits.iter_mut().zip(stripped) {
            *dst = e;
        }

        let mut dst = [0u8; 16];
        hex::decode_to_slice(digits, &mut dst)?;
        Ok(Self(dst))
    }
}

/// UUID variants defined by RFC 4122, plus the special Nil and Max values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The variant field value of `0b0`, reserved for NCS backward compatibility.
    Var0,
    /// The variant field value of `0b10`, specified by RFC 4122.
    Var10,
    /// The variant field value of `0b110`, reserved for Microsoft backward compatibility.
    Var110,
    /// The variant field value of `0b111`, reserved for future definition.
    VarReserved,
    /// The Nil UUID.
    Nil,
    /// The Max UUID.
    Max,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self> {
        Self::parse_str(src)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self> {
        src.parse()
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

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};
    use crate::Error;

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [((u64, u16, [u8; 6]), &'static str)] {
        const MAX_UINT60: u64 = (1 << 60) - 1;

        &[
            ((0, 0, [0; 6]), "00000000-0000-1000-8000-000000000000"),
            ((MAX_UINT60, 0, [0; 6]), "ffffffff-ffff-1fff-8000-000000000000"),
            ((0, 0xffff, [0; 6]), "00000000-0000-1000-bfff-000000000000"),
            ((0, 0, [0xff; 6]), "00000000-0000-1000-8000-ffffffffffff"),
            (
                (MAX_UINT60, 0xffff, [0xff; 6]),
                "ffffffff-ffff-1fff-bfff-ffffffffffff",
            ),
            (
                (
                    0x0123_4567_89ab_cdef,
                    0x1234,
                    [0x01, 0x23, 0x45, 0x67, 0x89, 0xab],
                ),
                "89abcdef-4567-1123-9234-0123456789ab",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(from_fields, text.parse::<Uuid>().unwrap());
            assert_eq!(from_fields, text.to_uppercase().parse::<Uuid>().unwrap());
            assert_eq!(&from_fields.encode() as &str, *text);
            assert_eq!(&from_fields.to_string(), text);
            assert_eq!(from_fields.version(), Some(1));
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(from_fields).to_string(), text);
        }
    }

    /// Rejects 60-bit overflowing timestamp
    #[test]
    #[should_panic(expected = "invalid field value")]
    fn rejects_60_bit_overflowing_timestamp() {
        Uuid::from_fields_v1(1 << 60, 0, [0; 6]);
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let wrong_length = [
            "",
            "not-a-uuid",
            " 6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8 ",
            "6ba7b8109dad11d180b400c04fd430c8",
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}",
            "6ba7b810-9dad-11d1-80b4-00c04fd430c",
        ];
        for e in wrong_length {
            assert!(matches!(Uuid::parse_str(e), Err(Error::InvalidUuid(_))), "{e}");
        }

        let misplaced_hyphens = [
            "6ba7b810-9dad11d1--80b4-00c04fd430c8",
            "6ba7b8109-dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4_00c04fd430c8",
            "+ba7b810-9dad-11d1-80b4-00c04fd430c8-",
        ];
        for e in misplaced_hyphens {
            assert!(matches!(Uuid::parse_str(e), Err(Error::InvalidUuid(_))), "{e}");
        }

        let non_hex = [
            "6ba7b81g-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd430 8",
            "+ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "6ba7b810-9dad-11d1-80b4-00c04fd43é8",
        ];
        for e in non_hex {
            assert!(matches!(Uuid::parse_str(e), Err(Error::Decode(_))), "{e}");
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(&Uuid::NIL.encode() as &str, "00000000-0000-0000-0000-000000000000");
        assert_eq!(&Uuid::MAX.encode() as &str, "ffffffff-ffff-ffff-ffff-ffffffffffff");
        assert_eq!(Uuid::NIL.variant(), Variant::Nil);
        assert_eq!(Uuid::MAX.variant(), Variant::Max);
        assert_eq!(Uuid::NIL.version(), None);
    }

    /// Exposes RFC 4122 namespaces
    #[test]
    fn exposes_rfc_4122_namespaces() {
        let cases = [
            (Uuid::NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];
        for (ns, text) in cases {
            assert_eq!(&ns.encode() as &str, text);
            assert_eq!(ns.variant(), Variant::Var10);
            assert_eq!(ns.version(), Some(1));
        }
    }

    /// Generates known UUIDv5 values
    #[test]
    fn generates_known_uuidv5_values() {
        let cases = [
            (Uuid::NAMESPACE_DNS, "python.org", "886313e1-3b8a-5372-9b90-0c9aee199e5d"),
            (
                Uuid::NAMESPACE_DNS,
                "www.example.com",
                "2ed6657d-e927-568b-95e1-2665a8aea6a2",
            ),
            (
                Uuid::NAMESPACE_URL,
                "https://example.com/",
                "dd2c1780-811a-5296-81c5-178a0ef488bc",
            ),
        ];
        for (ns, name, text) in cases {
            let e = Uuid::new_v5(&ns, name.as_bytes());
            assert_eq!(&e.encode() as &str, text);
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(5));
        }
    }

    /// Agrees with uuid crate on UUIDv5
    #[test]
    fn agrees_with_uuid_crate_on_uuidv5() {
        let names = ["", "a", "same-name", "日本語の名前", "\u{0}\u{ffff}"];
        for ns in [Uuid::NAMESPACE_DNS, Uuid::NAMESPACE_OID, Uuid::MAX] {
            let theirs_ns = uuid::Uuid::from_bytes(*ns.as_bytes());
            for name in names {
                let ours = Uuid::new_v5(&ns, name.as_bytes());
                let theirs = uuid::Uuid::new_v5(&theirs_ns, name.as_bytes());
                assert_eq!(ours.as_bytes(), theirs.as_bytes());
            }
        }
    }

    /// Forces version and variant bits without touching others
    #[test]
    fn forces_version_and_variant_bits_without_touching_others() {
        let e = Uuid::with_version([0xff; 16], 4);
        assert_eq!(&e.encode() as &str, "ffffffff-ffff-4fff-bfff-ffffffffffff");
        let e = Uuid::with_version([0x00; 16], 5);
        assert_eq!(&e.encode() as &str, "00000000-0000-5000-8000-000000000000");
    }

    /// Reports variants
    #[test]
    fn reports_variants() {
        let mut bytes = [0x11u8; 16];
        for (hi, variant) in [
            (0x00, Variant::Var0),
            (0x70, Variant::Var0),
            (0x80, Variant::Var10),
            (0xb0, Variant::Var10),
            (0xc0, Variant::Var110),
            (0xd0, Variant::Var110),
            (0xe0, Variant::VarReserved),
            (0xf0, Variant::VarReserved),
        ] {
            bytes[8] = hi;
            assert_eq!(Uuid::from(bytes).variant(), variant);
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v1(fs.0, fs.1, fs.2);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(e.encode().parse::<Uuid>().unwrap(), e);
            assert_eq!(Uuid::try_from(e.to_string()).unwrap(), e);
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()).unwrap(), e);
            assert_eq!(String::from(e), e.to_string());
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);
        }
    }
}
