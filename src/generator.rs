//! Random value generator and related types.

use std::time;

use rand::{rngs::OsRng, CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::{Error, Pattern, Result, Uuid};

/// The largest timestamp a UUIDv1 can hold.
const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// Represents a generator of random strings, numbers, and UUIDs.
///
/// A generator owns two random sources:
///
/// - `rng`, a general-purpose source used for pattern strings, integers, hex strings, bytes, and
///   the node ID of UUIDv1;
/// - `crypto`, a cryptographically strong source used for the clock sequence of UUIDv1 and the
///   whole payload of UUIDv4.
///
/// Both are injected at construction, so a generator built by [`Generator::from_seed`] replays
/// the same sequence of values every time. The free functions of this crate delegate to a
/// process-wide instance created by [`Generator::from_time`].
///
/// # Examples
///
/// ```rust
/// use randkit::Generator;
///
/// let mut g = Generator::from_seed(42);
/// let code = g.random_str_from_pattern("?u?u-?d?d?d?d")?;
/// let n = g.random_int_in_range(-10, 10)?;
/// let id = g.uuid_v4()?;
/// assert_eq!(code.len(), 7);
/// assert!((-10..=10).contains(&n));
/// assert_eq!(id.version(), Some(4));
/// # Ok::<(), randkit::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Generator<R = ChaCha12Rng, C = OsRng> {
    rng: R,
    crypto: C,
}

impl<R, C> Generator<R, C> {
    /// Creates a generator from a general-purpose and a cryptographically strong random source.
    pub const fn new(rng: R, crypto: C) -> Self {
        Self { rng, crypto }
    }
}

impl Generator {
    /// Creates a generator whose general-purpose source is seeded from the current time and
    /// whose cryptographic source is the operating system's.
    pub fn from_time() -> Self {
        let seed = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::new(ChaCha12Rng::seed_from_u64(seed), OsRng)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_time()
    }
}

impl Generator<ChaCha12Rng, ChaCha12Rng> {
    /// Creates a fully deterministic generator.
    ///
    /// Both sources are ChaCha12 instances derived from `seed` (on different streams), so this
    /// is meant for tests and reproducible fixtures rather than secrets.
    pub fn from_seed(seed: u64) -> Self {
        let rng = ChaCha12Rng::seed_from_u64(seed);
        let mut crypto = ChaCha12Rng::seed_from_u64(seed);
        crypto.set_stream(1);
        Self::new(rng, crypto)
    }
}

impl<R: RngCore, C: RngCore + CryptoRng> Generator<R, C> {
    /// Replaces each `?d`, `?l`, and `?u` placeholder in `pattern` with a random digit,
    /// lowercase letter, or uppercase letter, respectively.
    ///
    /// See the [`pattern`](crate::pattern) module for the syntax. Returns
    /// [`Error::InvalidPattern`] if `?` is followed by any other character.
    pub fn random_str_from_pattern(&mut self, pattern: &str) -> Result<String> {
        Ok(Pattern::parse(pattern)?.sample(&mut self.rng))
    }

    /// Returns a uniformly distributed integer in the inclusive range `min..=max`.
    pub fn random_int_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if min > max {
            log::debug!("rejected range {min}..={max}");
            return Err(Error::InvalidRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Returns `length` random lowercase hexadecimal digits.
    pub fn random_hex_string(&mut self, length: usize) -> String {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        (0..length)
            .map(|_| DIGITS[self.rng.gen_range(0..DIGITS.len())] as char)
            .collect()
    }

    /// Returns `length` random bytes.
    pub fn random_bytes(&mut self, length: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; length];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }

    /// Returns a uniformly distributed integer that has exactly `length` decimal digits.
    ///
    /// Returns [`Error::InvalidLength`] if `length` is zero or greater than 19, the largest digit
    /// count representable by `u64`.
    pub fn random_int_with_digits(&mut self, length: u32) -> Result<u64> {
        let bounds = length
            .checked_sub(1)
            .and_then(|e| Some((10u64.checked_pow(e)?, 10u64.checked_pow(length)? - 1)));
        let Some((min, max)) = bounds else {
            log::debug!("rejected digit count {length}");
            return Err(Error::InvalidLength(length));
        };
        Ok(self.rng.gen_range(min..=max))
    }

    /// Generates a new UUIDv1 object from the current time.
    ///
    /// The timestamp counts 100-nanosecond intervals since the Unix epoch, not the Gregorian
    /// epoch of RFC 4122, so the values are not comparable with those of other UUIDv1
    /// implementations.
    pub fn uuid_v1(&mut self) -> Result<Uuid> {
        self.uuid_v1_core(unix_ts_100ns() & MAX_TIMESTAMP)
    }

    /// Generates a new UUIDv1 object from the `timestamp` passed.
    ///
    /// The clock sequence comes from the cryptographic source and the node ID from the
    /// general-purpose source, with the multicast bit set to mark it as random.
    ///
    /// # Panics
    ///
    /// Panics if `timestamp` is not a 60-bit integer.
    pub fn uuid_v1_core(&mut self, timestamp: u64) -> Result<Uuid> {
        let mut clock_seq = [0u8; 2];
        self.crypto
            .try_fill_bytes(&mut clock_seq)
            .map_err(source_failed)?;

        let mut node = [0u8; 6];
        self.rng.try_fill_bytes(&mut node).map_err(source_failed)?;
        node[0] |= 0x01;

        Ok(Uuid::from_fields_v1(
            timestamp,
            u16::from_be_bytes(clock_seq),
            node,
        ))
    }

    /// Generates a new UUIDv4 object from the cryptographic source.
    pub fn uuid_v4(&mut self) -> Result<Uuid> {
        let mut bytes = [0u8; 16];
        self.crypto
            .try_fill_bytes(&mut bytes)
            .map_err(source_failed)?;
        Ok(Uuid::with_version(bytes, 4))
    }
}

fn source_failed(err: rand::Error) -> Error {
    log::debug!("random source failed: {err}");
    Error::RandomSource(err)
}

/// Returns the number of 100-nanosecond intervals since the Unix epoch.
fn unix_ts_100ns() -> u64 {
    match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_nanos() / 100) as u64,
        Err(_) => {
            log::warn!("system clock is set before the Unix epoch; using zero timestamp");
            0
        }
    }
}
