//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Result, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Replaces each `?d`, `?l`, and `?u` placeholder in `pattern` with a random digit, lowercase
/// letter, or uppercase letter, respectively.
///
/// # Examples
///
/// ```rust
/// let s = randkit::random_str_from_pattern("?d?d?d")?;
/// assert!(s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())); // e.g., "482"
///
/// assert!(randkit::random_str_from_pattern("?z").is_err());
/// # Ok::<(), randkit::Error>(())
/// ```
pub fn random_str_from_pattern(pattern: &str) -> Result<String> {
    lock_global_gen().get_mut().random_str_from_pattern(pattern)
}

/// Returns a uniformly distributed integer in the inclusive range `min..=max`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(randkit::random_int_in_range(5, 5)?, 5);
/// assert!(randkit::random_int_in_range(5, 3).is_err());
/// # Ok::<(), randkit::Error>(())
/// ```
pub fn random_int_in_range(min: i64, max: i64) -> Result<i64> {
    lock_global_gen().get_mut().random_int_in_range(min, max)
}

/// Returns `length` random lowercase hexadecimal digits.
pub fn random_hex_string(length: usize) -> String {
    lock_global_gen().get_mut().random_hex_string(length)
}

/// Returns `length` random bytes.
pub fn random_bytes(length: usize) -> Vec<u8> {
    lock_global_gen().get_mut().random_bytes(length)
}

/// Returns a uniformly distributed integer that has exactly `length` decimal digits.
///
/// # Examples
///
/// ```rust
/// let n = randkit::random_int_with_digits(3)?;
/// assert!((100..=999).contains(&n));
/// # Ok::<(), randkit::Error>(())
/// ```
pub fn random_int_with_digits(length: u32) -> Result<u64> {
    lock_global_gen().get_mut().random_int_with_digits(length)
}

/// Generates a UUIDv1 object.
///
/// The timestamp field counts 100-nanosecond intervals since the Unix epoch. The node ID is
/// random rather than a MAC address.
///
/// # Examples
///
/// ```rust
/// let uuid = randkit::uuid1()?;
/// println!("{}", uuid); // e.g., "5b1b7d5a-5a3c-1f11-a5e1-3d1e8f0c2b97"
/// assert_eq!(uuid.version(), Some(1));
/// # Ok::<(), randkit::Error>(())
/// ```
pub fn uuid1() -> Result<Uuid> {
    lock_global_gen().get_mut().uuid_v1()
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = randkit::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let uuid_string: String = randkit::uuid4()?.to_string();
/// # Ok::<(), randkit::Error>(())
/// ```
pub fn uuid4() -> Result<Uuid> {
    lock_global_gen().get_mut().uuid_v4()
}

mod inner {
    use crate::Generator;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            log::trace!("initializing process-wide generator");
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::from_time(),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                log::trace!("process ID changed; reseeding process-wide generator");
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
