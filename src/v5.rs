//! UUIDv5-related functionality

use crate::{Result, Uuid};

/// Generates a name-based UUIDv5 object from the string representation of a namespace UUID and a
/// name.
///
/// `namespace` must be in the 8-4-4-4-12 hexadecimal form; see [`Uuid::parse_str`] for the
/// errors returned otherwise. Unlike the other generators this function is deterministic: the
/// same pair of inputs always produces the same UUID.
///
/// # Examples
///
/// ```rust
/// use randkit::uuid5;
///
/// let ns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
/// let uuid = uuid5(ns, "python.org")?;
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// assert_eq!(uuid, uuid5(ns, "python.org")?);
///
/// assert!(uuid5("not-a-uuid", "x").is_err());
/// # Ok::<(), randkit::Error>(())
/// ```
pub fn uuid5(namespace: &str, name: &str) -> Result<Uuid> {
    let namespace = Uuid::parse_str(namespace).inspect_err(|err| {
        log::debug!("rejected namespace {namespace:?}: {err}");
    })?;
    Ok(Uuid::new_v5(&namespace, name.as_bytes()))
}
