//! Error type shared by all fallible operations.

/// Errors returned by the generator functions and the UUID parser.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A `?` in a pattern was followed by something other than `d`, `l`, or `u`.
    #[error("invalid pattern identifier '?{placeholder}' at position {position}")]
    InvalidPattern {
        /// The character that followed `?`.
        placeholder: char,
        /// Index (in chars) of the offending `?`.
        position: usize,
    },

    /// The lower bound of a range was greater than its upper bound.
    #[error("invalid range: min ({min}) must be less than or equal to max ({max})")]
    InvalidRange { min: i64, max: i64 },

    /// A digit count was zero or too large to fit the result type.
    #[error("invalid length: {0} is not a supported number of digits")]
    InvalidLength(u32),

    /// A UUID string was not in the 8-4-4-4-12 layout.
    #[error("invalid UUID string: {0}")]
    InvalidUuid(String),

    /// A UUID string contained non-hexadecimal digits.
    #[error("invalid UUID string: {0}")]
    Decode(#[from] hex::FromHexError),

    /// The underlying random number generator failed.
    #[error("could not read from random source: {0}")]
    RandomSource(#[from] rand::Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
