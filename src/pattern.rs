//! Placeholder patterns for random strings.
//!
//! A pattern is copied verbatim except for the following two-character placeholders, each of
//! which is replaced by one random character:
//!
//! | Placeholder | Replaced with       |
//! | ----------- | ------------------- |
//! | `?d`        | a digit (`0-9`)     |
//! | `?l`        | a lowercase letter  |
//! | `?u`        | an uppercase letter |
//!
//! A `?` at the very end of a pattern is kept as a literal `?`. A `?` followed by any other
//! character makes the pattern invalid.

use std::str;

use rand::Rng;

use crate::{Error, Result};

/// Character classes selectable with a `?` placeholder.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CharClass {
    /// `?d`
    Digit,
    /// `?l`
    Lowercase,
    /// `?u`
    Uppercase,
}

impl CharClass {
    /// Returns the class selected by the character following `?`, if any.
    pub const fn from_placeholder(c: char) -> Option<Self> {
        match c {
            'd' => Some(Self::Digit),
            'l' => Some(Self::Lowercase),
            'u' => Some(Self::Uppercase),
            _ => None,
        }
    }

    /// Returns the ASCII characters this class draws from.
    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Digit => b"0123456789",
            Self::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            Self::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        }
    }

    /// Picks one character of the class uniformly at random.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> char {
        let alphabet = self.alphabet();
        alphabet[rng.gen_range(0..alphabet.len())] as char
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Segment {
    Literal(char),
    Random(CharClass),
}

/// A parsed pattern that can be sampled any number of times.
///
/// # Examples
///
/// ```rust
/// use randkit::Pattern;
///
/// let pattern: Pattern = "order-?u?u?d?d?d".parse()?;
/// let s = pattern.sample(&mut rand::thread_rng());
/// assert_eq!(s.len(), pattern.len());
/// assert!(s.starts_with("order-"));
/// # Ok::<(), randkit::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern, failing with [`Error::InvalidPattern`] at the first unknown
    /// placeholder.
    pub fn parse(src: &str) -> Result<Self> {
        let chars: Vec<char> = src.chars().collect();
        let mut segments = Vec::with_capacity(chars.len());

        let mut i = 0;
        while i < chars.len() {
            if chars[i] != '?' {
                segments.push(Segment::Literal(chars[i]));
                i += 1;
                continue;
            }

            match chars.get(i + 1) {
                // trailing '?'
                None => segments.push(Segment::Literal('?')),
                Some(&c) => match CharClass::from_placeholder(c) {
                    Some(class) => segments.push(Segment::Random(class)),
                    None => {
                        log::debug!("rejected pattern {src:?}: unknown placeholder '?{c}' at {i}");
                        return Err(Error::InvalidPattern {
                            placeholder: c,
                            position: i,
                        });
                    }
                },
            }
            i += 2;
        }

        Ok(Self { segments })
    }

    /// Returns the number of characters every sample of this pattern has.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the pattern always produces an empty string.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Produces a string by replacing each placeholder with a random character.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.segments
            .iter()
            .map(|segment| match *segment {
                Segment::Literal(c) => c,
                Segment::Random(class) => class.sample(rng),
            })
            .collect()
    }
}

impl str::FromStr for Pattern {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self> {
        Self::parse(src)
    }
}
