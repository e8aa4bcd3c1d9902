// ============================================================================
// Digit Domain Model
// ============================================================================

use crate::numeric::Word;
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);
    pub const NINE: Self = Self(9);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Convert a machine word. `None` outside 0..=9.
    pub fn from_word(value: Word) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.as_char()
    }
}

/// Digits released by a single output step. One predigit plus the buffered
/// nines it settles; runs longer than the inline capacity spill to the heap.
pub type DigitBuffer = SmallVec<[Digit; 8]>;
