// ============================================================================
// Digit Column Array
// Mixed-radix accumulator behind the spigot (denominators 1, 3, 5, 7, ...)
// ============================================================================

use crate::numeric::Word;

/// Fixed-length array of per-column state.
///
/// Position `i` (1-indexed) holds a coefficient over the denominator `2i-1`.
/// The length is decided once from the digit count and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitColumns {
    entries: Vec<Word>,
}

impl DigitColumns {
    /// Value every column starts with
    pub const INITIAL: Word = 2;

    /// `floor(10 * digit_count / 3) + 1`
    pub fn column_count(digit_count: usize) -> usize {
        10 * digit_count / 3 + 1
    }

    /// Allocate `len` columns filled with [`Self::INITIAL`]
    pub fn new(len: usize) -> Self {
        Self {
            entries: vec![Self::INITIAL; len],
        }
    }

    pub fn for_digits(digit_count: usize) -> Self {
        Self::new(Self::column_count(digit_count))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a 0-based index. Panics when out of range, like slice indexing.
    #[inline]
    pub fn get(&self, index: Word) -> Word {
        self.entries[index as usize]
    }

    #[inline]
    pub fn set(&mut self, index: Word, value: Word) {
        self.entries[index as usize] = value;
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.entries
    }

    /// First 1-indexed position whose entry is outside `[0, 2i-1)`.
    pub fn first_unbounded(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, &entry)| (index + 1, entry))
            .find(|&(position, entry)| entry < 0 || entry >= 2 * position as Word - 1)
            .map(|(position, _)| position)
    }

    /// Whether every column is reduced below its denominator.
    ///
    /// Holds right after a column sweep. Carry extraction then overwrites the
    /// first column with a digit, so it no longer holds until the next sweep.
    pub fn is_bounded(&self) -> bool {
        self.first_unbounded().is_none()
    }
}
