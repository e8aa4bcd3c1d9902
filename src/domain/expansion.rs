// ============================================================================
// Pi Expansion
// A collected run of emitted digits
// ============================================================================

use super::digit::Digit;
use rust_decimal::Decimal;
use std::fmt;

/// Digits of an expansion, integer digit first (`3`, `1`, `4`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PiExpansion {
    digits: Vec<Digit>,
}

impl PiExpansion {
    /// Largest number of fractional digits a `Decimal` carries
    pub const DECIMAL_SCALE_LIMIT: usize = 28;

    pub fn new(digits: Vec<Digit>) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of leading digits shared with `other`
    pub fn common_prefix_len(&self, other: &PiExpansion) -> usize {
        self.digits
            .iter()
            .zip(other.digits.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    pub fn is_prefix_of(&self, other: &PiExpansion) -> bool {
        self.len() <= other.len() && self.common_prefix_len(other) == self.len()
    }

    /// The expansion as a decimal number (`3.14159...`), truncated to the
    /// precision `Decimal` can hold. `None` when empty.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let used = self.digits.len().min(Self::DECIMAL_SCALE_LIMIT + 1);
        let (integer, fraction) = self.digits[..used].split_first()?;

        let mantissa = fraction
            .iter()
            .fold(i128::from(integer.value()), |acc, digit| {
                acc * 10 + i128::from(digit.value())
            });

        Decimal::try_from_i128_with_scale(mantissa, fraction.len() as u32).ok()
    }
}

impl FromIterator<Digit> for PiExpansion {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for PiExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
