// ============================================================================
// Numeric Errors
// Error types for the primitive arithmetic layer and digit extraction
// ============================================================================

use super::primitive::Word;
use super::self_test::Operation;
use std::fmt;

/// Errors that can surface from the arithmetic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// An arithmetic backend disagreed with native semantics during self-test
    SelfTestFailure {
        operation: Operation,
        lhs: Word,
        rhs: Word,
        expected: Word,
        actual: Word,
    },
    /// Digit extraction produced a value that is not a decimal digit
    DigitOutOfRange(Word),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::SelfTestFailure {
                operation,
                lhs,
                rhs,
                expected,
                actual,
            } => write!(
                f,
                "self-test failed: {}({}, {}) expected {} but got {}",
                operation, lhs, rhs, expected, actual
            ),
            NumericError::DigitOutOfRange(value) => {
                write!(f, "digit out of range: {} is not in 0..=9", value)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
