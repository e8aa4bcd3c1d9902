// ============================================================================
// Arithmetic Interface
// Defines the contract for pluggable integer arithmetic backends
// ============================================================================

use crate::numeric::Word;

/// Strategy pattern interface for the arithmetic the spigot engine runs on.
/// Implementations: EmulatedArithmetic (primitive-only), NativeArithmetic.
///
/// Every method must match native `i64` semantics: division and remainder
/// truncate toward zero, and comparisons return `1` for true and `0` for
/// false. A zero divisor is outside the contract.
pub trait Arithmetic: Send + Sync {
    /// Get the backend name for logging/metrics
    fn name(&self) -> &str;

    /// Branch condition: is `x` strictly positive
    fn is_positive(&self, x: Word) -> bool;

    fn increment(&self, x: Word) -> Word;

    fn decrement(&self, x: Word) -> Word;

    fn add(&self, x: Word, y: Word) -> Word;

    fn multiply(&self, x: Word, y: Word) -> Word;

    /// Truncating division. `y` must be non-zero.
    fn divide(&self, x: Word, y: Word) -> Word;

    /// Truncating remainder (sign follows `x`). `y` must be non-zero.
    fn modulus(&self, x: Word, y: Word) -> Word;

    fn equals(&self, x: Word, y: Word) -> Word;

    fn greater_than(&self, x: Word, y: Word) -> Word;

    fn less_than(&self, x: Word, y: Word) -> Word;

    /// `1` when `x <= 0`, otherwise `0`
    fn logical_not(&self, x: Word) -> Word;

    /// Convenience: treat a comparison result as a Rust bool
    fn holds(&self, truth: Word) -> bool {
        self.is_positive(truth)
    }
}
