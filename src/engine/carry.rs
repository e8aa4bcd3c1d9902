// ============================================================================
// Carry / Run-of-Nines State
// Decides which digits a reduced carry releases
// ============================================================================

use crate::domain::{CarryResetPolicy, Digit, DigitBuffer};
use crate::interfaces::Arithmetic;
use crate::numeric::{primitive, NumericError, NumericResult, Word};

/// How a reduced carry was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Carry was 9: held back, it may still become a 10
    BufferNine,
    /// Carry was 10: predigit + 1 released, buffered nines turn into zeros
    CarryOverflow,
    /// Carry was 0..=8: predigit released, buffered nines confirmed
    Settle,
}

/// Pending output of a spigot computation.
///
/// Emission lags one step behind the sweeps: the latest settled digit stays
/// in `predigit` until the next carry shows whether it must be incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarryState {
    predigit: Word,
    nines: Word,
    /// False while `predigit` is still the initial placeholder
    holding: bool,
}

impl CarryState {
    pub fn new() -> Self {
        Self {
            predigit: primitive::ZERO,
            nines: primitive::ZERO,
            holding: false,
        }
    }

    /// State with a real pending predigit and `nines` buffered nines
    pub fn with_pending(predigit: Word, nines: Word) -> Self {
        Self {
            predigit,
            nines,
            holding: true,
        }
    }

    pub fn predigit(&self) -> Word {
        self.predigit
    }

    pub fn nines(&self) -> Word {
        self.nines
    }

    /// Whether a predigit is waiting to be released
    pub fn has_predigit(&self) -> bool {
        self.holding
    }

    /// Classify the reduced carry `q` and push the digits it releases.
    ///
    /// # Errors
    /// `DigitOutOfRange` when `q` or a released digit is not a decimal digit,
    /// which means the arithmetic backend is broken.
    pub fn classify(
        &mut self,
        q: Word,
        arithmetic: &dyn Arithmetic,
        policy: CarryResetPolicy,
        out: &mut DigitBuffer,
    ) -> NumericResult<Classification> {
        if arithmetic.holds(arithmetic.equals(q, 9)) {
            self.nines = arithmetic.increment(self.nines);
            return Ok(Classification::BufferNine);
        }

        if arithmetic.holds(arithmetic.equals(q, 10)) {
            out.push(to_digit(arithmetic.increment(self.predigit))?);
            push_run(out, Digit::ZERO, self.nines, arithmetic);

            if policy == CarryResetPolicy::ResetBoth {
                self.predigit = primitive::ZERO;
            }
            self.nines = primitive::ZERO;
            self.holding = true;
            return Ok(Classification::CarryOverflow);
        }

        // Reject garbage before it becomes the pending digit
        to_digit(q)?;

        if self.holding {
            out.push(to_digit(self.predigit)?);
        }
        self.predigit = q;
        self.holding = true;

        if arithmetic.holds(arithmetic.greater_than(self.nines, primitive::ZERO)) {
            push_run(out, Digit::NINE, self.nines, arithmetic);
            self.nines = primitive::ZERO;
        }

        Ok(Classification::Settle)
    }

    /// Release the last pending digit. Buffered nines are left unresolved.
    pub fn flush(&self, out: &mut DigitBuffer) -> NumericResult<()> {
        if self.holding {
            out.push(to_digit(self.predigit)?);
        }
        Ok(())
    }
}

impl Default for CarryState {
    fn default() -> Self {
        Self::new()
    }
}

fn to_digit(value: Word) -> NumericResult<Digit> {
    Digit::from_word(value).ok_or(NumericError::DigitOutOfRange(value))
}

/// Push `count` copies of `digit`, counting down on the machine
fn push_run(out: &mut DigitBuffer, digit: Digit, count: Word, arithmetic: &dyn Arithmetic) {
    let mut remaining = count;
    while arithmetic.is_positive(remaining) {
        out.push(digit);
        remaining = arithmetic.decrement(remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{EmulatedArithmetic, NativeArithmetic};

    fn rendered(out: &DigitBuffer) -> String {
        out.iter().map(|d| d.as_char()).collect()
    }

    #[test]
    fn test_placeholder_is_not_emitted() {
        let mut state = CarryState::new();
        let mut out = DigitBuffer::new();

        let class = state
            .classify(3, &EmulatedArithmetic, CarryResetPolicy::ResetBoth, &mut out)
            .unwrap();

        assert_eq!(class, Classification::Settle);
        assert!(out.is_empty());
        assert_eq!(state.predigit(), 3);
        assert!(state.has_predigit());
    }

    #[test]
    fn test_nine_is_buffered() {
        let mut state = CarryState::with_pending(5, 0);
        let mut out = DigitBuffer::new();

        for expected in 1..=2 {
            let class = state
                .classify(9, &EmulatedArithmetic, CarryResetPolicy::ResetBoth, &mut out)
                .unwrap();
            assert_eq!(class, Classification::BufferNine);
            assert_eq!(state.nines(), expected);
        }
        assert!(out.is_empty());
        assert_eq!(state.predigit(), 5);
    }

    #[test]
    fn test_carry_turns_nines_into_zeros() {
        let mut state = CarryState::with_pending(4, 3);
        let mut out = DigitBuffer::new();

        let class = state
            .classify(10, &EmulatedArithmetic, CarryResetPolicy::ResetBoth, &mut out)
            .unwrap();

        assert_eq!(class, Classification::CarryOverflow);
        assert_eq!(rendered(&out), "5000");
        assert_eq!(state.nines(), 0);
        assert_eq!(state.predigit(), 0);
    }

    #[test]
    fn test_settle_confirms_nines() {
        let mut state = CarryState::with_pending(4, 3);
        let mut out = DigitBuffer::new();

        let class = state
            .classify(5, &EmulatedArithmetic, CarryResetPolicy::ResetBoth, &mut out)
            .unwrap();

        assert_eq!(class, Classification::Settle);
        assert_eq!(rendered(&out), "4999");
        assert_eq!(state.predigit(), 5);
        assert_eq!(state.nines(), 0);
    }

    #[test]
    fn test_keep_predigit_policy() {
        let mut state = CarryState::with_pending(4, 1);
        let mut out = DigitBuffer::new();

        state
            .classify(10, &NativeArithmetic, CarryResetPolicy::KeepPredigit, &mut out)
            .unwrap();
        assert_eq!(rendered(&out), "50");
        assert_eq!(state.predigit(), 4);
        assert_eq!(state.nines(), 0);

        // The stale predigit is released by the next settle
        out.clear();
        state
            .classify(2, &NativeArithmetic, CarryResetPolicy::KeepPredigit, &mut out)
            .unwrap();
        assert_eq!(rendered(&out), "4");
    }

    #[test]
    fn test_out_of_range_carry_is_rejected() {
        let mut state = CarryState::with_pending(1, 0);
        let mut out = DigitBuffer::new();

        let err = state
            .classify(11, &NativeArithmetic, CarryResetPolicy::ResetBoth, &mut out)
            .unwrap_err();
        assert_eq!(err, NumericError::DigitOutOfRange(11));

        let err = state
            .classify(-1, &NativeArithmetic, CarryResetPolicy::ResetBoth, &mut out)
            .unwrap_err();
        assert_eq!(err, NumericError::DigitOutOfRange(-1));

        // State untouched by rejected carries
        assert_eq!(state, CarryState::with_pending(1, 0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_flush() {
        let mut out = DigitBuffer::new();
        CarryState::new().flush(&mut out).unwrap();
        assert!(out.is_empty());

        CarryState::with_pending(7, 2).flush(&mut out).unwrap();
        assert_eq!(rendered(&out), "7");
    }
}
