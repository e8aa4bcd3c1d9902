// ============================================================================
// Arithmetic Backends
// Emulated (primitive-only) and native implementations of `Arithmetic`
// ============================================================================

use super::primitive::{self, Word};
use crate::interfaces::Arithmetic;

/// Arithmetic routed entirely through the primitive layer.
///
/// This is the backend the spigot engine is meant to run on: each operation
/// costs time proportional to its operands, exactly like the minimal machine
/// being emulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmulatedArithmetic;

impl EmulatedArithmetic {
    pub fn new() -> Self {
        Self
    }
}

impl Arithmetic for EmulatedArithmetic {
    fn name(&self) -> &str {
        "Emulated"
    }

    #[inline]
    fn is_positive(&self, x: Word) -> bool {
        primitive::is_positive(x)
    }

    #[inline]
    fn increment(&self, x: Word) -> Word {
        primitive::increment(x)
    }

    #[inline]
    fn decrement(&self, x: Word) -> Word {
        primitive::decrement(x)
    }

    fn add(&self, x: Word, y: Word) -> Word {
        primitive::add(x, y)
    }

    fn multiply(&self, x: Word, y: Word) -> Word {
        primitive::multiply(x, y)
    }

    fn divide(&self, x: Word, y: Word) -> Word {
        primitive::divide(x, y)
    }

    fn modulus(&self, x: Word, y: Word) -> Word {
        primitive::modulus(x, y)
    }

    fn equals(&self, x: Word, y: Word) -> Word {
        primitive::equals(x, y)
    }

    fn greater_than(&self, x: Word, y: Word) -> Word {
        primitive::greater_than(x, y)
    }

    fn less_than(&self, x: Word, y: Word) -> Word {
        primitive::less_than(x, y)
    }

    fn logical_not(&self, x: Word) -> Word {
        primitive::logical_not(x)
    }
}

/// Native `i64` operators. Same contract, constant time per operation.
///
/// Wrapping variants keep overflow behaviour identical to the emulated
/// backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeArithmetic;

impl NativeArithmetic {
    pub fn new() -> Self {
        Self
    }
}

impl Arithmetic for NativeArithmetic {
    fn name(&self) -> &str {
        "Native"
    }

    #[inline]
    fn is_positive(&self, x: Word) -> bool {
        x > 0
    }

    #[inline]
    fn increment(&self, x: Word) -> Word {
        x.wrapping_add(1)
    }

    #[inline]
    fn decrement(&self, x: Word) -> Word {
        x.wrapping_sub(1)
    }

    #[inline]
    fn add(&self, x: Word, y: Word) -> Word {
        x.wrapping_add(y)
    }

    #[inline]
    fn multiply(&self, x: Word, y: Word) -> Word {
        x.wrapping_mul(y)
    }

    #[inline]
    fn divide(&self, x: Word, y: Word) -> Word {
        x.wrapping_div(y)
    }

    #[inline]
    fn modulus(&self, x: Word, y: Word) -> Word {
        x.wrapping_rem(y)
    }

    #[inline]
    fn equals(&self, x: Word, y: Word) -> Word {
        Word::from(x == y)
    }

    #[inline]
    fn greater_than(&self, x: Word, y: Word) -> Word {
        Word::from(x > y)
    }

    #[inline]
    fn less_than(&self, x: Word, y: Word) -> Word {
        Word::from(x < y)
    }

    #[inline]
    fn logical_not(&self, x: Word) -> Word {
        Word::from(x <= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backends() -> Vec<Box<dyn Arithmetic>> {
        vec![Box::new(EmulatedArithmetic::new()), Box::new(NativeArithmetic::new())]
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(EmulatedArithmetic.name(), "Emulated");
        assert_eq!(NativeArithmetic.name(), "Native");
    }

    #[test]
    fn test_backends_agree() {
        let emulated = EmulatedArithmetic::new();
        let native = NativeArithmetic::new();

        for x in -25..=25 {
            for y in -25..=25 {
                assert_eq!(emulated.add(x, y), native.add(x, y));
                assert_eq!(emulated.multiply(x, y), native.multiply(x, y));
                assert_eq!(emulated.equals(x, y), native.equals(x, y));
                assert_eq!(emulated.greater_than(x, y), native.greater_than(x, y));
                assert_eq!(emulated.less_than(x, y), native.less_than(x, y));
                if y != 0 {
                    assert_eq!(emulated.divide(x, y), native.divide(x, y), "{x} / {y}");
                    assert_eq!(emulated.modulus(x, y), native.modulus(x, y), "{x} % {y}");
                }
            }
            assert_eq!(emulated.logical_not(x), native.logical_not(x));
        }
    }

    #[test]
    fn test_holds() {
        for arithmetic in backends() {
            assert!(arithmetic.holds(arithmetic.equals(10, 10)));
            assert!(!arithmetic.holds(arithmetic.less_than(10, 9)));
            assert!(arithmetic.holds(arithmetic.logical_not(0)));
        }
    }
}
