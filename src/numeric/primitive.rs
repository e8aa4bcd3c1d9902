// ============================================================================
// Primitive Arithmetic
// Signed integer arithmetic rebuilt from increment, decrement, negation and a
// positivity test, mirroring a machine with no other native arithmetic
// ============================================================================
//
// Only the four primitives below touch native integer operators. Everything
// else in this file is composed from them. The derived operations run in time
// proportional to operand magnitude on purpose; they are loops rather than
// recursion so the stack depth stays constant for large operands.

/// The sole scalar type of the emulated machine.
pub type Word = i64;

/// Boolean true as a machine word.
pub const TRUE: Word = 1;

/// Boolean false as a machine word.
pub const FALSE: Word = 0;

/// The literal one.
pub const ONE: Word = 1;

/// The literal zero, spelled the way the machine builds it.
pub const ZERO: Word = FALSE;

// ============================================================================
// Machine Primitives
// ============================================================================

/// Add one. Wraps on overflow like the unchecked machine.
#[inline]
pub const fn increment(x: Word) -> Word {
    x.wrapping_add(1)
}

/// Subtract one. Wraps on overflow like the unchecked machine.
#[inline]
pub const fn decrement(x: Word) -> Word {
    x.wrapping_sub(1)
}

/// Flip the sign. `negate(Word::MIN)` wraps to itself.
#[inline]
pub const fn negate(x: Word) -> Word {
    x.wrapping_neg()
}

/// The machine's only branch condition.
#[inline]
pub const fn is_positive(x: Word) -> bool {
    x > 0
}

#[inline]
const fn truth(condition: bool) -> Word {
    if condition {
        TRUE
    } else {
        FALSE
    }
}

// ============================================================================
// Addition
// ============================================================================

/// `x + y` by stepping `x` once per unit of `y`.
pub fn add(mut x: Word, mut y: Word) -> Word {
    while is_positive(y) {
        x = increment(x);
        y = decrement(y);
    }
    while is_positive(negate(y)) {
        x = decrement(x);
        y = increment(y);
    }
    x
}

/// `x - y`, i.e. `x + (-y)`.
#[inline]
pub fn subtract(x: Word, y: Word) -> Word {
    add(x, negate(y))
}

// ============================================================================
// Logic and Comparison
// ============================================================================

/// `TRUE` when `x <= 0`, `FALSE` otherwise. Any positive word counts as true.
#[inline]
pub fn logical_not(x: Word) -> Word {
    truth(!is_positive(x))
}

/// `x == y`: the difference is neither positive nor negative.
pub fn equals(x: Word, y: Word) -> Word {
    let diff = subtract(x, y);

    if is_positive(diff) || is_positive(negate(diff)) {
        FALSE
    } else {
        TRUE
    }
}

/// `x > y`: the difference is positive.
#[inline]
pub fn greater_than(x: Word, y: Word) -> Word {
    truth(is_positive(subtract(x, y)))
}

/// `x < y`: the difference is neither positive nor zero.
pub fn less_than(x: Word, y: Word) -> Word {
    let diff = subtract(x, y);

    if is_positive(diff) || is_positive(equals(diff, ZERO)) {
        FALSE
    } else {
        TRUE
    }
}

// ============================================================================
// Multiplication and Division
// ============================================================================

/// `x * y` from the identity `x*y == (x-1)*y + y`.
///
/// A negative `x` flips the sign of both operands first so the countdown on
/// `x` always terminates at zero. Takes `|x|` additions of `y`.
pub fn multiply(mut x: Word, mut y: Word) -> Word {
    if is_positive(negate(x)) {
        x = negate(x);
        y = negate(y);
    }

    let mut product = ZERO;
    while is_positive(x) {
        product = add(product, y);
        x = decrement(x);
    }
    product
}

/// `x / y` for `x >= 0, y > 0` from the identity `x/y == (x-y)/y + 1`.
///
/// Repeated subtraction while the difference stays above `-1`. Signs are not
/// checked; callers go through [`divide`].
pub fn divide_positive(mut x: Word, y: Word) -> Word {
    debug_assert!(is_positive(y), "divide_positive requires a positive divisor");

    let mut quotient = ZERO;
    loop {
        let diff = subtract(x, y);
        if !is_positive(greater_than(diff, negate(ONE))) {
            return quotient;
        }
        quotient = increment(quotient);
        x = diff;
    }
}

/// `x / y`, truncating toward zero like native integer division.
///
/// The sign of the quotient is the product of the operand signs; the
/// magnitudes go through [`divide_positive`]. A zero divisor is unsupported:
/// debug builds panic, release builds never return.
pub fn divide(mut x: Word, mut y: Word) -> Word {
    let mut sign = ONE;

    if is_positive(negate(x)) {
        sign = negate(ONE);
        x = negate(x);
    }
    if is_positive(negate(y)) {
        sign = multiply(sign, negate(ONE));
        y = negate(y);
    }

    let quotient = divide_positive(x, y);
    multiply(sign, quotient)
}

/// Truncating remainder `x - (x / y) * y`; the sign follows the dividend.
///
/// Same zero-divisor precondition as [`divide`].
pub fn modulus(x: Word, y: Word) -> Word {
    let quotient = divide(x, y);
    subtract(x, multiply(quotient, y))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_primitives() {
        assert_eq!(increment(41), 42);
        assert_eq!(decrement(0), -1);
        assert_eq!(negate(7), -7);
        assert!(is_positive(1));
        assert!(!is_positive(0));
        assert!(!is_positive(-1));
    }

    #[test]
    fn test_primitives_wrap() {
        assert_eq!(increment(Word::MAX), Word::MIN);
        assert_eq!(decrement(Word::MIN), Word::MAX);
        assert_eq!(negate(Word::MIN), Word::MIN);
    }

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(add(3, 4), 7);
        assert_eq!(add(3, -4), -1);
        assert_eq!(add(-3, 0), -3);
        assert_eq!(subtract(3, 4), -1);
        assert_eq!(subtract(-3, -4), 1);
    }

    #[test]
    fn test_logical_not() {
        assert_eq!(logical_not(0), TRUE);
        assert_eq!(logical_not(-5), TRUE);
        assert_eq!(logical_not(1), FALSE);
        assert_eq!(logical_not(99), FALSE);
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(equals(3, 3), TRUE);
        assert_eq!(equals(-3, 3), FALSE);
        assert_eq!(greater_than(4, -9), TRUE);
        assert_eq!(greater_than(-9, 4), FALSE);
        assert_eq!(greater_than(3, 3), FALSE);
        assert_eq!(less_than(-5, -3), TRUE);
        assert_eq!(less_than(-3, -5), FALSE);
        assert_eq!(less_than(0, 0), FALSE);
    }

    #[test]
    fn test_multiply_signs() {
        assert_eq!(multiply(0, -1), 0);
        assert_eq!(multiply(-1, 0), 0);
        assert_eq!(multiply(-9, 4), -36);
        assert_eq!(multiply(4, -9), -36);
        assert_eq!(multiply(-5, -3), 15);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(9, -4), -2);
        assert_eq!(divide(-9, 4), -2);
        assert_eq!(divide(-9, -4), 2);
        assert_eq!(divide(1, 5), 0);
        assert_eq!(divide(-1, 5), 0);
        assert_eq!(divide(0, -1), 0);
    }

    #[test]
    fn test_divide_positive() {
        assert_eq!(divide_positive(0, 3), 0);
        assert_eq!(divide_positive(2, 3), 0);
        assert_eq!(divide_positive(3, 3), 1);
        assert_eq!(divide_positive(17, 5), 3);
    }

    #[test]
    fn test_modulus_follows_dividend() {
        assert_eq!(modulus(-9, 4), -1);
        assert_eq!(modulus(9, -4), 1);
        assert_eq!(modulus(-1, -5), -1);
        assert_eq!(modulus(4, 2), 0);
    }

    #[test]
    fn test_quickcheck_comparisons() {
        fn prop(x: i16, y: i16) -> bool {
            let (x, y) = (Word::from(x), Word::from(y));
            equals(x, y) == Word::from(x == y)
                && greater_than(x, y) == Word::from(x > y)
                && less_than(x, y) == Word::from(x < y)
                && logical_not(x) == Word::from(x <= 0)
        }

        quickcheck::QuickCheck::new()
            .tests(200)
            .quickcheck(prop as fn(i16, i16) -> bool);
    }

    proptest! {
        #[test]
        fn prop_multiply_matches_native(x in -300i64..300, y in -300i64..300) {
            prop_assert_eq!(multiply(x, y), x * y);
        }

        #[test]
        fn prop_divide_matches_native(
            x in -2_000i64..2_000,
            y in (-60i64..60).prop_filter("non-zero divisor", |y| *y != 0),
        ) {
            prop_assert_eq!(divide(x, y), x / y);
        }

        #[test]
        fn prop_modulus_matches_native(
            x in -2_000i64..2_000,
            y in (-60i64..60).prop_filter("non-zero divisor", |y| *y != 0),
        ) {
            prop_assert_eq!(modulus(x, y), x % y);
            prop_assert_eq!(modulus(x, y), x - divide(x, y) * y);
        }
    }
}
