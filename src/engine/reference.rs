// ============================================================================
// Reference Spigot
// The same digit algorithm written directly with native integer operators
// ============================================================================
//
// Shares no code with `SpigotComputation` or the arithmetic backends so the
// two can be compared character for character.

use crate::domain::CarryResetPolicy;

/// Digits of pi after `digit_count` sweeps, computed with native arithmetic.
///
/// Follows the same conventions as the engine: the initial placeholder
/// predigit is never printed, and `policy` decides whether the predigit is
/// reset after a carry of ten.
pub fn reference_digits(digit_count: usize, policy: CarryResetPolicy) -> String {
    let len = 10 * digit_count / 3 + 1;
    let mut columns = vec![2i64; len];

    let mut nines = 0usize;
    let mut predigit = 0i64;
    let mut holding = false;
    let mut out = String::with_capacity(digit_count + 1);

    for _ in 0..digit_count {
        let mut q = 0i64;

        for i in (1..=len).rev() {
            let x = 10 * columns[i - 1] + q * i as i64;
            let divisor = 2 * i as i64 - 1;
            columns[i - 1] = x % divisor;
            q = x / divisor;
        }

        columns[0] = q % 10;
        q /= 10;

        match q {
            9 => nines += 1,
            10 => {
                push_digit(&mut out, predigit + 1);
                out.extend(std::iter::repeat_n('0', nines));
                if policy == CarryResetPolicy::ResetBoth {
                    predigit = 0;
                }
                nines = 0;
                holding = true;
            },
            _ => {
                if holding {
                    push_digit(&mut out, predigit);
                }
                predigit = q;
                holding = true;
                out.extend(std::iter::repeat_n('9', nines));
                nines = 0;
            },
        }
    }

    if holding {
        push_digit(&mut out, predigit);
    }
    out
}

fn push_digit(out: &mut String, digit: i64) {
    debug_assert!((0..=9).contains(&digit), "{} is not a digit", digit);
    out.push(char::from(b'0' + digit as u8));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(reference_digits(1, CarryResetPolicy::ResetBoth), "3");
        assert_eq!(reference_digits(10, CarryResetPolicy::ResetBoth), "3141592653");
        assert_eq!(
            reference_digits(50, CarryResetPolicy::ResetBoth),
            "31415926535897932384626433832795028841971693993751"
        );
    }

    #[test]
    fn test_trailing_nine_is_held() {
        // Sweep 6 yields the 9 of 3.14159; it is still buffered at the end
        assert_eq!(reference_digits(6, CarryResetPolicy::ResetBoth), "31415");
    }

    #[test]
    fn test_legacy_policy_diverges() {
        assert_eq!(
            reference_digits(34, CarryResetPolicy::KeepPredigit),
            "3141592653589793238462643383279542"
        );
        assert_eq!(
            reference_digits(32, CarryResetPolicy::KeepPredigit),
            reference_digits(32, CarryResetPolicy::ResetBoth)
        );
    }

    #[test]
    fn test_zero_digits() {
        assert_eq!(reference_digits(0, CarryResetPolicy::ResetBoth), "");
    }
}
