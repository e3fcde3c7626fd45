// ============================================================================
// Precision Square Root
// Newton-Raphson with explicit guard digits and a single final rounding
// ============================================================================
//
// Generic high-precision square-root routines can truncate the result when
// the input sits just above a power of ten with a long run of repeated
// digits: sqrt(9.000...018e100) coming back as 3e50 instead of
// 3.000...003e50. This routine controls every rounding step itself:
//
// 1. Seed from f64::sqrt (about 16 correct digits)
// 2. Iterate x := (x + v/x) / 2 at `digits + GUARD_DIGITS`
// 3. Stop once two successive iterates agree at working precision
// 4. Round once to `digits`

use super::decimal::Decimal;
use super::precision::Precision;

/// Extra digits carried during iteration beyond the requested precision.
pub const GUARD_DIGITS: u32 = 5;

/// Square root of `value` rounded half away from zero to `digits` significant digits.
///
/// Zero and negative inputs return zero; a non-positive variance collapses
/// to a zero standard deviation rather than an error.
///
/// # Example
/// ```
/// use decimal_stats::numeric::{sqrt, Decimal, Precision};
///
/// let two: Decimal = "2".parse()?;
/// let root = sqrt(&two, Precision::new(10)?);
/// assert_eq!(root.to_string(), "1.414213562");
/// # Ok::<(), decimal_stats::numeric::NumericError>(())
/// ```
pub fn sqrt(value: &Decimal, digits: Precision) -> Decimal {
    if !value.is_positive() {
        return Decimal::zero();
    }

    let working = digits.with_guard_digits(GUARD_DIGITS);
    let max_iterations = working.digits();

    let mut x = initial_estimate(value).round(working);
    let mut iterations = 0;

    while iterations < max_iterations {
        iterations += 1;

        // x is strictly positive: the seed is positive and the Newton map
        // keeps positive iterates positive for positive input
        let quotient = match value.div(&x, working) {
            Ok(q) => q,
            Err(_) => break,
        };
        let next = match (&x + &quotient).div_int(2, working) {
            Ok(n) => n,
            Err(_) => break,
        };

        if next == x {
            break;
        }
        x = next;
    }

    tracing::trace!(
        iterations,
        working_digits = working.digits(),
        "square root converged"
    );

    x.round(digits)
}

/// Starting point for the iteration.
///
/// Uses the platform square root when the value fits in an `f64`,
/// otherwise `10^ceil(e/2)` where `10^(e-1) <= value < 10^e`.
fn initial_estimate(value: &Decimal) -> Decimal {
    let seed = value
        .to_f64()
        .map(f64::sqrt)
        .filter(|s| s.is_finite() && *s > 0.0)
        .and_then(|s| Decimal::try_from_f64(s).ok());

    match seed {
        Some(seed) => seed,
        None => {
            let exponent = value.magnitude_exponent().unwrap_or(0);
            let half = (exponent + 1).div_euclid(2);
            power_of_ten(half)
        },
    }
}

fn power_of_ten(exp: i64) -> Decimal {
    // "1e<exp>" always parses
    format!("1e{}", exp).parse().unwrap_or_else(|_| Decimal::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    fn p(digits: u32) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_non_positive_is_zero() {
        assert_eq!(sqrt(&Decimal::zero(), p(40)), Decimal::zero());
        assert_eq!(sqrt(&d("-4"), p(40)), Decimal::zero());
    }

    #[test]
    fn test_perfect_squares() {
        assert_eq!(sqrt(&d("1"), p(40)), d("1"));
        assert_eq!(sqrt(&d("9"), p(40)), d("3"));
        assert_eq!(sqrt(&d("0.0625"), p(40)), d("0.25"));
        assert_eq!(sqrt(&d("1e100"), p(40)), d("1e50"));
    }

    #[test]
    fn test_sqrt_two_at_high_precision() {
        let expected = d("1.4142135623730950488016887242096980785696718753769");
        assert_eq!(sqrt(&d("2"), p(50)), expected);
    }

    #[test]
    fn test_repeated_digit_run_keeps_last_digit() {
        // (3.000...003e50)^2 = 9.000...018000...009e100
        let variance = d("9.000000000000000000000000000000000000018e100");
        let root = sqrt(&variance, p(40));
        assert_eq!(root, d("3.000000000000000000000000000000000000003e50"));
    }

    #[test]
    fn test_values_outside_f64_range() {
        assert_eq!(sqrt(&d("4e1000"), p(20)), d("2e500"));
        assert_eq!(sqrt(&d("9e-1000"), p(20)), d("3e-500"));
        assert_eq!(sqrt(&d("1e999"), p(10)), d("3.162277660e499"));
    }

    #[test]
    fn test_result_is_stable_under_rerounding() {
        let root = sqrt(&d("7"), p(30));
        assert_eq!(root.round(p(30)), root);
        assert!(root.significant_digits() <= 30);
    }
}
