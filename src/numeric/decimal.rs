// ============================================================================
// Arbitrary-Precision Decimal
// Exact add/sub/mul, explicitly-rounded div/pow, half-up rounding
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::precision::Precision;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Arbitrary-precision signed decimal number.
///
/// Wraps `bigdecimal::BigDecimal` and narrows its API so that every
/// operation which can lose digits takes an explicit [`Precision`]:
///
/// - `+`, `-`, `*` and [`Decimal::neg`] are exact.
/// - [`Decimal::div`], [`Decimal::div_int`], [`Decimal::powi`],
///   [`Decimal::round`] and [`Decimal::sub_rounded`] round half away from
///   zero to the requested number of significant digits.
///
/// Equality and ordering are by value: `2.50 == 2.5`.
///
/// # Example
/// ```
/// use decimal_stats::numeric::{Decimal, Precision};
///
/// let one: Decimal = "1".parse()?;
/// let three: Decimal = "3".parse()?;
/// let third = one.div(&three, Precision::new(5)?)?;
/// assert_eq!(third.to_string(), "0.33333");
/// # Ok::<(), decimal_stats::numeric::NumericError>(())
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

/// Largest `|e|` accepted by `FromStr` for a value written as `d.ddd × 10^e`.
///
/// Exact addition aligns both operands to one coefficient, so operands
/// with unbounded exponents cost unbounded memory.
pub const MAX_EXPONENT: u64 = 4096;

/// `Display` switches to scientific notation when `|e|` exceeds this
const PLAIN_EXPONENT_LIMIT: u64 = 1024;

// ============================================================================
// Digit Helpers
// ============================================================================

/// 10^exp as an unsigned big integer
fn ten_pow(exp: u64) -> BigUint {
    BigUint::from(10u32).pow(exp as u32)
}

/// Number of base-10 digits in `mag` (zero counts as one digit)
fn digit_count(mag: &BigUint) -> u64 {
    if mag.is_zero() {
        1
    } else {
        mag.to_str_radix(10).len() as u64
    }
}

/// Round `sign * mag * 10^-scale` half away from zero to `precision` significant digits.
fn round_parts(sign: Sign, mag: BigUint, scale: i64, precision: Precision) -> BigDecimal {
    if mag.is_zero() {
        return BigDecimal::zero();
    }

    let digits = digit_count(&mag);
    let keep = u64::from(precision.digits());
    if digits <= keep {
        return BigDecimal::new(BigInt::from_biguint(sign, mag), scale);
    }

    let drop = digits - keep;
    let divisor = ten_pow(drop);
    let remainder = &mag % &divisor;
    let mut quotient = mag / &divisor;

    // Half-up on the magnitude is half-away-from-zero on the signed value
    if remainder * 2u32 >= divisor {
        quotient += 1u32;
    }

    BigDecimal::new(BigInt::from_biguint(sign, quotient), scale - drop as i64)
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value 0.
    #[inline]
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// The value 1.
    #[inline]
    pub fn one() -> Self {
        Self(BigDecimal::one())
    }

    /// Convert a binary float exactly (every binary digit is kept).
    ///
    /// # Errors
    /// Returns `NotFinite` for NaN and infinities.
    pub fn try_from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NotFinite);
        }
        BigDecimal::from_f64(value)
            .map(Self)
            .ok_or(NumericError::NotFinite)
    }

    fn from_parts(sign: Sign, mag: BigUint, scale: i64) -> Self {
        if mag.is_zero() {
            return Self::zero();
        }
        Self(BigDecimal::new(BigInt::from_biguint(sign, mag), scale))
    }

    fn parts(&self) -> (Sign, BigUint, i64) {
        let (int, scale) = self.0.as_bigint_and_exponent();
        (int.sign(), int.magnitude().clone(), scale)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Number of significant digits in the stored coefficient.
    pub fn significant_digits(&self) -> u64 {
        digit_count(&self.parts().1)
    }

    /// Decimal order of magnitude `e` such that `10^(e-1) <= |self| < 10^e`.
    ///
    /// Returns `None` for zero.
    pub fn magnitude_exponent(&self) -> Option<i64> {
        let (_, mag, scale) = self.parts();
        if mag.is_zero() {
            None
        } else {
            Some(digit_count(&mag) as i64 - scale)
        }
    }

    /// Nearest `f64`, or `None` when the value is outside the finite `f64` range.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64().filter(|v| v.is_finite())
    }

    // ========================================================================
    // Rounded Arithmetic
    // ========================================================================

    /// Round half away from zero to `precision` significant digits.
    pub fn round(&self, precision: Precision) -> Self {
        let (sign, mag, scale) = self.parts();
        Self(round_parts(sign, mag, scale, precision))
    }

    /// `self - rhs`, rounded to `precision` significant digits.
    pub fn sub_rounded(&self, rhs: &Decimal, precision: Precision) -> Self {
        (self - rhs).round(precision)
    }

    /// `self / rhs`, rounded half away from zero to `precision` significant digits.
    ///
    /// The quotient is computed with at least one digit beyond `precision`
    /// and the rounding decision is made on the exact truncated quotient, so
    /// the result is correctly rounded.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn div(&self, rhs: &Decimal, precision: Precision) -> NumericResult<Self> {
        let (rhs_sign, rhs_mag, rhs_scale) = rhs.parts();
        if rhs_mag.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let (lhs_sign, lhs_mag, lhs_scale) = self.parts();
        if lhs_mag.is_zero() {
            return Ok(Self::zero());
        }

        // Shift the numerator so the integer quotient carries >= precision + 1 digits
        let keep = i64::from(precision.digits());
        let shift = (keep + 1 + digit_count(&rhs_mag) as i64 - digit_count(&lhs_mag) as i64).max(0);

        let numerator = lhs_mag * ten_pow(shift as u64);
        let quotient = numerator / &rhs_mag;

        let sign = if lhs_sign == rhs_sign {
            Sign::Plus
        } else {
            Sign::Minus
        };

        Ok(Self(round_parts(
            sign,
            quotient,
            lhs_scale - rhs_scale + shift,
            precision,
        )))
    }

    /// Divide by a positive integer count, rounded to `precision` significant digits.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_int(&self, divisor: u64, precision: Precision) -> NumericResult<Self> {
        self.div(&Decimal::from(divisor), precision)
    }

    /// `self^exp`, computed exactly then rounded once to `precision` significant digits.
    pub fn powi(&self, exp: u32, precision: Precision) -> Self {
        let mut result = BigDecimal::one();
        let mut base = self.0.clone();
        let mut exp = exp;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        Self(result).round(precision)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Format after rounding to `precision` significant digits.
    pub fn to_string_rounded(&self, precision: Precision) -> String {
        self.round(precision).to_string()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for Decimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<'a> Add<&'a Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: &'a Decimal) -> Self::Output {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Decimal) -> Self::Output {
        Decimal(self.0 + rhs.0)
    }
}

impl<'a> Sub<&'a Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: &'a Decimal) -> Self::Output {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Decimal) -> Self::Output {
        Decimal(self.0 - rhs.0)
    }
}

impl<'a> Mul<&'a Decimal> for &'a Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: &'a Decimal) -> Self::Output {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: Decimal) -> Self::Output {
        Decimal(self.0 * rhs.0)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        Decimal(iter.fold(BigDecimal::zero(), |acc, v| acc + &v.0))
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        Decimal(iter.fold(BigDecimal::zero(), |acc, v| acc + v.0))
    }
}

impl From<i64> for Decimal {
    #[inline]
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<u64> for Decimal {
    #[inline]
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<usize> for Decimal {
    #[inline]
    fn from(value: usize) -> Self {
        Self(BigDecimal::from(value as u64))
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl From<rust_decimal::Decimal> for Decimal {
    /// Exact conversion: the 96-bit mantissa and scale carry over unchanged.
    fn from(value: rust_decimal::Decimal) -> Self {
        Self(BigDecimal::new(
            BigInt::from(value.mantissa()),
            i64::from(value.scale()),
        ))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Decimal {
    /// Plain positional notation with trailing fractional zeros removed,
    /// or `d.ddde±N` for exponents beyond 1024 in magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, mag, scale) = self.parts();
        if mag.is_zero() {
            return f.pad("0");
        }

        let digits = mag.to_str_radix(10);
        let mut text = String::with_capacity(digits.len() + 4);
        if sign == Sign::Minus {
            text.push('-');
        }

        let exponent = (digits.len() as i64).saturating_sub(scale).saturating_sub(1);
        if exponent.unsigned_abs() > PLAIN_EXPONENT_LIMIT {
            let (lead, rest) = digits.split_at(1);
            text.push_str(lead);
            let rest = rest.trim_end_matches('0');
            if !rest.is_empty() {
                text.push('.');
                text.push_str(rest);
            }
            text.push_str(&format!("e{:+}", exponent));
        } else if scale <= 0 {
            text.push_str(&digits);
            text.push_str(&"0".repeat(scale.unsigned_abs() as usize));
        } else {
            let scale = scale as usize;
            let (int_part, frac_part) = if scale >= digits.len() {
                (
                    "0".to_string(),
                    format!("{}{}", "0".repeat(scale - digits.len()), digits),
                )
            } else {
                let split = digits.len() - scale;
                (digits[..split].to_string(), digits[split..].to_string())
            };

            text.push_str(&int_part);
            let frac = frac_part.trim_end_matches('0');
            if !frac.is_empty() {
                text.push('.');
                text.push_str(frac);
            }
        }

        f.pad(&text)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Decimal {
    type Err = NumericError;

    /// Parse a decimal numeral.
    ///
    /// # Examples
    /// - "123" -> 123
    /// - "-0.001" -> -0.001
    /// - ".5" -> 0.5
    /// - "1.000000001e+50" -> 100000000100000000000000000000000000000000000000000
    ///
    /// Non-zero values whose exponent exceeds [`MAX_EXPONENT`] in magnitude
    /// are rejected as `InvalidInput`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeral(s, MAX_EXPONENT)
    }
}

fn parse_numeral(s: &str, max_exponent: u64) -> NumericResult<Decimal> {
    let text = s.trim();
    let invalid = || NumericError::InvalidInput(text.to_string());

    let (negative, unsigned) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    };

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let exponent: i64 = match exponent {
        Some(exp) => exp.parse().map_err(|_| invalid())?,
        None => 0,
    };

    let digits = format!("{}{}", int_part, frac_part);
    let mag = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
    let scale = (frac_part.len() as i64)
        .checked_sub(exponent)
        .ok_or_else(invalid)?;

    if mag.is_zero() {
        return Ok(Decimal::zero());
    }
    let adjusted = (digit_count(&mag) as i64)
        .checked_sub(scale)
        .and_then(|e| e.checked_sub(1))
        .ok_or_else(invalid)?;
    if adjusted.unsigned_abs() > max_exponent {
        return Err(invalid());
    }

    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(Decimal::from_parts(sign, mag, scale))
}

// ============================================================================
// Serialization (decimal strings, never floats)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Serialized statistics such as variances may exceed the input bound
        let text = String::deserialize(deserializer)?;
        parse_numeral(&text, u64::MAX).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
