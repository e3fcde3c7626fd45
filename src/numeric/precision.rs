// ============================================================================
// Precision
// Significant-digit budget passed explicitly to every inexact operation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of significant decimal digits retained by a rounded result.
///
/// There is no ambient precision anywhere in the crate: division, powers,
/// square roots and explicit rounding all take a `Precision` argument.
///
/// User-facing values live in `MIN_DIGITS..=MAX_DIGITS`. Internal
/// computations may exceed the upper bound through [`Precision::with_guard_digits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Precision(u32);

impl Precision {
    /// Smallest user-selectable precision
    pub const MIN_DIGITS: u32 = 2;

    /// Largest user-selectable precision
    pub const MAX_DIGITS: u32 = 1024;

    /// Default precision (40 significant digits)
    pub const DEFAULT: Self = Self(40);

    /// Create a precision, rejecting values outside `MIN_DIGITS..=MAX_DIGITS`.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` for out-of-range digit counts.
    pub fn new(digits: u32) -> NumericResult<Self> {
        if (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits) {
            Ok(Self(digits))
        } else {
            Err(NumericError::PrecisionOutOfRange(u64::from(digits)))
        }
    }

    /// Create a precision, silently clamping into `MIN_DIGITS..=MAX_DIGITS`.
    pub fn clamped(digits: i64) -> Self {
        let clamped = digits.clamp(i64::from(Self::MIN_DIGITS), i64::from(Self::MAX_DIGITS));
        Self(clamped as u32)
    }

    /// Precision widened by `guard` extra digits for intermediate work.
    #[inline]
    pub const fn with_guard_digits(self, guard: u32) -> Self {
        Self(self.0 + guard)
    }

    /// The smaller of two precisions.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Number of significant digits.
    #[inline]
    pub const fn digits(self) -> u32 {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
