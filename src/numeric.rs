//! Fixed-point arithmetic for damage corrections.
//!
//! Corrections are expressed at a 1/4096 scale. Two rounding rules are
//! used and they differ only on an exact half:
//!
//! - [`round_half_up`] resolves `x.5` upward. It is used when correction
//!   factors are folded into each other.
//! - [`round_half_down`] resolves `x.5` downward. It is used when a folded
//!   correction is applied to a power, stat or damage value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Denominator of the fixed-point correction scale.
pub const SCALE: u64 = 4096;

/// Round `numerator / denominator`, resolving an exact half upward.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::numeric::round_half_up;
///
/// assert_eq!(round_half_up(5, 2), 3);
/// assert_eq!(round_half_up(7, 4), 2);
/// assert_eq!(round_half_up(5, 4), 1);
/// ```
pub fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder * 2 >= denominator {
        quotient + 1
    } else {
        quotient
    }
}

/// Round `numerator / denominator`, resolving an exact half downward.
///
/// # Examples
///
/// ```rust
/// use dmgcalc::numeric::round_half_down;
///
/// assert_eq!(round_half_down(5, 2), 2);
/// assert_eq!(round_half_down(7, 4), 2);
/// ```
pub fn round_half_down(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder * 2 > denominator {
        quotient + 1
    } else {
        quotient
    }
}

/// A correction factor on the 1/4096 scale.
///
/// `Modifier(6144)` is 1.5x, `Modifier(2048)` is 0.5x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Modifier(pub u32);

impl Modifier {
    /// 1.0x.
    pub const ONE: Self = Self(4096);
    /// 0.5x.
    pub const HALF: Self = Self(2048);
    /// 1.5x.
    pub const ONE_POINT_FIVE: Self = Self(6144);
    /// 2.0x.
    pub const DOUBLE: Self = Self(8192);

    /// Raw value on the 1/4096 scale.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Fold another correction into this one.
    ///
    /// The product is rounded half-up back onto the 1/4096 scale, so a chain
    /// of corrections composes multiplicatively with a rounding step after
    /// every factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dmgcalc::numeric::Modifier;
    ///
    /// let chained = Modifier::ONE.chain(Modifier(5325)).chain(Modifier(4915));
    /// assert_eq!(chained, Modifier(6390));
    /// ```
    pub fn chain(self, factor: Modifier) -> Modifier {
        let product = u64::from(self.0) * u64::from(factor.0);
        Modifier(round_half_up(product, SCALE) as u32)
    }

    /// Apply this correction to a value, rounding half-down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dmgcalc::numeric::Modifier;
    ///
    /// assert_eq!(Modifier::ONE_POINT_FIVE.apply(101), 151);
    /// assert_eq!(Modifier::HALF.apply(3), 1);
    /// ```
    pub fn apply(self, value: u32) -> u32 {
        round_half_down(u64::from(value) * u64::from(self.0), SCALE) as u32
    }

    /// Apply this correction and truncate instead of rounding.
    pub fn apply_floor(self, value: u32) -> u32 {
        (u64::from(value) * u64::from(self.0) / SCALE) as u32
    }

    /// Approximate multiplier, for display.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / SCALE as f64
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{:.3}", self.to_f64())
    }
}

/// An elemental effectiveness multiplier, stored as an exact fraction.
///
/// Per-relation factors are 0, 1/2 and 2, so the value is always a power of
/// two (or zero) and multiplication stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effectiveness {
    numerator: u32,
    denominator: u32,
}

impl Effectiveness {
    /// 1x.
    pub const NEUTRAL: Self = Self {
        numerator: 1,
        denominator: 1,
    };
    /// 0x.
    pub const IMMUNE: Self = Self {
        numerator: 0,
        denominator: 1,
    };
    /// 2x.
    pub const DOUBLE: Self = Self {
        numerator: 2,
        denominator: 1,
    };

    /// Combine a doubling relation.
    pub fn doubled(self) -> Self {
        if self.denominator > 1 {
            Self {
                numerator: self.numerator,
                denominator: self.denominator / 2,
            }
        } else {
            Self {
                numerator: self.numerator * 2,
                denominator: self.denominator,
            }
        }
    }

    /// Combine a halving relation.
    pub fn halved(self) -> Self {
        if self.numerator > 1 {
            Self {
                numerator: self.numerator / 2,
                denominator: self.denominator,
            }
        } else {
            Self {
                numerator: self.numerator,
                denominator: self.denominator * 2,
            }
        }
    }

    /// Whether the multiplier is exactly zero.
    pub fn is_immune(self) -> bool {
        self.numerator == 0
    }

    /// At least 2x.
    pub fn is_super_effective(self) -> bool {
        self.numerator >= 2 * self.denominator
    }

    /// At most 1/2x (including 0x).
    pub fn is_resisted(self) -> bool {
        self.numerator * 2 <= self.denominator
    }

    /// Multiply a damage value and truncate.
    pub fn apply(self, value: u32) -> u32 {
        (u64::from(value) * u64::from(self.numerator) / u64::from(self.denominator)) as u32
    }

    /// The multiplier as a float.
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl Default for Effectiveness {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_differs_only_on_half() {
        assert_eq!(round_half_up(6144, 4096), 2);
        assert_eq!(round_half_down(6144, 4096), 1);
        assert_eq!(round_half_up(6145, 4096), 2);
        assert_eq!(round_half_down(6145, 4096), 2);
        assert_eq!(round_half_up(6143, 4096), 1);
        assert_eq!(round_half_down(6143, 4096), 1);
    }

    #[test]
    fn test_modifier_chain_rounds_up_on_half() {
        // 4096 * 6144 / 4096 is exact
        assert_eq!(Modifier::ONE.chain(Modifier::ONE_POINT_FIVE), Modifier(6144));
        // 6144 * 5325 / 4096 = 7987.5
        assert_eq!(Modifier(6144).chain(Modifier(5325)), Modifier(7988));
    }

    #[test]
    fn test_modifier_apply_rounds_down_on_half() {
        // 3 * 0.5 = 1.5
        assert_eq!(Modifier::HALF.apply(3), 1);
        // 5 * 1.5 = 7.5
        assert_eq!(Modifier::ONE_POINT_FIVE.apply(5), 7);
        assert_eq!(Modifier::ONE_POINT_FIVE.apply_floor(5), 7);
        assert_eq!(Modifier(6143).apply_floor(100), 149);
    }

    #[test]
    fn test_effectiveness_combinations() {
        let e = Effectiveness::NEUTRAL.doubled().doubled();
        assert_eq!(e.to_f64(), 4.0);
        assert!(e.is_super_effective());

        let e = Effectiveness::NEUTRAL.halved().halved();
        assert_eq!(e.to_f64(), 0.25);
        assert!(e.is_resisted());

        let e = Effectiveness::NEUTRAL.doubled().halved();
        assert_eq!(e, Effectiveness::NEUTRAL);

        let e = Effectiveness::NEUTRAL.halved().doubled();
        assert_eq!(e, Effectiveness::NEUTRAL);
    }

    #[test]
    fn test_effectiveness_apply_truncates() {
        let quarter = Effectiveness::NEUTRAL.halved().halved();
        assert_eq!(quarter.apply(7), 1);
        assert_eq!(Effectiveness::IMMUNE.apply(100), 0);
        assert!(Effectiveness::IMMUNE.is_immune());
        assert!(Effectiveness::IMMUNE.is_resisted());
    }
}
