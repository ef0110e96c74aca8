//! Fixed-point money representation.
//!
//! All amounts are carried as integer quarter-units: `4Q = 1` display
//! currency unit. Half-gun splits and three-way self-draw payments always
//! land on whole quarters, so repeated aggregation never accumulates
//! floating-point drift. Conversion to a decimal display value happens only
//! at the very edge.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Quarter-units per display-currency unit.
pub const QUARTERS_PER_UNIT: i64 = 4;

/// An amount of money in quarter-units.
///
/// ```
/// use mahjong_ledger::core::Quarters;
///
/// let q = Quarters::new(9);
/// assert_eq!(q.to_display(), 2.25);
/// assert_eq!(q.to_string(), "2.25");
/// assert_eq!(Quarters::from_display(-1.5), Some(Quarters::new(-6)));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quarters(pub i64);

impl Quarters {
    /// Zero movement.
    pub const ZERO: Quarters = Quarters(0);

    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw quarter count.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Convert to display-currency units.
    #[must_use]
    pub fn to_display(self) -> f64 {
        self.0 as f64 / QUARTERS_PER_UNIT as f64
    }

    /// Convert a display-currency amount, rounding to the nearest quarter.
    ///
    /// Returns `None` for non-finite input or values outside the `i64` range.
    #[must_use]
    pub fn from_display(amount: f64) -> Option<Self> {
        let scaled = (amount * QUARTERS_PER_UNIT as f64).round();
        if scaled.is_finite() && scaled >= i64::MIN as f64 && scaled < i64::MAX as f64 {
            Some(Self(scaled as i64))
        } else {
            None
        }
    }

    #[must_use]
    pub fn checked_add(self, rhs: Quarters) -> Option<Quarters> {
        self.0.checked_add(rhs.0).map(Quarters)
    }

    #[must_use]
    pub fn checked_sub(self, rhs: Quarters) -> Option<Quarters> {
        self.0.checked_sub(rhs.0).map(Quarters)
    }

    #[must_use]
    pub fn checked_mul(self, factor: i64) -> Option<Quarters> {
        self.0.checked_mul(factor).map(Quarters)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Quarters {
    type Output = Quarters;

    fn add(self, rhs: Quarters) -> Quarters {
        Quarters(self.0 + rhs.0)
    }
}

impl AddAssign for Quarters {
    fn add_assign(&mut self, rhs: Quarters) {
        self.0 += rhs.0;
    }
}

impl Sub for Quarters {
    type Output = Quarters;

    fn sub(self, rhs: Quarters) -> Quarters {
        Quarters(self.0 - rhs.0)
    }
}

impl SubAssign for Quarters {
    fn sub_assign(&mut self, rhs: Quarters) {
        self.0 -= rhs.0;
    }
}

impl Neg for Quarters {
    type Output = Quarters;

    fn neg(self) -> Quarters {
        Quarters(-self.0)
    }
}

impl Mul<i64> for Quarters {
    type Output = Quarters;

    fn mul(self, rhs: i64) -> Quarters {
        Quarters(self.0 * rhs)
    }
}

impl Sum for Quarters {
    fn sum<I: Iterator<Item = Quarters>>(iter: I) -> Quarters {
        iter.fold(Quarters::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Quarters> for Quarters {
    fn sum<I: Iterator<Item = &'a Quarters>>(iter: I) -> Quarters {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Quarters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = abs / QUARTERS_PER_UNIT as u64;
        match abs % QUARTERS_PER_UNIT as u64 {
            0 => write!(f, "{sign}{whole}"),
            1 => write!(f, "{sign}{whole}.25"),
            2 => write!(f, "{sign}{whole}.5"),
            _ => write!(f, "{sign}{whole}.75"),
        }
    }
}
