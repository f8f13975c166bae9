//! Monetary amounts in Egyptian pounds.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// An amount of money in whole Egyptian pounds.
///
/// The store prices everything in whole EGP, so the amount is a plain
/// non-negative integer - no fractional piastres anywhere in the flow.
/// Subtraction saturates at zero rather than going negative.
///
/// ## Examples
///
/// ```
/// use morshd_core::Money;
///
/// let price = Money::new(1200);
/// let line = price * 2;
/// assert_eq!(line.amount(), 2400);
/// assert_eq!((Money::new(100) - Money::new(250)).amount(), 0);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero pounds.
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole pounds.
    #[must_use]
    pub const fn new(pounds: u64) -> Self {
        Self(pounds)
    }

    /// The amount in whole pounds.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Subtract, stopping at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl core::ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * u64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Money {
    fn from(pounds: u64) -> Self {
        Self(pounds)
    }
}

impl From<Money> for u64 {
    fn from(money: Money) -> Self {
        money.0
    }
}
