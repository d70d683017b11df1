//! Monetary amounts.
//!
//! Amounts are stored as integer cents to avoid floating point drift when
//! summing and discounting. Negative amounts are representable; nothing in
//! the pricing pipeline rejects them.

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Money amount in cents
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a new money amount from cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates a new money amount from whole currency units (converted to cents)
    ///
    /// Saturates at the bounds of the cent range.
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the value in cents
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in currency units (as floating point)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // i64 to f64 precision loss is acceptable for display
    pub fn units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `true` when the amount has no fractional cents part
    #[must_use]
    pub const fn is_whole(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Keeps `percent` percent of this amount, truncating towards zero
    ///
    /// `Money::from_units(1500).percent(90)` is `Money::from_units(1350)`.
    /// Results outside the cent range saturate.
    #[must_use]
    pub fn percent(&self, percent: i64) -> Self {
        let kept = i128::from(self.0) * i128::from(percent) / 100;
        Self(i64::try_from(kept).unwrap_or(if kept < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl Add for Money {
    type Output = Self;

    // Saturates at the bounds of the cent range
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.units())
    }
}

// Whole amounts serialize as JSON integers so invoices read `1350`, not `1350.0`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.units())
        }
    }
}
