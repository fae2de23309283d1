//! Money value object.
//!
//! Amounts are stored in the smallest currency unit (cents) so cart totals
//! stay exact. Display formatting follows the storefront's USD convention.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A non-negative USD amount in cents.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Convenience constructor for whole-dollar amounts.
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating difference; `a - b` is zero when `b >= a`.
    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Line total: unit price times quantity.
    pub const fn times(self, quantity: u32) -> Money {
        Money(self.0 * quantity as u64)
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl core::fmt::Display for Money {
    /// Formats as `$12.99`, matching the storefront's price display.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl ValueObject for Money {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dollars_and_cents() {
        assert_eq!(Money::from_cents(2999).to_string(), "$29.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn line_totals_multiply_by_quantity() {
        assert_eq!(Money::from_dollars(10).times(3), Money::from_dollars(30));
        assert_eq!(Money::from_cents(1999).times(0), Money::ZERO);
    }

    #[test]
    fn sums_over_iterators() {
        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
    }

    #[test]
    fn saturating_sub_never_underflows() {
        let discount = Money::from_cents(100).saturating_sub(Money::from_cents(300));
        assert_eq!(discount, Money::ZERO);
    }

    #[test]
    fn orders_by_amount() {
        assert!(Money::from_cents(999) < Money::from_cents(1000));
    }
}
