//! Discount policies.
//!
//! A [`DiscountStrategy`] is a pure price transform. It knows nothing about
//! the customer: deciding which strategy a customer is eligible for is the
//! caller's job, done once when the order is composed.

use crate::money::Money;
use std::fmt;
use std::sync::Arc;

/// Maps an order total to the discounted total
pub trait DiscountStrategy: fmt::Debug + Send + Sync {
    /// Applies the discount to `total`
    fn apply(&self, total: Money) -> Money;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Identity discount
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply(&self, total: Money) -> Money {
        total
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// 10% off for loyal customers
#[derive(Copy, Clone, Debug, Default)]
pub struct LoyalCustomerDiscount;

impl LoyalCustomerDiscount {
    /// Percentage of the total the customer pays
    pub const KEPT_PERCENT: i64 = 90;
}

impl DiscountStrategy for LoyalCustomerDiscount {
    fn apply(&self, total: Money) -> Money {
        total.percent(Self::KEPT_PERCENT)
    }

    fn name(&self) -> &'static str {
        "loyal-customer"
    }
}

/// 15% seasonal sale
#[derive(Copy, Clone, Debug, Default)]
pub struct SeasonalDiscount;

impl SeasonalDiscount {
    /// Percentage of the total the customer pays
    pub const KEPT_PERCENT: i64 = 85;
}

impl DiscountStrategy for SeasonalDiscount {
    fn apply(&self, total: Money) -> Money {
        total.percent(Self::KEPT_PERCENT)
    }

    fn name(&self) -> &'static str {
        "seasonal"
    }
}

/// Stable handle the order holds onto for its discount policy
#[derive(Clone, Debug)]
pub struct DiscountManager {
    strategy: Arc<dyn DiscountStrategy>,
}

impl DiscountManager {
    /// Wraps a discount strategy
    #[must_use]
    pub fn new(strategy: Arc<dyn DiscountStrategy>) -> Self {
        Self { strategy }
    }

    /// Delegates to the bound strategy
    #[must_use]
    pub fn apply(&self, total: Money) -> Money {
        self.strategy.apply(total)
    }

    /// Name of the bound strategy
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}
