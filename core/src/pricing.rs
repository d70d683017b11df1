//! Subtotal calculation.

use crate::money::Money;
use crate::product::Product;

/// Sums product prices
///
/// Stateless; an empty product list sums to zero and negative prices are
/// summed like any other.
#[derive(Copy, Clone, Debug, Default)]
pub struct PriceCalculator;

impl PriceCalculator {
    /// Creates a new price calculator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sum of `price` over all products
    #[must_use]
    pub fn calculate(&self, products: &[Product]) -> Money {
        products.iter().map(Product::price).sum()
    }
}
