//! The naive order this workspace started from, kept for comparison.
//!
//! Every flaw below is deliberate and pinned by a test:
//!
//! - status is a free-form string compared by equality
//! - the loyal-customer discount is hardcoded to one customer name
//! - the total is computed once, at construction, and goes stale
//! - `print_invoice` writes straight to stdout
//! - a processed order can still be cancelled
//!
//! `order_patterns_core::Order` is the refactored version.

#![allow(clippy::float_cmp)] // Mirrors the naive arithmetic on purpose

use tracing::warn;

/// A product as the naive order stores it
#[derive(Clone, Debug, PartialEq)]
pub struct LegacyProduct {
    /// Product name
    pub name: String,
    /// Price as a float
    pub price: f64,
}

impl LegacyProduct {
    /// Creates a product
    #[must_use]
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
        }
    }
}

/// The naive order
#[derive(Clone, Debug)]
pub struct LegacyOrder {
    /// Order identifier
    pub id: u64,
    /// Customer name
    pub customer_name: String,
    /// Ordered products
    pub products: Vec<LegacyProduct>,
    /// "New", "Processed" or "Cancelled", by convention only
    pub status: String,
    /// Cached at construction
    pub total_price: f64,
}

impl LegacyOrder {
    /// Creates an order and computes its total once
    #[must_use]
    pub fn new(id: u64, customer_name: &str, products: Vec<LegacyProduct>) -> Self {
        let total_price: f64 = products.iter().map(|p| p.price).sum();
        Self {
            id,
            customer_name: customer_name.to_string(),
            products,
            status: "New".to_string(),
            total_price,
        }
    }

    /// Adds a product without touching the cached total
    pub fn add_product(&mut self, product: LegacyProduct) {
        self.products.push(product);
    }

    /// Discounted total, with eligibility decided by customer name
    #[must_use]
    pub fn apply_discount(&self) -> f64 {
        if self.customer_name == "Alice" {
            self.total_price * 0.9
        } else {
            self.total_price
        }
    }

    /// Processes the order if its status string reads "New"
    pub fn process(&mut self) {
        if self.status == "New" {
            println!("Processing order {}", self.id);
            self.status = "Processed".to_string();
        } else if self.status == "Processed" {
            println!("Order {} is already processed", self.id);
        } else {
            println!("Cannot process order {} with status {}", self.id, self.status);
        }
    }

    /// Cancels the order unless it is already cancelled
    pub fn cancel(&mut self) {
        if self.status == "Cancelled" {
            println!("Order {} is already cancelled", self.id);
        } else {
            println!("Cancelling order {}", self.id);
            self.status = "Cancelled".to_string();
        }
    }

    /// Prints the invoice to stdout
    pub fn print_invoice(&self) {
        println!("Invoice for Order #{}", self.id);
        println!("Customer: {}", self.customer_name);
        for product in &self.products {
            println!("  - {}: {}", product.name, product.price);
        }
        println!("Total Price: {}", self.apply_discount());
    }
}

/// Runs the naive order through the sample sequence
///
/// Returns the final order so callers can inspect how it went wrong.
#[must_use]
pub fn sample_run() -> LegacyOrder {
    let mut order = LegacyOrder::new(
        1,
        "Alice",
        vec![
            LegacyProduct::new("Laptop", 1000.0),
            LegacyProduct::new("Phone", 500.0),
        ],
    );
    order.add_product(LegacyProduct::new("Tablet", 300.0));
    order.print_invoice();
    order.process();
    order.cancel();

    if order.status == "Cancelled" {
        warn!(order_id = order.id, "Legacy order cancelled after processing");
    }
    order
}
