//! # Order Patterns Testing
//!
//! Testing utilities and helpers for order-patterns.
//!
//! This crate provides:
//! - Fixtures for the sample catalog and order
//! - A Given-When-Then harness for order lifecycles
//! - Assertion helpers for lifecycle notices
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```
//! use order_patterns_core::{Notice, OrderStatus};
//! use order_patterns_testing::{OrderEvent, OrderTest, fixtures};
//!
//! OrderTest::new()
//!     .given_order(fixtures::sample_order())
//!     .when(OrderEvent::Cancel)
//!     .when(OrderEvent::Process)
//!     .then_status(OrderStatus::Cancelled)
//!     .then_notices(|notices| {
//!         assert_eq!(notices, [Notice::Cancelling, Notice::CannotProcessCancelled]);
//!     })
//!     .run();
//! ```

pub mod order_test;

/// Sample data shared across tests
pub mod fixtures {
    use order_patterns_core::{
        ConsoleFormatter, DiscountStrategy, InvoiceFormatter, NoDiscount, Order, OrderId,
        Product, ProductKind,
    };
    use std::sync::Arc;

    /// Laptop and Phone, 1500 in total
    #[must_use]
    pub fn sample_products() -> Vec<Product> {
        vec![ProductKind::Laptop.product(), ProductKind::Phone.product()]
    }

    /// Order #1 for Alice with the sample products, no discount, console invoice
    #[must_use]
    pub fn sample_order() -> Order {
        order_with(Arc::new(NoDiscount), Arc::new(ConsoleFormatter))
    }

    /// Order #1 for Alice with the sample products and the given collaborators
    #[must_use]
    pub fn order_with(
        discount: Arc<dyn DiscountStrategy>,
        formatter: Arc<dyn InvoiceFormatter>,
    ) -> Order {
        Order::new(OrderId::new(1), "Alice", sample_products(), discount, formatter)
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use crate::order_test::OrderEvent;
    use order_patterns_core::{
        DiscountStrategy, LoyalCustomerDiscount, Money, NoDiscount, Product, SeasonalDiscount,
    };
    use proptest::prelude::*;
    use std::sync::Arc;

    /// Products with short names and non-negative prices up to 10 000 units
    pub fn arb_product() -> impl Strategy<Value = Product> {
        ("[A-Z][a-z]{0,11}", 0_i64..=1_000_000)
            .prop_map(|(name, cents)| Product::new(name, Money::from_cents(cents)))
    }

    /// Up to 16 products, possibly none
    pub fn arb_products() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(arb_product(), 0..16)
    }

    /// One of the built-in discount strategies
    pub fn arb_discount() -> impl Strategy<Value = Arc<dyn DiscountStrategy>> {
        prop_oneof![
            Just(Arc::new(NoDiscount) as Arc<dyn DiscountStrategy>),
            Just(Arc::new(LoyalCustomerDiscount) as Arc<dyn DiscountStrategy>),
            Just(Arc::new(SeasonalDiscount) as Arc<dyn DiscountStrategy>),
        ]
    }

    /// Arbitrary sequences of lifecycle requests
    pub fn arb_events() -> impl Strategy<Value = Vec<OrderEvent>> {
        prop::collection::vec(
            prop_oneof![Just(OrderEvent::Process), Just(OrderEvent::Cancel)],
            0..8,
        )
    }
}

/// Installs a test-friendly `tracing` subscriber
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_patterns_core=debug".into()),
        )
        .try_init();
}

// Re-export commonly used items
pub use order_test::{OrderEvent, OrderTest, assertions};
