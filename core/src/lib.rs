//! # Order Patterns Core
//!
//! An order entity composed from small, swappable collaborators.
//!
//! ## Core Concepts
//!
//! - **Product**: a named, priced catalog item
//! - **`PriceCalculator`**: sums product prices
//! - **`DiscountStrategy`**: pure price transform, chosen by the caller
//! - **`OrderStatus`**: lifecycle status, advanced only by `process`/`cancel`
//! - **`InvoiceFormatter`**: renders an order snapshot to text
//! - **Order**: aggregates all of the above
//!
//! ## Example
//!
//! ```
//! use order_patterns_core::{
//!     JsonFormatter, LoyalCustomerDiscount, Money, Notice, Order, OrderId, OrderStatus,
//!     ProductKind,
//! };
//! use std::sync::Arc;
//!
//! let mut order = Order::new(
//!     OrderId::new(1),
//!     "Alice",
//!     vec![ProductKind::Laptop.product(), ProductKind::Phone.product()],
//!     Arc::new(LoyalCustomerDiscount),
//!     Arc::new(JsonFormatter),
//! );
//!
//! assert_eq!(order.total_price(), Money::from_units(1350));
//! assert_eq!(order.process(), Notice::Processing);
//! assert_eq!(order.cancel(), Notice::CannotCancelProcessed);
//! assert_eq!(order.status(), OrderStatus::Processed);
//!
//! let invoice = order.render_invoice()?;
//! assert!(invoice.contains("\"TotalPrice\": 1350"));
//! # Ok::<(), order_patterns_core::InvoiceError>(())
//! ```

pub mod discount;
pub mod error;
pub mod invoice;
pub mod money;
pub mod order;
pub mod pricing;
pub mod product;
pub mod state;

// Re-export commonly used types
pub use discount::{
    DiscountManager, DiscountStrategy, LoyalCustomerDiscount, NoDiscount, SeasonalDiscount,
};
pub use error::{InvoiceError, UnknownFormat};
pub use invoice::{
    ConsoleFormatter, HtmlFormatter, Invoice, InvoiceFormat, InvoiceFormatter, JsonFormatter,
};
pub use money::Money;
pub use order::{Order, OrderId};
pub use pricing::PriceCalculator;
pub use product::{Product, ProductKind};
pub use state::{Notice, OrderStatus};
