//! The order aggregate.

use crate::discount::{DiscountManager, DiscountStrategy};
use crate::error::Result;
use crate::invoice::{Invoice, InvoiceFormatter};
use crate::money::Money;
use crate::pricing::PriceCalculator;
use crate::product::Product;
use crate::state::{Notice, OrderState, OrderStatus};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Unique identifier for an order
///
/// Uniqueness is not enforced anywhere; callers pick the ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Creates a new `OrderId`
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One customer purchase and its lifecycle
///
/// The product list is fixed at construction. Pricing, discount and invoice
/// collaborators are injected and cannot be swapped afterwards; build a new
/// order to change them. The only mutable part is the lifecycle state.
#[derive(Clone, Debug)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    products: Vec<Product>,
    state: &'static dyn OrderState,
    price_calculator: PriceCalculator,
    discount: DiscountManager,
    formatter: Arc<dyn InvoiceFormatter>,
}

impl Order {
    /// Creates a new order in the `New` state
    #[must_use]
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        products: Vec<Product>,
        discount: Arc<dyn DiscountStrategy>,
        formatter: Arc<dyn InvoiceFormatter>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            products,
            state: OrderStatus::New.handler(),
            price_calculator: PriceCalculator::new(),
            discount: DiscountManager::new(discount),
            formatter,
        }
    }

    /// Order identifier
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Customer who placed the order
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Ordered products, in order
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current lifecycle status
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.state.status()
    }

    /// Sum of product prices before discount
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.price_calculator.calculate(&self.products)
    }

    /// Discount-applied total
    ///
    /// Recomputed on every call; the result does not depend on the
    /// lifecycle state.
    #[must_use]
    pub fn total_price(&self) -> Money {
        let subtotal = self.subtotal();
        let total = self.discount.apply(subtotal);
        tracing::debug!(
            order_id = %self.id,
            %subtotal,
            %total,
            discount = self.discount.strategy_name(),
            "Computed order total"
        );
        total
    }

    /// Requests processing; refused unless the order is `New`
    pub fn process(&mut self) -> Notice {
        let state = self.state;
        state.process(self)
    }

    /// Requests cancellation; refused unless the order is `New`
    pub fn cancel(&mut self) -> Notice {
        let state = self.state;
        state.cancel(self)
    }

    /// Snapshot handed to invoice formatters
    #[must_use]
    pub fn invoice(&self) -> Invoice {
        Invoice {
            order_id: self.id,
            customer: self.customer_name.clone(),
            products: self.products.clone(),
            total_price: self.total_price(),
        }
    }

    /// Renders the invoice with the bound formatter
    ///
    /// # Errors
    ///
    /// Returns an error if the formatter fails to render.
    pub fn render_invoice(&self) -> Result<String> {
        self.formatter.format(&self.invoice())
    }

    /// Rebinds the lifecycle state; called by `OrderState` handlers only
    pub(crate) fn transition_to(&mut self, state: &'static dyn OrderState) {
        self.state = state;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::discount::{LoyalCustomerDiscount, NoDiscount, SeasonalDiscount};
    use crate::invoice::{ConsoleFormatter, JsonFormatter};
    use crate::product::ProductKind;

    fn order(discount: Arc<dyn DiscountStrategy>) -> Order {
        Order::new(
            OrderId::new(1),
            "Alice",
            vec![ProductKind::Laptop.product(), ProductKind::Phone.product()],
            discount,
            Arc::new(ConsoleFormatter),
        )
    }

    #[test]
    fn new_order_starts_new() {
        let order = order(Arc::new(NoDiscount));
        assert_eq!(order.status(), OrderStatus::New);
        assert_eq!(order.id(), OrderId::new(1));
        assert_eq!(order.customer_name(), "Alice");
        assert_eq!(order.products().len(), 2);
    }

    #[test]
    fn total_without_discount_is_subtotal() {
        let order = order(Arc::new(NoDiscount));
        assert_eq!(order.subtotal(), Money::from_units(1500));
        assert_eq!(order.total_price(), Money::from_units(1500));
    }

    #[test]
    fn total_applies_bound_discount() {
        assert_eq!(
            order(Arc::new(LoyalCustomerDiscount)).total_price(),
            Money::from_units(1350)
        );
        assert_eq!(order(Arc::new(SeasonalDiscount)).total_price(), Money::from_units(1275));
    }

    #[test]
    fn discounted_total_near_the_cent_limit() {
        let order = Order::new(
            OrderId::new(2),
            "Alice",
            vec![crate::product::Product::new(
                "Mainframe",
                Money::from_cents(i64::MAX / 50),
            )],
            Arc::new(LoyalCustomerDiscount),
            Arc::new(ConsoleFormatter),
        );
        assert_eq!(order.subtotal(), Money::from_cents(i64::MAX / 50));
        assert_eq!(order.total_price(), Money::from_cents(166_020_696_663_385_964));
    }

    #[test]
    fn process_then_process_again() {
        let mut order = order(Arc::new(NoDiscount));
        assert_eq!(order.process(), Notice::Processing);
        assert_eq!(order.status(), OrderStatus::Processed);
        assert_eq!(order.process(), Notice::AlreadyProcessed);
        assert_eq!(order.status(), OrderStatus::Processed);
    }

    #[test]
    fn cancel_then_process() {
        let mut order = order(Arc::new(NoDiscount));
        assert_eq!(order.cancel(), Notice::Cancelling);
        assert_eq!(order.status(), OrderStatus::Cancelled);
        assert_eq!(order.process(), Notice::CannotProcessCancelled);
        assert_eq!(order.cancel(), Notice::AlreadyCancelled);
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn processed_order_cannot_be_cancelled() {
        let mut order = order(Arc::new(NoDiscount));
        order.process();
        assert_eq!(order.cancel(), Notice::CannotCancelProcessed);
        assert_eq!(order.status(), OrderStatus::Processed);
    }

    #[test]
    fn invoice_snapshot_uses_discounted_total() {
        let invoice = order(Arc::new(LoyalCustomerDiscount)).invoice();
        assert_eq!(invoice.order_id, OrderId::new(1));
        assert_eq!(invoice.customer, "Alice");
        assert_eq!(invoice.total_price, Money::from_units(1350));
    }

    #[test]
    fn render_uses_bound_formatter() {
        let order = Order::new(
            OrderId::new(7),
            "Bob",
            vec![ProductKind::Tablet.product()],
            Arc::new(NoDiscount),
            Arc::new(JsonFormatter),
        );
        let json = order.render_invoice().unwrap();
        assert!(json.contains("\"OrderId\": 7"));
        assert!(json.contains("\"TotalPrice\": 300"));
    }

    #[test]
    fn clones_do_not_share_state() {
        let original = order(Arc::new(NoDiscount));
        let mut copy = original.clone();
        copy.cancel();
        assert_eq!(original.status(), OrderStatus::New);
        assert_eq!(copy.status(), OrderStatus::Cancelled);
    }
}
