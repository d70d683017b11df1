//! # Order Demo
//!
//! Composition root for the order patterns: picks the discount the customer
//! is eligible for and the invoice formats, builds one order with fixed sample
//! data, then drives it through a fixed sequence of calls.
//!
//! The naive order it replaces lives in [`legacy`] and runs alongside for
//! comparison.

pub mod config;
pub mod legacy;

use anyhow::Context;
use config::DemoConfig;
use order_patterns_core::{InvoiceFormat, Notice, Order, OrderId, OrderStatus, ProductKind};
use std::io::Write;
use tracing::info;

/// Order id used by the sample run
pub const SAMPLE_ORDER_ID: OrderId = OrderId::new(1);

/// What the sample run observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Notice from the `process` request
    pub processed: Notice,
    /// Notice from the follow-up `cancel` request
    pub cancelled: Notice,
    /// Status after both requests
    pub final_status: OrderStatus,
}

/// Builds the sample order: Laptop and Phone for the configured customer
#[must_use]
pub fn sample_order(config: &DemoConfig, format: InvoiceFormat) -> Order {
    Order::new(
        SAMPLE_ORDER_ID,
        config.customer.as_str(),
        vec![ProductKind::Laptop.product(), ProductKind::Phone.product()],
        config.discount.strategy(),
        format.formatter(),
    )
}

/// Runs the sample sequence, writing invoices and notices to `out`
///
/// For each configured format an order is built, its total and invoice are
/// written, then it is processed and a cancellation is attempted.
///
/// # Errors
///
/// Returns an error if an invoice fails to render or `out` cannot be written.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<Vec<RunReport>> {
    let mut reports = Vec::with_capacity(config.formats.len());

    for &format in &config.formats {
        let mut order = sample_order(config, format);
        info!(
            order_id = %order.id(),
            customer = order.customer_name(),
            discount = %config.discount,
            %format,
            "Built sample order"
        );

        writeln!(out, "=== {format} invoice ===")?;
        writeln!(out, "Subtotal: {}", order.subtotal())?;
        writeln!(out, "Total: {}", order.total_price())?;

        let invoice = order
            .render_invoice()
            .with_context(|| format!("failed to render {format} invoice"))?;
        writeln!(out, "{}", invoice.trim_end())?;

        let processed = order.process();
        writeln!(out, "process: {processed}")?;
        let cancelled = order.cancel();
        writeln!(out, "cancel: {cancelled}")?;
        writeln!(out, "status: {}", order.status())?;
        writeln!(out)?;

        reports.push(RunReport {
            processed,
            cancelled,
            final_status: order.status(),
        });
    }

    Ok(reports)
}
