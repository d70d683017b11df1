//! Invoice rendering.
//!
//! Formatters turn an [`Invoice`] snapshot into text and return it. None of
//! them writes to a console or any other sink; the caller decides where the
//! rendered invoice goes.

use crate::error::{Result, UnknownFormat};
use crate::money::Money;
use crate::order::OrderId;
use crate::product::Product;
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

/// Everything a formatter may show about an order
///
/// `total_price` is the discounted total at the time the snapshot was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
    /// Order identifier
    pub order_id: OrderId,
    /// Customer name
    pub customer: String,
    /// Ordered products
    pub products: Vec<Product>,
    /// Discount-applied total
    pub total_price: Money,
}

/// Renders an invoice into a textual representation
pub trait InvoiceFormatter: fmt::Debug + Send + Sync {
    /// Renders the invoice
    ///
    /// # Errors
    ///
    /// Returns an error if the representation cannot be produced.
    fn format(&self, invoice: &Invoice) -> Result<String>;

    /// MIME type of the rendered output
    fn content_type(&self) -> &'static str;
}

/// Line-oriented plain text
#[derive(Copy, Clone, Debug, Default)]
pub struct ConsoleFormatter;

impl InvoiceFormatter for ConsoleFormatter {
    fn format(&self, invoice: &Invoice) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Invoice for Order #{}", invoice.order_id)?;
        writeln!(out, "Customer: {}", invoice.customer)?;
        writeln!(out, "Products:")?;
        for product in &invoice.products {
            writeln!(out, "  - {product}")?;
        }
        writeln!(out, "Total Price: {}", invoice.total_price)?;
        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "text/plain"
    }
}

/// Minimal HTML fragment built around an unordered list
#[derive(Copy, Clone, Debug, Default)]
pub struct HtmlFormatter;

impl InvoiceFormatter for HtmlFormatter {
    fn format(&self, invoice: &Invoice) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "<div class=\"invoice\">")?;
        writeln!(out, "  <h1>Invoice for Order #{}</h1>", invoice.order_id)?;
        writeln!(out, "  <p>Customer: {}</p>", escape_html(&invoice.customer))?;
        writeln!(out, "  <ul>")?;
        for product in &invoice.products {
            writeln!(
                out,
                "    <li>{}: {}</li>",
                escape_html(product.name()),
                product.price()
            )?;
        }
        writeln!(out, "  </ul>")?;
        writeln!(out, "  <p>Total Price: {}</p>", invoice.total_price)?;
        writeln!(out, "</div>")?;
        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "text/html"
    }
}

/// Pretty-printed JSON
///
/// ```json
/// { "OrderId": 1, "Customer": "Alice", "Products": [{ "Name": "Laptop", "Price": 1000 }], "TotalPrice": 900 }
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonFormatter;

impl InvoiceFormatter for JsonFormatter {
    fn format(&self, invoice: &Invoice) -> Result<String> {
        Ok(serde_json::to_string_pretty(invoice)?)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The built-in formatters, selectable by name
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvoiceFormat {
    /// [`ConsoleFormatter`]
    Console,
    /// [`HtmlFormatter`]
    Html,
    /// [`JsonFormatter`]
    Json,
}

impl InvoiceFormat {
    /// Every built-in format
    pub const ALL: [Self; 3] = [Self::Console, Self::Html, Self::Json];

    /// Formatter for this format
    #[must_use]
    pub fn formatter(self) -> Arc<dyn InvoiceFormatter> {
        match self {
            Self::Console => Arc::new(ConsoleFormatter),
            Self::Html => Arc::new(HtmlFormatter),
            Self::Json => Arc::new(JsonFormatter),
        }
    }
}

impl fmt::Display for InvoiceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for InvoiceFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" | "text" => Ok(Self::Console),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
