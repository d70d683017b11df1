//! Configuration for the demo binary.
//!
//! Loaded from environment variables. Every variable is optional and the
//! defaults reproduce the fixed sample run: Alice, loyal-customer discount,
//! all three invoice formats.

use order_patterns_core::{
    DiscountStrategy, InvoiceFormat, LoyalCustomerDiscount, NoDiscount, SeasonalDiscount,
    UnknownFormat,
};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Invoice format selection
pub const FORMAT_VAR: &str = "ORDER_DEMO_FORMAT";
/// Discount selection
pub const DISCOUNT_VAR: &str = "ORDER_DEMO_DISCOUNT";
/// Customer name
pub const CUSTOMER_VAR: &str = "ORDER_DEMO_CUSTOMER";

/// Invalid configuration values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `ORDER_DEMO_FORMAT` names no formatter.
    #[error("ORDER_DEMO_FORMAT: {0}")]
    Format(#[from] UnknownFormat),

    /// `ORDER_DEMO_DISCOUNT` names no discount.
    #[error("ORDER_DEMO_DISCOUNT: unknown discount '{0}' (expected none, loyal or seasonal)")]
    Discount(String),

    /// `ORDER_DEMO_CUSTOMER` is blank.
    #[error("ORDER_DEMO_CUSTOMER must not be blank")]
    BlankCustomer,
}

/// Which discount the customer is eligible for
///
/// Eligibility is decided here, at composition time; the strategies
/// themselves never look at the customer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiscountKind {
    /// [`NoDiscount`]
    None,
    /// [`LoyalCustomerDiscount`]
    Loyal,
    /// [`SeasonalDiscount`]
    Seasonal,
}

impl DiscountKind {
    /// Strategy implementing this discount
    #[must_use]
    pub fn strategy(self) -> Arc<dyn DiscountStrategy> {
        match self {
            Self::None => Arc::new(NoDiscount),
            Self::Loyal => Arc::new(LoyalCustomerDiscount),
            Self::Seasonal => Arc::new(SeasonalDiscount),
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Loyal => write!(f, "loyal"),
            Self::Seasonal => write!(f, "seasonal"),
        }
    }
}

impl FromStr for DiscountKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "loyal" | "loyal-customer" => Ok(Self::Loyal),
            "seasonal" => Ok(Self::Seasonal),
            _ => Err(ConfigError::Discount(s.to_string())),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Customer placing the sample order
    pub customer: String,
    /// Discount the customer receives
    pub discount: DiscountKind,
    /// Invoice formats to render, in order
    pub formats: Vec<InvoiceFormat>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            customer: "Alice".to_string(),
            discount: DiscountKind::Loyal,
            formats: InvoiceFormat::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognised value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let customer = match lookup(CUSTOMER_VAR) {
            Some(name) if name.trim().is_empty() => return Err(ConfigError::BlankCustomer),
            Some(name) => name.trim().to_string(),
            None => defaults.customer,
        };

        let discount = lookup(DISCOUNT_VAR)
            .map(|value| value.parse::<DiscountKind>())
            .transpose()?
            .unwrap_or(defaults.discount);

        let formats = match lookup(FORMAT_VAR) {
            Some(value) if value.trim().eq_ignore_ascii_case("all") => defaults.formats,
            Some(value) => vec![value.parse::<InvoiceFormat>()?],
            None => defaults.formats,
        };

        Ok(Self {
            customer,
            discount,
            formats,
        })
    }
}
