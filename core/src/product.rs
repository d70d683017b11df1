//! Catalog products.

use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// A named, priced catalog item
///
/// Products are plain values: two products with the same name and price are
/// interchangeable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product with an arbitrary name and price
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Product name for display
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.price)
    }
}

/// Fixed-price catalog entries
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductKind {
    /// Laptop, 1000
    Laptop,
    /// Phone, 500
    Phone,
    /// Tablet, 300
    Tablet,
}

impl ProductKind {
    /// Every catalog entry, in catalog order
    pub const ALL: [Self; 3] = [Self::Laptop, Self::Phone, Self::Tablet];

    /// Catalog name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Phone => "Phone",
            Self::Tablet => "Tablet",
        }
    }

    /// Catalog price
    #[must_use]
    pub const fn price(self) -> Money {
        match self {
            Self::Laptop => Money::from_units(1000),
            Self::Phone => Money::from_units(500),
            Self::Tablet => Money::from_units(300),
        }
    }

    /// Builds the product for this catalog entry
    #[must_use]
    pub fn product(self) -> Product {
        Product::new(self.name(), self.price())
    }
}

impl From<ProductKind> for Product {
    fn from(kind: ProductKind) -> Self {
        kind.product()
    }
}
