//! Error types for invoice rendering.
//!
//! Lifecycle requests never fail: refused transitions are reported through
//! [`Notice`](crate::state::Notice) values instead.

use thiserror::Error;

/// Result type alias for invoice rendering.
pub type Result<T> = std::result::Result<T, InvoiceError>;

/// Failures raised by an invoice formatter.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The invoice could not be serialized.
    #[error("Failed to serialize invoice: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing into the output buffer failed.
    #[error("Failed to write invoice: {0}")]
    Write(#[from] std::fmt::Error),
}

/// An invoice format name that matches no formatter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown invoice format '{0}' (expected console, html or json)")]
pub struct UnknownFormat(pub String);
