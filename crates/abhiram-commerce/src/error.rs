//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Every variant is a local, recoverable condition: the value that
/// reported it is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A price or quantity string could not be read as a whole amount.
    #[error("Invalid price: {input:?} is not a whole amount")]
    Parse { input: String },

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Product identifiers must not be empty.
    #[error("Product id must not be empty")]
    InvalidProductId,

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Search term was blank after trimming.
    #[error("Search term must not be empty")]
    EmptySearchTerm,

    /// Category slug that the catalog does not know.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Build a parse error for the given raw input.
    pub fn parse(input: impl Into<String>) -> Self {
        CommerceError::Parse {
            input: input.into(),
        }
    }
}
