//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// The taxonomy is deliberately narrow: absent line ids and non-positive
/// quantities are no-ops, not errors, and corrupt persisted state is
/// recovered by falling back to defaults.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Arithmetic overflow in a money or quantity calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch between line items and pricing rules.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// An order cannot be placed from an empty cart.
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,

    /// The backing key-value store failed.
    #[error("Store error: {0}")]
    Store(#[from] bazaar_kv::StoreError),
}
