//! # Checkout Error Types
//!
//! Typed error handling for the checkout flow.
//! All fallible cart, order and payment operations return `Result<T, CheckoutError>`.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Which strategy slot an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Invoice,
    Payment,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Invoice => "invoice",
            StrategyKind::Payment => "payment",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for the checkout flow
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// An order action was invoked before its strategy was set
    #[error("No {strategy} strategy configured for order")]
    NotConfigured { strategy: StrategyKind },

    /// Negative quantity passed to the cart
    #[error("Invalid quantity: {quantity} (must be zero or greater)")]
    InvalidQuantity { quantity: i64 },

    /// Negative amount passed to a payment strategy
    #[error("Invalid amount: {amount} (must be zero or greater)")]
    InvalidAmount { amount: Decimal },

    /// Strategy name not present in a selector
    #[error("Unknown {kind} strategy: {name}")]
    UnknownStrategy { kind: StrategyKind, name: String },
}

impl CheckoutError {
    /// Every checkout error is a caller mistake; none are transient.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Short machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::NotConfigured { .. } => "not_configured",
            CheckoutError::InvalidQuantity { .. } => "invalid_quantity",
            CheckoutError::InvalidAmount { .. } => "invalid_amount",
            CheckoutError::UnknownStrategy { .. } => "unknown_strategy",
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
