//! # Strategy Traits
//!
//! Invoice generation and payment are both Strategy-pattern seams: an
//! [`Order`] holds one of each and delegates to whichever is set.
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │   InvoiceStrategy (trait)    │   │   PaymentStrategy (trait)    │
//! │  ├── format()                │   │  ├── method()                │
//! │  └── generate(&Order)        │   │  └── pay(&Price)             │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!          ▲          ▲                   ▲          ▲          ▲
//!   ┌──────┴───┐ ┌────┴─────┐   ┌─────────┴──┐ ┌─────┴────┐ ┌───┴──────────┐
//!   │PdfInvoice│ │TextInvoice│  │ CreditCard │ │  Paypal  │ │CashOnDelivery│
//!   └──────────┘ └──────────┘   └────────────┘ └──────────┘ └──────────────┘
//! ```

use crate::error::{CheckoutError, CheckoutResult, StrategyKind};
use crate::invoice::{InvoiceFormat, InvoiceRecord};
use crate::item::Price;
use crate::order::Order;
use crate::payment::{PaymentMethod, PaymentReceipt};
use std::collections::HashMap;
use std::sync::Arc;

/// Produces an invoice record for an order.
pub trait InvoiceStrategy: Send + Sync + std::fmt::Debug {
    /// Format tag carried by every record this strategy produces
    fn format(&self) -> InvoiceFormat;

    /// Build the invoice record for `order`.
    fn generate(&self, order: &Order) -> InvoiceRecord;

    /// Registry name (defaults to the format tag)
    fn name(&self) -> &'static str {
        self.format().as_str()
    }
}

/// Settles an amount and returns a receipt.
pub trait PaymentStrategy: Send + Sync + std::fmt::Debug {
    /// Method tag carried by every receipt this strategy produces
    fn method(&self) -> PaymentMethod;

    /// Charge `amount`.
    ///
    /// # Errors
    /// `CheckoutError::InvalidAmount` when `amount` is negative.
    fn pay(&self, amount: &Price) -> CheckoutResult<PaymentReceipt>;

    /// Registry name (defaults to the method tag)
    fn name(&self) -> &'static str {
        self.method().as_str()
    }
}

/// Shared invoice strategy (dynamic dispatch)
pub type BoxedInvoiceStrategy = Arc<dyn InvoiceStrategy>;

/// Shared payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// A strategy object that can be registered by name in a [`StrategySelector`].
pub trait NamedStrategy {
    const KIND: StrategyKind;

    fn strategy_name(&self) -> &'static str;
}

impl NamedStrategy for dyn InvoiceStrategy {
    const KIND: StrategyKind = StrategyKind::Invoice;

    fn strategy_name(&self) -> &'static str {
        self.name()
    }
}

impl NamedStrategy for dyn PaymentStrategy {
    const KIND: StrategyKind = StrategyKind::Payment;

    fn strategy_name(&self) -> &'static str {
        self.name()
    }
}

/// Named registry of strategies
pub struct StrategySelector<S: ?Sized> {
    strategies: HashMap<&'static str, Arc<S>>,
}

pub type InvoiceStrategySelector = StrategySelector<dyn InvoiceStrategy>;
pub type PaymentStrategySelector = StrategySelector<dyn PaymentStrategy>;

impl<S: NamedStrategy + ?Sized> StrategySelector<S> {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Register a strategy under its own name, replacing any previous one
    pub fn register(&mut self, strategy: Arc<S>) {
        self.strategies.insert(strategy.strategy_name(), strategy);
    }

    /// Register with builder pattern
    pub fn with_strategy(mut self, strategy: Arc<S>) -> Self {
        self.register(strategy);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<S>> {
        self.strategies.get(name)
    }

    /// Look up a strategy by name without falling back.
    pub fn require(&self, name: &str) -> CheckoutResult<Arc<S>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| CheckoutError::UnknownStrategy {
                kind: S::KIND,
                name: name.to_string(),
            })
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn has(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }
}

impl<S: NamedStrategy + ?Sized> Default for StrategySelector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Clone for StrategySelector<S> {
    fn clone(&self) -> Self {
        Self {
            strategies: self.strategies.clone(),
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for StrategySelector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&&str> = self.strategies.keys().collect();
        names.sort_unstable();
        f.debug_struct("StrategySelector")
            .field("strategies", &names)
            .finish()
    }
}
