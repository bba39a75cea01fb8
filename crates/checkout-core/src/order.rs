//! # Order
//!
//! An order binds a customer to a cart and carries the invoice and payment
//! strategies chosen for it. Totals are read from the cart on every call.

use crate::cart::ShoppingCart;
use crate::customer::Customer;
use crate::error::{CheckoutError, CheckoutResult, StrategyKind};
use crate::invoice::InvoiceRecord;
use crate::item::{Item, Price};
use crate::payment::PaymentReceipt;
use crate::strategy::{BoxedInvoiceStrategy, BoxedPaymentStrategy};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// Unique order identifier, assigned at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer order
///
/// There is no phase tracking: invoices and payments may be produced in any
/// order and any number of times.
pub struct Order {
    id: OrderId,
    customer: Arc<Customer>,
    cart: ShoppingCart,
    invoice_strategy: Option<BoxedInvoiceStrategy>,
    payment_strategy: Option<BoxedPaymentStrategy>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with generated ID and no strategies
    pub fn new(customer: Arc<Customer>, cart: ShoppingCart) -> Self {
        Self {
            id: OrderId::new(),
            customer,
            cart,
            invoice_strategy: None,
            payment_strategy: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Mutable access to the cart; later totals reflect any change.
    pub fn cart_mut(&mut self) -> &mut ShoppingCart {
        &mut self.cart
    }

    pub fn items(&self) -> &[Arc<Item>] {
        self.cart.items()
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the invoice strategy. Last call wins.
    pub fn set_invoice_strategy(&mut self, strategy: BoxedInvoiceStrategy) {
        self.invoice_strategy = Some(strategy);
    }

    /// Replace the payment strategy. Last call wins.
    pub fn set_payment_strategy(&mut self, strategy: BoxedPaymentStrategy) {
        self.payment_strategy = Some(strategy);
    }

    pub fn with_invoice_strategy(mut self, strategy: BoxedInvoiceStrategy) -> Self {
        self.set_invoice_strategy(strategy);
        self
    }

    pub fn with_payment_strategy(mut self, strategy: BoxedPaymentStrategy) -> Self {
        self.set_payment_strategy(strategy);
        self
    }

    pub fn invoice_strategy(&self) -> Option<&BoxedInvoiceStrategy> {
        self.invoice_strategy.as_ref()
    }

    pub fn payment_strategy(&self) -> Option<&BoxedPaymentStrategy> {
        self.payment_strategy.as_ref()
    }

    /// Generate an invoice with the configured strategy.
    ///
    /// # Errors
    /// `CheckoutError::NotConfigured` if no invoice strategy is set.
    #[instrument(skip(self), fields(order_id = %self.id))]
    pub fn generate_invoice(&self) -> CheckoutResult<InvoiceRecord> {
        let strategy = self
            .invoice_strategy
            .as_ref()
            .ok_or(CheckoutError::NotConfigured {
                strategy: StrategyKind::Invoice,
            })?;

        Ok(strategy.generate(self))
    }

    /// Pay the current total with the configured strategy.
    ///
    /// # Errors
    /// `CheckoutError::NotConfigured` if no payment strategy is set, or
    /// whatever the strategy itself rejects.
    #[instrument(skip(self), fields(order_id = %self.id))]
    pub fn pay_invoice(&self) -> CheckoutResult<PaymentReceipt> {
        let strategy = self
            .payment_strategy
            .as_ref()
            .ok_or(CheckoutError::NotConfigured {
                strategy: StrategyKind::Payment,
            })?;

        strategy.pay(&self.total_price())
    }
}

impl std::fmt::Debug for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("customer", &self.customer)
            .field("cart", &self.cart)
            .field(
                "invoice_strategy",
                &self.invoice_strategy.as_ref().map(|s| s.name()),
            )
            .field(
                "payment_strategy",
                &self.payment_strategy.as_ref().map(|s| s.name()),
            )
            .field("created_at", &self.created_at)
            .finish()
    }
}
