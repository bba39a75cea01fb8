//! # checkout-core
//!
//! Cart, order and strategy types for the strategy-checkout demo.
//!
//! This crate provides:
//! - `Item`, `Price` and `ShoppingCart` for accumulating a purchase
//! - `Customer` and `Order` for binding a purchase to a buyer
//! - `InvoiceStrategy` with `PdfInvoice` and `TextInvoice`
//! - `PaymentStrategy` with `CreditCardPayment`, `PaypalPayment` and `CashOnDelivery`
//! - `StrategySelector` for picking strategies by name
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use checkout_core::{Customer, Item, Order, PdfInvoice, CreditCardPayment, ShoppingCart};
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item(Arc::new(Item::new("123456", "Shampoo", Decimal::new(999, 2))), 2)?;
//!
//! let customer = Arc::new(Customer::new("John Doe", "123 Main Street", "john@example.com"));
//! let order = Order::new(customer, cart)
//!     .with_invoice_strategy(Arc::new(PdfInvoice))
//!     .with_payment_strategy(Arc::new(CreditCardPayment::new(
//!         "John Doe",
//!         "4111 1111 1111 1111",
//!         "123",
//!         "01/2025",
//!     )));
//!
//! order.generate_invoice()?;
//! let receipt = order.pay_invoice()?;
//! assert_eq!(receipt.amount.display(), "$19.98");
//! # Ok::<(), checkout_core::CheckoutError>(())
//! ```

pub mod cart;
pub mod customer;
pub mod error;
pub mod invoice;
pub mod item;
pub mod order;
pub mod payment;
pub mod strategy;

// Re-exports for convenience
pub use cart::ShoppingCart;
pub use customer::Customer;
pub use error::{CheckoutError, CheckoutResult, StrategyKind};
pub use invoice::{InvoiceFormat, InvoiceLine, InvoiceRecord, PdfInvoice, TextInvoice};
pub use item::{Currency, Item, Price};
pub use order::{Order, OrderId};
pub use payment::{
    CashOnDelivery, CreditCardPayment, PaymentMethod, PaymentReceipt, PaypalPayment,
};
pub use strategy::{
    BoxedInvoiceStrategy, BoxedPaymentStrategy, InvoiceStrategy, InvoiceStrategySelector,
    NamedStrategy, PaymentStrategy, PaymentStrategySelector, StrategySelector,
};
