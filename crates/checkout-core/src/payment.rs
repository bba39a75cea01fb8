//! # Payment Strategies
//!
//! Credit card, PayPal and cash-on-delivery payments. None of them talk to a
//! processor; each validates the amount and hands back a [`PaymentReceipt`].
//!
//! Card numbers, CVVs and passwords are held as [`SecretString`] and never
//! appear in receipts, logs or `Debug` output.

use crate::customer::Customer;
use crate::error::{CheckoutError, CheckoutResult};
use crate::item::Price;
use crate::strategy::PaymentStrategy;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Payment method tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::CashOnDelivery => "cash-on-delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::CashOnDelivery => "cash on delivery",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a completed payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Unique receipt ID (generated)
    pub id: Uuid,

    pub method: PaymentMethod,

    /// Amount charged
    pub amount: Price,

    /// Redacted, human-readable payment detail
    pub detail: String,

    pub paid_at: DateTime<Utc>,
}

impl PaymentReceipt {
    pub fn new(method: PaymentMethod, amount: Price, detail: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method,
            amount,
            detail: detail.into(),
            paid_at: Utc::now(),
        }
    }

    /// One console line describing the payment
    pub fn summary(&self) -> String {
        format!(
            "Paid {} using {} ({})",
            self.amount.display(),
            self.method.label(),
            self.detail
        )
    }
}

fn ensure_payable(amount: &Price) -> CheckoutResult<()> {
    if amount.is_negative() {
        return Err(CheckoutError::InvalidAmount {
            amount: amount.amount,
        });
    }
    Ok(())
}

/// Pay by credit card
pub struct CreditCardPayment {
    holder: String,
    number: SecretString,
    cvv: SecretString,
    expiry: String,
}

impl CreditCardPayment {
    /// `expiry` is free-form, e.g. "01/2025"
    pub fn new(
        holder: impl Into<String>,
        number: impl Into<String>,
        cvv: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            holder: holder.into(),
            number: SecretString::from(number.into()),
            cvv: SecretString::from(cvv.into()),
            expiry: expiry.into(),
        }
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn expiry(&self) -> &str {
        &self.expiry
    }

    /// Last four digits of the card number (fewer if the number is short)
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self
            .number
            .expose_secret()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }

    /// Card number with everything but the last four digits hidden
    pub fn masked_number(&self) -> String {
        format!("**** **** **** {}", self.last_four())
    }

    fn cvv_len(&self) -> usize {
        self.cvv.expose_secret().len()
    }
}

impl std::fmt::Debug for CreditCardPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCardPayment")
            .field("holder", &self.holder)
            .field("number", &self.masked_number())
            .field("cvv", &"[REDACTED]")
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn pay(&self, amount: &Price) -> CheckoutResult<PaymentReceipt> {
        ensure_payable(amount)?;

        info!(
            method = %self.method(),
            amount = %amount.display(),
            card = %self.masked_number(),
            cvv_provided = self.cvv_len() > 0,
            "Charging credit card"
        );

        Ok(PaymentReceipt::new(
            self.method(),
            *amount,
            format!(
                "{}, card ending {}, expiry {}",
                self.holder,
                self.last_four(),
                self.expiry
            ),
        ))
    }
}

/// Pay through a PayPal account
pub struct PaypalPayment {
    email: String,
    password: SecretString,
}

impl PaypalPayment {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }
}

impl std::fmt::Debug for PaypalPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaypalPayment")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PaymentStrategy for PaypalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Paypal
    }

    fn pay(&self, amount: &Price) -> CheckoutResult<PaymentReceipt> {
        ensure_payable(amount)?;

        info!(
            method = %self.method(),
            amount = %amount.display(),
            account = %self.email,
            password_provided = self.has_password(),
            "Charging PayPal account"
        );

        Ok(PaymentReceipt::new(
            self.method(),
            *amount,
            format!("account {}", self.email),
        ))
    }
}

/// Collect payment in cash when the order is delivered
#[derive(Debug, Clone)]
pub struct CashOnDelivery {
    customer: Arc<Customer>,
}

impl CashOnDelivery {
    pub fn new(customer: Arc<Customer>) -> Self {
        Self { customer }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }
}

impl PaymentStrategy for CashOnDelivery {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CashOnDelivery
    }

    fn pay(&self, amount: &Price) -> CheckoutResult<PaymentReceipt> {
        ensure_payable(amount)?;

        info!(
            method = %self.method(),
            amount = %amount.display(),
            customer = self.customer.name(),
            "Scheduling cash on delivery"
        );

        Ok(PaymentReceipt::new(
            self.method(),
            *amount,
            format!("to customer {}", self.customer.name()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Currency;
    use rust_decimal::Decimal;

    fn card() -> CreditCardPayment {
        CreditCardPayment::new("John Doe", "4111 1111 1111 1111", "123", "01/2025")
    }

    fn usd(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2), Currency::USD)
    }

    #[test]
    fn test_credit_card_receipt() {
        let receipt = card().pay(&usd(4293)).unwrap();

        assert_eq!(receipt.method, PaymentMethod::CreditCard);
        assert_eq!(receipt.method.as_str(), "credit-card");
        assert_eq!(receipt.amount, usd(4293));
        assert_eq!(
            receipt.summary(),
            "Paid $42.93 using credit card (John Doe, card ending 1111, expiry 01/2025)"
        );
    }

    #[test]
    fn test_credit_card_never_leaks_secrets() {
        let card = CreditCardPayment::new("Jane Roe", "5500 0000 0000 0004", "987", "12/2030");
        let receipt = card.pay(&usd(100)).unwrap();
        let debug = format!("{:?}", card);
        let json = serde_json::to_string(&receipt).unwrap();

        for surface in [&debug, &receipt.summary(), &json] {
            assert!(!surface.contains("5500 0000 0000 0004"));
            assert!(!surface.contains("5500000000000004"));
        }
        assert!(!debug.contains("987"));
        assert!(!receipt.summary().contains("987"));
        assert!(debug.contains("**** **** **** 0004"));
        assert_eq!(card.last_four(), "0004");
    }

    #[test]
    fn test_short_card_number() {
        let card = CreditCardPayment::new("A", "12", "1", "01/2030");
        assert_eq!(card.last_four(), "12");
    }

    #[test]
    fn test_paypal_receipt() {
        let paypal = PaypalPayment::new("john@example.com", "hunter2");
        let receipt = paypal.pay(&usd(999)).unwrap();

        assert_eq!(receipt.method.as_str(), "paypal");
        assert_eq!(receipt.summary(), "Paid $9.99 using PayPal (account john@example.com)");
        assert!(!format!("{:?}", paypal).contains("hunter2"));
        assert!(!serde_json::to_string(&receipt).unwrap().contains("hunter2"));
    }

    #[test]
    fn test_cash_on_delivery_names_customer() {
        let customer = Arc::new(Customer::new("John Doe", "123 Main Street", "john@example.com"));
        let receipt = CashOnDelivery::new(customer).pay(&usd(4293)).unwrap();

        assert_eq!(receipt.method.as_str(), "cash-on-delivery");
        assert!(receipt.detail.contains("John Doe"));
    }

    #[test]
    fn test_zero_amount_accepted() {
        let receipt = card().pay(&Price::zero(Currency::USD)).unwrap();
        assert_eq!(receipt.amount.amount, Decimal::ZERO);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = PaypalPayment::new("a@b.c", "pw").pay(&usd(-1)).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidAmount { .. }));
    }

    #[test]
    fn test_receipt_ids_are_unique() {
        let card = card();
        let first = card.pay(&usd(1)).unwrap();
        let second = card.pay(&usd(1)).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_method_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"cash-on-delivery\""
        );
    }
}
