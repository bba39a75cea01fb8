//! # Application State
//!
//! Everything a checkout run needs, built from a scenario: the cart, the
//! customer, and selectors holding every strategy the scenario can pay or
//! invoice with.

use crate::config::ScenarioConfig;
use checkout_core::{
    BoxedInvoiceStrategy, BoxedPaymentStrategy, CashOnDelivery, CheckoutResult,
    CreditCardPayment, Customer, InvoiceStrategySelector, Item, PaymentStrategySelector,
    PaypalPayment, PdfInvoice, ShoppingCart, TextInvoice,
};
use std::sync::Arc;

/// Wired-up checkout dependencies
#[derive(Debug, Clone)]
pub struct AppState {
    pub cart: ShoppingCart,
    pub customer: Arc<Customer>,
    pub invoices: InvoiceStrategySelector,
    pub payments: PaymentStrategySelector,
    /// Invoice strategy chosen by the scenario
    pub invoice_name: String,
    /// Payment strategy chosen by the scenario
    pub payment_name: String,
}

impl AppState {
    /// Build the cart and register strategies for a scenario.
    ///
    /// Card and PayPal strategies are only registered when the scenario
    /// carries their credentials; cash on delivery is always available.
    pub fn from_scenario(scenario: &ScenarioConfig) -> anyhow::Result<Self> {
        let mut cart = ShoppingCart::with_currency(scenario.currency);
        for entry in &scenario.items {
            let item = Arc::new(Item::new(&entry.code, &entry.name, entry.price));
            cart.add_item(item, entry.quantity)
                .map_err(|e| anyhow::anyhow!("Item {}: {}", entry.code, e))?;
        }

        let customer = Arc::new(scenario.customer.clone());

        let invoices = InvoiceStrategySelector::new()
            .with_strategy(Arc::new(PdfInvoice))
            .with_strategy(Arc::new(TextInvoice));

        let mut payments = PaymentStrategySelector::new()
            .with_strategy(Arc::new(CashOnDelivery::new(Arc::clone(&customer))));
        if let Some(card) = &scenario.credit_card {
            payments.register(Arc::new(CreditCardPayment::new(
                &card.holder,
                &card.number,
                &card.cvv,
                &card.expiry,
            )));
        }
        if let Some(paypal) = &scenario.paypal {
            payments.register(Arc::new(PaypalPayment::new(&paypal.email, &paypal.password)));
        }

        tracing::debug!(
            items = cart.len(),
            invoices = ?invoices.names(),
            payments = ?payments.names(),
            "Checkout state ready"
        );

        Ok(Self {
            cart,
            customer,
            invoices,
            payments,
            invoice_name: scenario.invoice.clone(),
            payment_name: scenario.payment.clone(),
        })
    }

    /// The invoice strategy the scenario asked for
    pub fn invoice_strategy(&self) -> CheckoutResult<BoxedInvoiceStrategy> {
        self.invoices.require(&self.invoice_name)
    }

    /// The payment strategy the scenario asked for
    pub fn payment_strategy(&self) -> CheckoutResult<BoxedPaymentStrategy> {
        self.payments.require(&self.payment_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{CheckoutError, InvoiceFormat, PaymentMethod, StrategyKind};
    use rust_decimal::Decimal;

    #[test]
    fn test_sample_state() {
        let state = AppState::from_scenario(&ScenarioConfig::sample().unwrap()).unwrap();

        assert_eq!(state.cart.len(), 7);
        assert_eq!(state.cart.total(), Decimal::new(4293, 2));
        assert_eq!(state.invoices.names(), vec!["pdf", "text"]);
        assert_eq!(
            state.payments.names(),
            vec!["cash-on-delivery", "credit-card", "paypal"]
        );
        assert_eq!(state.invoice_strategy().unwrap().format(), InvoiceFormat::Pdf);
        assert_eq!(
            state.payment_strategy().unwrap().method(),
            PaymentMethod::CreditCard
        );
    }

    #[test]
    fn test_missing_credentials_leave_method_unregistered() {
        let mut scenario = ScenarioConfig::sample().unwrap();
        scenario.paypal = None;
        scenario.payment = "paypal".into();

        let state = AppState::from_scenario(&scenario).unwrap();
        let err = state.payment_strategy().unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::UnknownStrategy {
                kind: StrategyKind::Payment,
                ..
            }
        ));
    }

    #[test]
    fn test_negative_quantity_in_scenario() {
        let mut scenario = ScenarioConfig::sample().unwrap();
        scenario.items[2].quantity = -1;

        let err = AppState::from_scenario(&scenario).unwrap_err();
        assert!(err.to_string().contains("345678"));
    }
}
