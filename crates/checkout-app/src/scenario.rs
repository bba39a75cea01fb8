//! # Scenario Runner
//!
//! Runs one checkout end to end: show the cart, place the order, invoice it,
//! pay it. All dependencies are passed in, so tests can drive it with any
//! writer and any strategies.

use crate::state::AppState;
use checkout_core::{
    BoxedInvoiceStrategy, BoxedPaymentStrategy, Customer, InvoiceRecord, Order, OrderId,
    PaymentReceipt, ShoppingCart,
};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Result of a completed checkout
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutOutcome {
    pub order_id: OrderId,
    pub invoice: InvoiceRecord,
    pub receipt: PaymentReceipt,
}

/// Display the cart, then invoice and pay a new order for it.
///
/// Writes the console transcript to `out`: a "Shopping Cart:" header, one
/// line per cart slot, a blank line, the invoice line and the payment line.
pub fn run_scenario<W: Write>(
    out: &mut W,
    cart: ShoppingCart,
    customer: Arc<Customer>,
    invoice: BoxedInvoiceStrategy,
    payment: BoxedPaymentStrategy,
) -> anyhow::Result<CheckoutOutcome> {
    writeln!(out, "Shopping Cart:")?;
    for line in cart.display_items() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;

    let order = Order::new(customer, cart)
        .with_invoice_strategy(invoice)
        .with_payment_strategy(payment);
    info!(order_id = %order.id(), total = %order.total_price().display(), "Order placed");

    let invoice = order.generate_invoice()?;
    writeln!(out, "{}", invoice.summary())?;

    let receipt = order.pay_invoice()?;
    writeln!(out, "{}", receipt.summary())?;

    info!(
        order_id = %order.id(),
        receipt_id = %receipt.id,
        method = %receipt.method,
        "Checkout complete"
    );

    Ok(CheckoutOutcome {
        order_id: order.id(),
        invoice,
        receipt,
    })
}

/// Run the scenario an [`AppState`] was built for.
pub fn run_state<W: Write>(out: &mut W, state: &AppState) -> anyhow::Result<CheckoutOutcome> {
    let invoice = state.invoice_strategy()?;
    let payment = state.payment_strategy()?;

    run_scenario(
        out,
        state.cart.clone(),
        Arc::clone(&state.customer),
        invoice,
        payment,
    )
}

/// Write the outcome as pretty JSON followed by a newline
pub fn write_json<W: Write>(out: &mut W, outcome: &CheckoutOutcome) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, outcome)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use checkout_core::{
        CashOnDelivery, CheckoutError, CreditCardPayment, InvoiceFormat, Item, PaymentMethod,
        PaypalPayment, PdfInvoice, TextInvoice,
    };
    use rust_decimal::Decimal;

    fn sample_cart() -> ShoppingCart {
        let mut cart = ShoppingCart::new();
        cart.add_item(Arc::new(Item::new("123456", "Shampoo", Decimal::new(999, 2))), 2)
            .unwrap();
        cart.add_item(Arc::new(Item::new("234567", "Soap", Decimal::new(499, 2))), 4)
            .unwrap();
        cart.add_item(Arc::new(Item::new("345678", "Toothpaste", Decimal::new(299, 2))), 1)
            .unwrap();
        cart
    }

    fn john() -> Arc<Customer> {
        Arc::new(Customer::new(
            "John Doe",
            "123 Main Street, Anytown, USA",
            "john@example.com",
        ))
    }

    #[test]
    fn test_sample_transcript() {
        let mut out = Vec::new();
        let outcome = run_scenario(
            &mut out,
            sample_cart(),
            john(),
            Arc::new(PdfInvoice),
            Arc::new(CreditCardPayment::new(
                "John Doe",
                "4111 1111 1111 1111",
                "123",
                "01/2025",
            )),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Shopping Cart:");
        assert_eq!(lines[1], "Shampoo - 9.99");
        assert_eq!(lines[3], "Soap - 4.99");
        assert_eq!(lines[7], "Toothpaste - 2.99");
        assert_eq!(lines[8], "");
        assert_eq!(
            lines[9],
            format!(
                "Generated PDF invoice for order #{} (7 items, total $42.93)",
                outcome.order_id
            )
        );
        assert_eq!(
            lines[10],
            "Paid $42.93 using credit card (John Doe, card ending 1111, expiry 01/2025)"
        );

        assert_eq!(outcome.invoice.format, InvoiceFormat::Pdf);
        assert_eq!(outcome.receipt.method, PaymentMethod::CreditCard);
        assert_eq!(outcome.receipt.amount.amount, Decimal::new(4293, 2));
        assert!(!text.contains("4111 1111 1111 1111"));
    }

    #[test]
    fn test_alternative_strategies() {
        let mut out = Vec::new();
        let outcome = run_scenario(
            &mut out,
            sample_cart(),
            john(),
            Arc::new(TextInvoice),
            Arc::new(PaypalPayment::new("john@example.com", "s3cret-pass")),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome.invoice.format, InvoiceFormat::Text);
        assert!(text.contains("Paid $42.93 using PayPal (account john@example.com)"));
        assert!(!text.contains("s3cret-pass"));
    }

    #[test]
    fn test_empty_cart_checkout() {
        let mut out = Vec::new();
        let outcome = run_scenario(
            &mut out,
            ShoppingCart::new(),
            john(),
            Arc::new(PdfInvoice),
            Arc::new(CashOnDelivery::new(john())),
        )
        .unwrap();

        assert_eq!(outcome.receipt.amount.amount, Decimal::ZERO);
        assert!(outcome.invoice.lines.is_empty());
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("Shopping Cart:\n\n"));
    }

    #[test]
    fn test_run_state_with_override() {
        let mut scenario = ScenarioConfig::sample().unwrap();
        scenario.payment = "cash-on-delivery".into();
        let state = AppState::from_scenario(&scenario).unwrap();

        let mut out = Vec::new();
        let outcome = run_state(&mut out, &state).unwrap();

        assert_eq!(outcome.receipt.method, PaymentMethod::CashOnDelivery);
        assert!(outcome.receipt.detail.contains("John Doe"));
        // state's cart is untouched and reusable
        assert_eq!(state.cart.len(), 7);
    }

    #[test]
    fn test_run_state_unknown_invoice() {
        let mut scenario = ScenarioConfig::sample().unwrap();
        scenario.invoice = "docx".into();
        let state = AppState::from_scenario(&scenario).unwrap();

        let mut out = Vec::new();
        let err = run_state(&mut out, &state).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CheckoutError>(),
            Some(CheckoutError::UnknownStrategy { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_output() {
        let mut sink = std::io::sink();
        let outcome = run_scenario(
            &mut sink,
            sample_cart(),
            john(),
            Arc::new(PdfInvoice),
            Arc::new(CreditCardPayment::new("John Doe", "4111111111111111", "123", "01/2025")),
        )
        .unwrap();

        let mut out = Vec::new();
        write_json(&mut out, &outcome).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["order_id"], outcome.order_id.to_string());
        assert_eq!(json["receipt"]["method"], "credit-card");
        assert_eq!(json["receipt"]["amount"]["amount"], "42.93");
        assert_eq!(json["invoice"]["lines"].as_array().unwrap().len(), 7);
        assert!(!String::from_utf8(out).unwrap().contains("4111111111111111"));
    }
}
