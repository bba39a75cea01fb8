//! # Invoice Strategies
//!
//! PDF and text invoices. Neither encodes a document; both describe what
//! would be rendered as an [`InvoiceRecord`].

use crate::item::Price;
use crate::order::{Order, OrderId};
use crate::strategy::InvoiceStrategy;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Invoice output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceFormat {
    Pdf,
    Text,
}

impl InvoiceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceFormat::Pdf => "pdf",
            InvoiceFormat::Text => "text",
        }
    }

    /// Human-readable label (e.g., "PDF")
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceFormat::Pdf => "PDF",
            InvoiceFormat::Text => "text",
        }
    }
}

/// One invoiced cart slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub code: String,
    pub name: String,
    pub price: Decimal,
}

/// Everything needed to render an invoice for one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub format: InvoiceFormat,
    pub order_id: OrderId,
    pub customer_name: String,
    pub lines: Vec<InvoiceLine>,
    pub total: Price,
    pub generated_at: DateTime<Utc>,
}

impl InvoiceRecord {
    /// Snapshot `order` as it is right now
    pub fn for_order(format: InvoiceFormat, order: &Order) -> Self {
        let lines = order
            .items()
            .iter()
            .map(|item| InvoiceLine {
                code: item.code().to_string(),
                name: item.name().to_string(),
                price: item.price(),
            })
            .collect();

        Self {
            format,
            order_id: order.id(),
            customer_name: order.customer().name().to_string(),
            lines,
            total: order.total_price(),
            generated_at: Utc::now(),
        }
    }

    /// Log message emitted when the record is produced
    pub fn notice(&self) -> String {
        format!(
            "Generating {} invoice for order #{}",
            self.format.label(),
            self.order_id
        )
    }

    /// One console line describing the invoice
    pub fn summary(&self) -> String {
        format!(
            "Generated {} invoice for order #{} ({} items, total {})",
            self.format.label(),
            self.order_id,
            self.lines.len(),
            self.total.display()
        )
    }
}

/// PDF invoice strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfInvoice;

impl InvoiceStrategy for PdfInvoice {
    fn format(&self) -> InvoiceFormat {
        InvoiceFormat::Pdf
    }

    fn generate(&self, order: &Order) -> InvoiceRecord {
        let record = InvoiceRecord::for_order(self.format(), order);
        info!(
            order_id = %record.order_id,
            lines = record.lines.len(),
            total = %record.total.display(),
            "{}",
            record.notice()
        );
        record
    }
}

/// Plain-text invoice strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInvoice;

impl InvoiceStrategy for TextInvoice {
    fn format(&self) -> InvoiceFormat {
        InvoiceFormat::Text
    }

    fn generate(&self, order: &Order) -> InvoiceRecord {
        let record = InvoiceRecord::for_order(self.format(), order);
        info!(
            order_id = %record.order_id,
            lines = record.lines.len(),
            total = %record.total.display(),
            "{}",
            record.notice()
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ShoppingCart;
    use crate::customer::Customer;
    use crate::item::Item;
    use std::sync::Arc;

    fn order() -> Order {
        let mut cart = ShoppingCart::new();
        cart.add_item(Arc::new(Item::new("123456", "Shampoo", Decimal::new(999, 2))), 2)
            .unwrap();
        cart.add_item(Arc::new(Item::new("345678", "Toothpaste", Decimal::new(299, 2))), 1)
            .unwrap();
        let customer = Arc::new(Customer::new("John Doe", "123 Main Street", "john@example.com"));
        Order::new(customer, cart)
    }

    #[test]
    fn test_pdf_record() {
        let order = order();
        let record = PdfInvoice.generate(&order);

        assert_eq!(record.format, InvoiceFormat::Pdf);
        assert_eq!(record.order_id, order.id());
        assert_eq!(record.customer_name, "John Doe");
        assert_eq!(record.lines.len(), 3);
        assert_eq!(record.lines[2].name, "Toothpaste");
        assert_eq!(record.total.display(), "$22.97");
    }

    #[test]
    fn test_variants_differ_only_in_format() {
        let order = order();
        let pdf = PdfInvoice.generate(&order);
        let text = TextInvoice.generate(&order);

        assert_eq!(text.format, InvoiceFormat::Text);
        assert_eq!(pdf.order_id, text.order_id);
        assert_eq!(pdf.lines, text.lines);
        assert_eq!(pdf.total, text.total);
    }

    #[test]
    fn test_summary_names_format_and_order() {
        let order = order();
        let summary = TextInvoice.generate(&order).summary();

        assert!(summary.starts_with("Generated text invoice for order #"));
        assert!(summary.contains(&order.id().to_string()));
        assert!(summary.ends_with("(3 items, total $22.97)"));
    }

    #[test]
    fn test_notice_names_format_and_order() {
        let order = order();

        assert_eq!(
            PdfInvoice.generate(&order).notice(),
            format!("Generating PDF invoice for order #{}", order.id())
        );
        assert_eq!(
            TextInvoice.generate(&order).notice(),
            format!("Generating text invoice for order #{}", order.id())
        );
    }

    #[test]
    fn test_record_serializes() {
        let record = PdfInvoice.generate(&order());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["format"], "pdf");
        assert_eq!(json["lines"][0]["price"], "9.99");
        assert_eq!(json["total"]["currency"], "usd");
    }
}
