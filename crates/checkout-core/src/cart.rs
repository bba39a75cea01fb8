//! # Shopping Cart
//!
//! Ordered collection of items. Each unit of quantity occupies its own slot,
//! so an item added with quantity 3 appears three times.

use crate::error::{CheckoutError, CheckoutResult};
use crate::item::{Currency, Item, Price};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// A shopping cart. Grows only through [`ShoppingCart::add_item`].
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<Arc<Item>>,
    currency: Currency,
}

impl ShoppingCart {
    /// Create an empty cart priced in USD
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart priced in the given currency
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Append `quantity` slots referencing `item`.
    ///
    /// Zero is a no-op. Negative quantities are rejected and leave the cart
    /// untouched.
    pub fn add_item(&mut self, item: Arc<Item>, quantity: i64) -> CheckoutResult<()> {
        let count =
            usize::try_from(quantity).map_err(|_| CheckoutError::InvalidQuantity { quantity })?;

        debug!(code = item.code(), quantity, "Adding item to cart");
        self.items
            .extend(std::iter::repeat_with(|| Arc::clone(&item)).take(count));
        Ok(())
    }

    /// All slots in insertion order
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// Sum of every slot's price. Zero for an empty cart.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Total tagged with the cart currency
    pub fn total_price(&self) -> Price {
        Price::new(self.total(), self.currency)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// One `"<name> - <price>"` line per slot, in insertion order.
    ///
    /// Lazy; call again to restart.
    pub fn display_items(&self) -> impl Iterator<Item = String> + '_ {
        self.items
            .iter()
            .map(|item| format!("{} - {}", item.name(), item.price()))
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots holding the item with this code
    pub fn item_count(&self, code: &str) -> usize {
        self.items.iter().filter(|item| item.code() == code).count()
    }
}
