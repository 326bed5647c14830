//! Cart and line item state.

use crate::cart::CartTotals;
use crate::ids::{LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// The unit price is captured when the line is created and never recomputed:
/// later changes to the product's price or discount do not reach lines that
/// are already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Unique line item identifier, distinct from the product id.
    pub id: LineItemId,
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Quantity. Always positive in persisted state.
    pub quantity: i64,
    /// Unit price locked at add time (discounted price if the product was
    /// on sale when added).
    pub unit_price: Money,
}

impl CartItem {
    /// Create a new line item with a freshly generated line id.
    pub fn new(
        product_id: ProductId,
        title: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id,
            title: title.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total (unit price times quantity), `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// The shopping cart aggregate.
///
/// Items keep insertion order of distinct products, with at most one line
/// per product id. `totals` is derived from `items`; the engine recomputes
/// it after every mutation so the two never disagree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Line items in insertion order.
    pub items: Vec<CartItem>,
    /// Derived aggregate totals.
    pub totals: CartTotals,
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            totals: CartTotals::zero(currency),
        }
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct product lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by its line id.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Get the line holding a given product, if present.
    pub fn get_item_by_product(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Sum of line totals, `None` on overflow or currency mismatch.
    pub fn subtotal(&self, currency: Currency) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for item in &self.items {
            acc = acc.try_add(&item.line_total()?)?;
        }
        Some(acc)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::empty(Currency::default())
    }
}
