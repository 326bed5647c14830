//! The cart engine: mutations, total recomputation, write-through persistence.

use std::sync::Arc;

use bazaar_kv::{get_json, set_json, KeyValueStore};

use crate::cart::{Cart, CartItem, CartTotals, PricingRules};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::LineItemId;

/// Fixed key the serialized cart lives under.
pub const CART_STORAGE_KEY: &str = "bazaar.cart";

/// Owns the cart state and the persistence contract around it.
///
/// Every state-changing operation recomputes the derived totals, bumps the
/// revision counter, and writes the full serialized cart back to the store.
/// The UI re-reads the [`Cart`] snapshot whenever it observes a new revision.
pub struct CartEngine {
    cart: Cart,
    rules: PricingRules,
    store: Arc<dyn KeyValueStore>,
    key: String,
    revision: u64,
}

impl CartEngine {
    /// Open the engine against a store, restoring any persisted cart from
    /// [`CART_STORAGE_KEY`].
    ///
    /// A missing key yields the empty cart. An unparseable value is
    /// discarded and also yields the empty cart; restore never fails.
    pub fn open(store: Arc<dyn KeyValueStore>, rules: PricingRules) -> Self {
        Self::open_at(store, rules, CART_STORAGE_KEY)
    }

    /// Open the engine with an explicit storage key.
    pub fn open_at(
        store: Arc<dyn KeyValueStore>,
        rules: PricingRules,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let cart = Self::restore(store.as_ref(), &rules, &key);
        Self {
            cart,
            rules,
            store,
            key,
            revision: 0,
        }
    }

    fn restore(store: &dyn KeyValueStore, rules: &PricingRules, key: &str) -> Cart {
        match get_json::<Cart>(store, key) {
            Ok(Some(mut cart)) => {
                // Persisted totals are untrusted: recompute so the derived
                // fields always agree with the items.
                match rules.compute(&cart.items) {
                    Ok(totals) => {
                        cart.totals = totals;
                        cart
                    }
                    Err(e) => {
                        tracing::warn!(key, error = %e, "discarding persisted cart with unusable items");
                        store.remove(key).ok();
                        Cart::empty(rules.currency)
                    }
                }
            }
            Ok(None) => Cart::empty(rules.currency),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding corrupt persisted cart");
                store.remove(key).ok();
                Cart::empty(rules.currency)
            }
        }
    }

    /// Read-only snapshot of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current derived totals.
    pub fn totals(&self) -> &CartTotals {
        &self.cart.totals
    }

    /// Revision counter. Bumped on every committed mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The pricing rules this engine derives totals with.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// The unit price is the product's effective (discounted) price at this
    /// moment and is locked into the line: adding the same product again
    /// only increments the existing line's quantity, it never refreshes the
    /// captured price. Non-positive quantities are a no-op (callers clamp
    /// to at least 1). Stock is not checked here; that lives at the call
    /// site.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            tracing::debug!(product = %product.id, quantity, "ignoring non-positive add");
            return Ok(());
        }

        if let Some(existing) = self
            .cart
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
        } else {
            let unit_price = product.sale_price();
            self.cart.items.push(CartItem::new(
                product.id.clone(),
                product.title.clone(),
                quantity,
                unit_price,
            ));
        }

        self.commit()
    }

    /// Remove the line with the given id. Absent ids are a no-op.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> Result<(), CommerceError> {
        let len_before = self.cart.items.len();
        self.cart.items.retain(|i| &i.id != line_item_id);
        if self.cart.items.len() == len_before {
            return Ok(());
        }
        self.commit()
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of zero or less removes the line; zero-quantity lines are
    /// never persisted. Absent ids are a no-op.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return self.remove_item(line_item_id);
        }

        match self.cart.items.iter_mut().find(|i| &i.id == line_item_id) {
            Some(item) => {
                item.quantity = quantity;
                self.commit()
            }
            None => Ok(()),
        }
    }

    /// Reset to the empty cart.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart = Cart::empty(self.rules.currency);
        self.commit()
    }

    /// Recompute totals, bump the revision, and write the cart through to
    /// the store.
    fn commit(&mut self) -> Result<(), CommerceError> {
        self.cart.totals = self.rules.compute(&self.cart.items)?;
        self.revision += 1;
        set_json(self.store.as_ref(), &self.key, &self.cart)?;
        tracing::debug!(
            revision = self.revision,
            items = self.cart.items.len(),
            total_cents = self.cart.totals.total.amount_cents,
            "cart committed"
        );
        Ok(())
    }
}
