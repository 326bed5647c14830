//! Cart total derivation.

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Aggregate totals derived from the cart's line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub total_items: i64,
    /// Sum of unit price times quantity across all lines.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Grand total: subtotal + tax + shipping.
    pub total: Money,
}

impl CartTotals {
    /// All-zero totals in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            total_items: 0,
            subtotal: Money::zero(currency),
            tax: Money::zero(currency),
            shipping: Money::zero(currency),
            total: Money::zero(currency),
        }
    }
}

impl Default for CartTotals {
    fn default() -> Self {
        Self::zero(Currency::default())
    }
}

/// Pricing parameters for total derivation.
///
/// Defaults match the storefront's rules: 7% tax, flat $10.00 shipping,
/// free shipping when the subtotal is strictly greater than $100.00.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRules {
    /// Cart currency. Every line must be priced in it.
    pub currency: Currency,
    /// Tax rate applied to the subtotal (0.07 = 7%).
    pub tax_rate: f64,
    /// Flat shipping charge below the free-shipping threshold.
    pub flat_shipping: Money,
    /// Free shipping applies when the subtotal strictly exceeds this.
    /// A subtotal exactly at the threshold still pays shipping.
    pub free_shipping_over: Money,
}

impl Default for PricingRules {
    fn default() -> Self {
        let currency = Currency::USD;
        Self {
            currency,
            tax_rate: 0.07,
            flat_shipping: Money::new(1000, currency),
            free_shipping_over: Money::new(10000, currency),
        }
    }
}

impl PricingRules {
    /// Create rules with the default rates in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            tax_rate: 0.07,
            flat_shipping: Money::new(1000, currency),
            free_shipping_over: Money::new(10000, currency),
        }
    }

    /// Set the tax rate.
    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Set the flat shipping charge.
    pub fn with_flat_shipping(mut self, shipping: Money) -> Self {
        self.flat_shipping = shipping;
        self
    }

    /// Set the free-shipping threshold.
    pub fn with_free_shipping_over(mut self, threshold: Money) -> Self {
        self.free_shipping_over = threshold;
        self
    }

    /// Derive totals from a set of line items.
    ///
    /// Pure function of the items: calling it twice on the same lines always
    /// yields the same totals.
    pub fn compute(&self, items: &[CartItem]) -> Result<CartTotals, CommerceError> {
        for item in items {
            if item.unit_price.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                });
            }
        }

        let total_items = items.iter().map(|i| i.quantity).sum();

        let mut subtotal = Money::zero(self.currency);
        for item in items {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            subtotal = subtotal.try_add(&line).ok_or(CommerceError::Overflow)?;
        }

        let tax = subtotal.multiply_decimal(self.tax_rate);
        let shipping = if subtotal.amount_cents > self.free_shipping_over.amount_cents {
            Money::zero(self.currency)
        } else {
            self.flat_shipping
        };
        let total = subtotal
            .try_add(&tax)
            .and_then(|t| t.try_add(&shipping))
            .ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            total_items,
            subtotal,
            tax,
            shipping,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn item(product: &str, quantity: i64, price_cents: i64) -> CartItem {
        CartItem::new(
            ProductId::new(product),
            product.to_string(),
            quantity,
            Money::new(price_cents, Currency::USD),
        )
    }

    #[test]
    fn test_empty_items_zero_totals() {
        let rules = PricingRules::default();
        let totals = rules.compute(&[]).unwrap();

        assert_eq!(totals.total_items, 0);
        assert!(totals.subtotal.is_zero());
        assert!(totals.tax.is_zero());
        // An empty cart's zero subtotal is not over the threshold, so the
        // flat charge applies; the engine only displays totals for non-empty
        // carts, matching the storefront page.
        assert_eq!(totals.shipping.amount_cents, 1000);
    }

    #[test]
    fn test_tax_is_seven_percent() {
        let rules = PricingRules::default();
        let totals = rules.compute(&[item("p", 1, 5000)]).unwrap();

        assert_eq!(totals.subtotal.amount_cents, 5000);
        assert_eq!(totals.tax.amount_cents, 350);
    }

    #[test]
    fn test_shipping_charged_at_threshold() {
        let rules = PricingRules::default();
        // Exactly $100.00: the threshold is strict, shipping still applies.
        let totals = rules.compute(&[item("p", 1, 10000)]).unwrap();
        assert_eq!(totals.shipping.amount_cents, 1000);
    }

    #[test]
    fn test_shipping_free_above_threshold() {
        let rules = PricingRules::default();
        // $100.01 is strictly greater.
        let totals = rules.compute(&[item("p", 1, 10001)]).unwrap();
        assert!(totals.shipping.is_zero());
    }

    #[test]
    fn test_grand_total() {
        let rules = PricingRules::default();
        let totals = rules
            .compute(&[item("a", 2, 1000), item("b", 1, 2000)])
            .unwrap();

        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.subtotal.amount_cents, 4000);
        assert_eq!(totals.tax.amount_cents, 280);
        assert_eq!(totals.shipping.amount_cents, 1000);
        assert_eq!(totals.total.amount_cents, 5280);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let rules = PricingRules::default();
        let line = CartItem::new(
            ProductId::new("p"),
            "p",
            1,
            Money::new(1000, Currency::EUR),
        );

        assert!(matches!(
            rules.compute(&[line]),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_overflow_rejected() {
        let rules = PricingRules::default();
        let line = item("p", i64::MAX, 2);
        assert!(matches!(
            rules.compute(&[line]),
            Err(CommerceError::Overflow)
        ));
    }
}
