//! Product types.

use crate::ids::{ProductId, SellerId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the marketplace catalog.
///
/// The cart and search engines treat products as read-only: a product's
/// price changing after a cart line was added never touches that line's
/// captured price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Base price before any discount.
    pub price: Money,
    /// Discount percentage (0-100), if the product is on sale.
    pub discount_percentage: Option<f64>,
    /// Average rating (0-5).
    pub rating: f64,
    /// Units in stock.
    pub stock: i64,
    /// Brand name.
    pub brand: String,
    /// Category tag.
    pub category: String,
    /// Primary image URL.
    pub thumbnail: String,
    /// Additional image URLs.
    pub images: Vec<String>,
    /// Seller who lists this product.
    pub seller_id: SellerId,
    /// Seller display name (denormalized for product cards).
    pub seller_name: String,
    /// Badge tags (e.g., "bestseller", "new").
    pub badges: Vec<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new product with the given title and base price.
    pub fn new(title: impl Into<String>, price: Money) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            title: title.into(),
            description: String::new(),
            price,
            discount_percentage: None,
            rating: 0.0,
            stock: 0,
            brand: String::new(),
            category: String::new(),
            thumbnail: String::new(),
            images: Vec::new(),
            seller_id: SellerId::new("unknown"),
            seller_name: String::new(),
            badges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The effective unit price: discounted when a discount is present.
    ///
    /// Discount percentages outside 0-100 are clamped.
    pub fn sale_price(&self) -> Money {
        match self.discount_percentage {
            Some(percent) => {
                let percent = percent.clamp(0.0, 100.0);
                self.price.multiply_decimal(1.0 - percent / 100.0)
            }
            None => self.price,
        }
    }

    /// Check if the product carries a discount.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percentage.map(|p| p > 0.0).unwrap_or(false)
    }

    /// Check if the product has stock left.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// The currency this product is priced in.
    pub fn currency(&self) -> Currency {
        self.price.currency
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: f64) -> Self {
        self.discount_percentage = Some(percent);
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the seller.
    pub fn with_seller(mut self, id: SellerId, name: impl Into<String>) -> Self {
        self.seller_id = id;
        self.seller_name = name.into();
        self
    }

    /// Set the primary image.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = url.into();
        self
    }

    /// Add a badge tag.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        let badge = badge.into();
        if !self.badges.contains(&badge) {
            self.badges.push(badge);
        }
        self
    }

    /// Set the creation timestamp (also used as the initial update time).
    pub fn with_created_at(mut self, timestamp: i64) -> Self {
        self.created_at = timestamp;
        self.updated_at = timestamp;
        self
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
