//! Storefront domain logic for Bazaar.
//!
//! This crate is the in-process core a storefront UI drives:
//!
//! - **Catalog**: product records and their derived pricing helpers
//! - **Cart**: the cart engine — locked-price line items, aggregate totals,
//!   write-through persistence to a key-value slot
//! - **Search**: the filter/sort pipeline behind the catalog page
//! - **Checkout**: orders snapshotted from the cart, status tracking
//! - **Seller**: dashboard aggregates over products and orders
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar_commerce::prelude::*;
//! use bazaar_kv::MemoryStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let mut engine = CartEngine::open(store, PricingRules::default());
//!
//! engine.add_item(&product, 2)?;
//! println!("total: {}", engine.totals().total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod seller;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::Product;

    // Cart
    pub use crate::cart::{Cart, CartEngine, CartItem, CartTotals, PricingRules, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{Address, Order, OrderItem, OrderStatus};

    // Search
    pub use crate::search::{apply, ProductFilter, SortBy};

    // Seller
    pub use crate::seller::{daily_sales, DailySales, SellerStats};
}
