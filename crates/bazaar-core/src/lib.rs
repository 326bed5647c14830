//! Storefront shell for Bazaar.
//!
//! Wires the domain engines into one explicitly constructed [`Storefront`]
//! value: built once at application start, handed by reference to whatever
//! layer renders it, torn down on shutdown. No ambient singletons.
//!
//! The [`data`] module ships the deterministic mock dataset the demo UI
//! feeds in place of a real backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use bazaar_core::prelude::*;
//! use bazaar_kv::MemoryStore;
//! use std::sync::Arc;
//!
//! let mut shop = Storefront::builder(Arc::new(MemoryStore::new()))
//!     .with_products(data::sample_products())
//!     .with_users(data::sample_users())
//!     .build();
//!
//! let lamps = shop.search(&ProductFilter::new().with_search("lamp"));
//! ```

pub mod app;
pub mod data;

pub use app::{Storefront, StorefrontBuilder};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::app::{Storefront, StorefrontBuilder};
    pub use crate::data;
    pub use bazaar_auth::prelude::*;
    pub use bazaar_commerce::prelude::*;
}
