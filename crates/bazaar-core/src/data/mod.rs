//! Deterministic mock dataset.
//!
//! Stands in for the real backend: the demo UI builds its storefront over
//! these fixtures. Everything is fixed — ids, prices, timestamps — so demos
//! and tests see the same catalog every run.

mod products;
mod users;

pub use products::sample_products;
pub use users::sample_users;
