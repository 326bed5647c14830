//! Shopping cart module.
//!
//! `Cart` and `CartItem` are the plain state; `PricingRules` derives the
//! aggregate totals; `CartEngine` owns the state, applies mutations, and
//! mirrors every change to the key-value slot.

mod cart;
mod engine;
mod totals;

pub use cart::{Cart, CartItem};
pub use engine::{CartEngine, CART_STORAGE_KEY};
pub use totals::{CartTotals, PricingRules};
