//! Shopping cart module.
//!
//! Contains the line item type, the reducer-style cart state, and the store
//! that persists it.

mod line_item;
mod state;
mod store;

pub use line_item::CartLineItem;
pub use state::{has_unique_lines, CartAction, CartState};
pub use store::{CartStore, CART_STORAGE_KEY};
