//! Catalog, cart and checkout domain logic for the Divergent storefront.
//!
//! - **Catalog**: products, exhibitions, size availability
//! - **Cart**: line items, the reducer-style cart state, and the
//!   storage-backed [`CartStore`](cart::CartStore)
//! - **Checkout**: shipping policy and the order summary
//!
//! # Example
//!
//! ```rust
//! use divergent_cache::MemoryStore;
//! use divergent_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::divergent();
//! let hoodie = catalog.resolve("nova-relic-hoodie")?;
//!
//! let mut cart = CartStore::new(MemoryStore::new());
//! cart.add_item(hoodie, hoodie.default_size());
//!
//! let summary = CheckoutSummary::from_cart(cart.state(), &ShippingPolicy::default());
//! assert_eq!(summary.total, Price::from(165));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{
        CatalogProvider, Exhibition, ExhibitionStatus, Product, ProductType, StaticCatalog,
    };

    // Cart
    pub use crate::cart::{CartAction, CartLineItem, CartState, CartStore, CART_STORAGE_KEY};

    // Checkout
    pub use crate::checkout::{CheckoutSummary, ShippingPolicy};
}
