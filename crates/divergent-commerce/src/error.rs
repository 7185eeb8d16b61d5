//! Commerce error types.

use thiserror::Error;

/// Errors raised by catalog lookups and input validation.
///
/// The cart store itself never returns these; see [`crate::cart::CartStore`].
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Size not offered for a product.
    #[error("Size {size:?} is not offered for {product}; choose one of {available}")]
    UnknownSize {
        product: String,
        size: String,
        available: String,
    },

    /// Storage error.
    #[error("Storage error: {0}")]
    Cache(#[from] divergent_cache::CacheError),
}
