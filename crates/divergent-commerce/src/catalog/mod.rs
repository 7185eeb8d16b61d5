//! Product catalog module.
//!
//! Contains the product and exhibition records the cart references, and the
//! provider trait the presentation layer reads them through.

mod exhibition;
mod product;
mod provider;

pub use exhibition::{Exhibition, ExhibitionStatus};
pub use product::{
    ImageTone, Product, ProductDetails, ProductImage, ProductType, APPAREL_SIZES, ONE_SIZE,
};
pub use provider::{CatalogProvider, StaticCatalog};
