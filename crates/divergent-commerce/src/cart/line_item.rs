//! Cart line items.

use std::num::NonZeroU32;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// One row in the cart, identified by product and size.
///
/// `product` is a snapshot taken when the item was first added; later catalog
/// changes do not reach items already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product snapshot (denormalized).
    pub product: Product,
    /// Size token chosen by the customer.
    pub size: String,
    /// Quantity, never below one.
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    /// Create a line item with quantity one.
    pub fn new(product: Product, size: impl Into<String>) -> Self {
        Self {
            product,
            size: size.into(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// Check if this item is the `(product_id, size)` line.
    pub fn matches(&self, product_id: &ProductId, size: &str) -> bool {
        &self.product.id == product_id && self.size == size
    }

    /// Quantity as a plain integer.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity.get()
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = clamp_quantity(quantity);
    }
}

/// Floor at one, saturate at `u32::MAX`.
pub(crate) fn clamp_quantity(quantity: i64) -> NonZeroU32 {
    let clamped = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
    NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee(price: u32) -> Product {
        Product::new("tee", "TEE", Price::from(price))
    }

    #[test]
    fn test_new_line_has_quantity_one() {
        let item = CartLineItem::new(tee(10), "M");
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.size, "M");
    }

    #[test]
    fn test_line_total() {
        let mut item = CartLineItem::new(tee(10), "M");
        item.set_quantity(3);
        assert_eq!(item.line_total(), Price::from(30));
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0).get(), 1);
        assert_eq!(clamp_quantity(-5).get(), 1);
        assert_eq!(clamp_quantity(7).get(), 7);
        assert_eq!(clamp_quantity(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_increment_saturates() {
        let mut item = CartLineItem::new(tee(1), "S");
        item.set_quantity(i64::from(u32::MAX));
        item.increment();
        assert_eq!(item.quantity(), u32::MAX);
    }

    #[test]
    fn test_zero_quantity_does_not_deserialize() {
        let json = r#"{"product":{"id":"tee","name":"TEE","price":10},"size":"M","quantity":0}"#;
        assert!(serde_json::from_str::<CartLineItem>(json).is_err());
    }

    #[test]
    fn test_matches_identity() {
        let item = CartLineItem::new(tee(10), "M");
        assert!(item.matches(&ProductId::new("tee"), "M"));
        assert!(!item.matches(&ProductId::new("tee"), "L"));
        assert!(!item.matches(&ProductId::new("hoodie"), "M"));
    }
}
