//! Order summary shown on the checkout page.
//!
//! No payment is taken and nothing is recorded; this only prices the cart.

use crate::cart::CartState;
use crate::checkout::ShippingPolicy;
use crate::price::Price;
use serde::Serialize;

/// Subtotal, shipping and total for the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CheckoutSummary {
    /// Price `cart` under `policy`.
    pub fn from_cart(cart: &CartState, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.subtotal();
        let shipping = policy.rate_for(subtotal);
        Self {
            item_count: cart.item_count(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Check if shipping is free.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Shipping as shown to the customer: `Free` or the amount.
    pub fn shipping_display(&self) -> String {
        if self.ships_free() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}
