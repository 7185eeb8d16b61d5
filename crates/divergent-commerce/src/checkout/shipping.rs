//! Shipping rates.

use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Flat-rate shipping, free above a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free.
    pub free_shipping_threshold: Price,
    /// Charged when the subtotal is below the threshold.
    pub flat_rate: Price,
}

impl ShippingPolicy {
    /// Shipping charged on `subtotal`.
    pub fn rate_for(&self, subtotal: Price) -> Price {
        if subtotal >= self.free_shipping_threshold {
            Price::ZERO
        } else {
            self.flat_rate
        }
    }

    /// How much more must be spent to ship free, if anything.
    pub fn remaining_for_free(&self, subtotal: Price) -> Option<Price> {
        if subtotal >= self.free_shipping_threshold {
            None
        } else {
            Some(self.free_shipping_threshold - subtotal)
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Price::from(150),
            flat_rate: Price::from(12),
        }
    }
}
