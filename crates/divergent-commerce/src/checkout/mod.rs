//! Checkout module.
//!
//! Prices the cart for the checkout page. There is no payment or order flow.

mod shipping;
mod summary;

pub use shipping::ShippingPolicy;
pub use summary::CheckoutSummary;
