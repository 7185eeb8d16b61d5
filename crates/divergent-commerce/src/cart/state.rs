//! Cart state and its reducer.
//!
//! `CartState` is a flat value; every change goes through [`CartAction`] and
//! [`CartState::apply`]. Transitions are total: there are no invalid actions
//! and no terminal states.

use crate::cart::CartLineItem;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::price::Price;

/// The cart contents plus the drawer visibility flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<CartLineItem>,
    is_open: bool,
}

/// A transition of [`CartState`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Merge-on-add: bump an existing `(product.id, size)` line or append a new
    /// one. Opens the drawer.
    AddItem { product: Product, size: String },
    /// Drop the matching line, if any.
    RemoveItem { product_id: ProductId, size: String },
    /// Set a line's quantity, floored at one.
    UpdateQuantity {
        product_id: ProductId,
        size: String,
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
    OpenCart,
    CloseCart,
    ToggleCart,
    /// Replace the items wholesale with previously persisted ones.
    Hydrate(Vec<CartLineItem>),
}

impl CartAction {
    /// Whether this action is a user mutation of the items that must be
    /// written through to storage.
    ///
    /// Decided by kind, not by effect: removing an absent line still persists.
    /// Hydration never does.
    pub fn persists(&self) -> bool {
        matches!(
            self,
            CartAction::AddItem { .. }
                | CartAction::RemoveItem { .. }
                | CartAction::UpdateQuantity { .. }
                | CartAction::Clear
        )
    }
}

impl CartState {
    /// An empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem { product, size } => {
                match self
                    .items
                    .iter_mut()
                    .find(|i| i.matches(&product.id, &size))
                {
                    Some(existing) => existing.increment(),
                    None => self.items.push(CartLineItem::new(product, size)),
                }
                self.is_open = true;
            }
            CartAction::RemoveItem { product_id, size } => {
                self.items.retain(|i| !i.matches(&product_id, &size));
            }
            CartAction::UpdateQuantity {
                product_id,
                size,
                quantity,
            } => {
                if let Some(item) = self
                    .items
                    .iter_mut()
                    .find(|i| i.matches(&product_id, &size))
                {
                    item.set_quantity(quantity);
                }
            }
            CartAction::Clear => self.items.clear(),
            CartAction::OpenCart => self.is_open = true,
            CartAction::CloseCart => self.is_open = false,
            CartAction::ToggleCart => self.is_open = !self.is_open,
            CartAction::Hydrate(items) => self.items = items,
        }
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart drawer is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of price times quantity over all lines.
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity())).sum()
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the `(product_id, size)` line.
    pub fn item(&self, product_id: &ProductId, size: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.matches(product_id, size))
    }
}

/// Check that no two lines share `(product.id, size)`.
pub fn has_unique_lines(items: &[CartLineItem]) -> bool {
    items.iter().enumerate().all(|(n, item)| {
        items
            .iter()
            .skip(n + 1)
            .all(|other| !other.matches(&item.product.id, &item.size))
    })
}
