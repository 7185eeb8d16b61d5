//! The cart store: state, derived totals and write-through persistence.

use divergent_cache::{Cache, CacheError, KeyValueStore};

use crate::cart::state::has_unique_lines;
use crate::cart::{CartAction, CartLineItem, CartState};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::price::Price;

/// Storage key the cart's line items live under.
pub const CART_STORAGE_KEY: &str = "divergent-cart";

/// Single source of truth for cart contents.
///
/// Constructed with an injected storage backend and hydrated from it once.
/// After that, every item mutation writes the full item list back under the
/// storage key before returning. No operation returns an error: malformed
/// stored data hydrates as an empty cart, and failed writes are logged and
/// ignored so the in-memory cart stays authoritative.
///
/// The store never watches its backend for outside changes; a second store on
/// the same backend only sees this one's writes when it is constructed.
///
/// # Example
///
/// ```rust
/// use divergent_cache::MemoryStore;
/// use divergent_commerce::prelude::*;
///
/// let mut cart = CartStore::new(MemoryStore::new());
/// let scarf = Product::new("nova-accessory", "NOVA SIGNAL SCARF", Price::from(72));
///
/// cart.add_item(&scarf, "One Size");
/// cart.add_item(&scarf, "One Size");
///
/// assert_eq!(cart.item_count(), 2);
/// assert_eq!(cart.subtotal(), Price::from(144));
/// assert!(cart.is_open());
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    state: CartState,
    cache: Cache<S>,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store on `storage` under [`CART_STORAGE_KEY`] and hydrate it.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    /// Create a store under a custom key and hydrate it.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            state: CartState::new(),
            cache: Cache::new(storage),
            key: key.into(),
        };
        store.hydrate();
        store
    }

    fn hydrate(&mut self) {
        let items = match self.cache.get::<Vec<CartLineItem>>(&self.key) {
            Ok(Some(items)) => items,
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored cart");
                return;
            }
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(key = %self.key, error = %e, "discarding malformed stored cart");
                return;
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "could not read stored cart");
                return;
            }
        };

        if !has_unique_lines(&items) {
            tracing::warn!(key = %self.key, "discarding stored cart with duplicate lines");
            return;
        }

        tracing::debug!(key = %self.key, lines = items.len(), "hydrated cart");
        self.state.apply(CartAction::Hydrate(items));
    }

    fn dispatch(&mut self, action: CartAction) {
        let persists = action.persists();
        self.state.apply(action);
        if persists {
            self.persist();
        }
    }

    fn persist(&self) {
        match self.cache.set(&self.key, self.state.items()) {
            Ok(()) => {
                tracing::debug!(key = %self.key, lines = self.state.unique_item_count(), "persisted cart");
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to persist cart; keeping in-memory state");
            }
        }
    }

    /// Add one of `product` in `size`, merging into an existing line.
    ///
    /// Opens the cart drawer.
    pub fn add_item(&mut self, product: &Product, size: &str) {
        self.dispatch(CartAction::AddItem {
            product: product.clone(),
            size: size.to_string(),
        });
    }

    /// Remove the `(product_id, size)` line. Absent lines are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId, size: &str) {
        self.dispatch(CartAction::RemoveItem {
            product_id: product_id.clone(),
            size: size.to_string(),
        });
    }

    /// Set a line's quantity to `max(1, quantity)`.
    ///
    /// Use [`remove_item`](Self::remove_item) to take a line out of the cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, size: &str, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.clone(),
            size: size.to_string(),
            quantity,
        });
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    pub fn open_cart(&mut self) {
        self.dispatch(CartAction::OpenCart);
    }

    pub fn close_cart(&mut self) {
        self.dispatch(CartAction::CloseCart);
    }

    pub fn toggle_cart(&mut self) {
        self.dispatch(CartAction::ToggleCart);
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    /// Whether the cart drawer is showing.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Sum of price times quantity.
    pub fn subtotal(&self) -> Price {
        self.state.subtotal()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Key the items are persisted under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        self.cache.store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use divergent_cache::MemoryStore;
    use std::cell::Cell;

    fn product(id: &str, price: u32) -> Product {
        Product::new(id, id.to_uppercase(), Price::from(price))
    }

    /// Backend whose writes always fail; counts attempts.
    #[derive(Default)]
    struct FailingStore {
        writes: Cell<u32>,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
            self.writes.set(self.writes.get() + 1);
            Err(CacheError::StoreError("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(Vec::new())
        }
    }

    /// Backend whose reads fail.
    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Err(CacheError::StoreError("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_starts_empty_and_closed() {
        let store = CartStore::new(MemoryStore::new());
        assert!(store.items().is_empty());
        assert!(!store.is_open());
        assert_eq!(store.storage_key(), CART_STORAGE_KEY);
    }

    #[test]
    fn test_hydration_does_not_write_back() {
        let storage = MemoryStore::new();
        let _store = CartStore::new(&storage);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_every_mutation_writes_through() {
        let storage = MemoryStore::new();
        let mut store = CartStore::new(&storage);
        let tee = product("tee", 10);

        store.add_item(&tee, "M");
        let after_add = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(after_add.contains(r#""quantity":1"#));

        store.update_quantity(&tee.id, "M", 4);
        let after_update = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(after_update.contains(r#""quantity":4"#));

        store.remove_item(&tee.id, "M");
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_whole_prices_stored_as_integers() {
        let storage = MemoryStore::new();
        let mut store = CartStore::new(&storage);
        store.add_item(&product("hoodie", 165), "M");

        let stored = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert!(stored.contains(r#""price":165,"#), "{stored}");
        assert!(!stored.contains("165.0"));
    }

    #[test]
    fn test_noop_remove_still_persists() {
        let storage = MemoryStore::new();
        let mut store = CartStore::new(&storage);

        store.remove_item(&ProductId::new("ghost"), "M");

        assert!(store.items().is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_drawer_is_not_persisted() {
        let storage = MemoryStore::new();
        let mut store = CartStore::new(&storage);

        store.open_cart();
        store.toggle_cart();
        store.close_cart();

        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_does_not_touch_drawer() {
        let mut store = CartStore::new(MemoryStore::new());
        let tee = product("tee", 10);
        store.add_item(&tee, "M");
        assert!(store.is_open());

        store.remove_item(&tee.id, "M");
        assert!(store.is_open());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = CartStore::new(FailingStore::default());
        let tee = product("tee", 10);

        store.add_item(&tee, "M");
        store.add_item(&tee, "M");

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.subtotal(), Price::from(20));
        assert_eq!(store.storage().writes.get(), 2);
    }

    #[test]
    fn test_read_failure_hydrates_empty() {
        let store = CartStore::new(UnreadableStore);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_malformed_payloads_hydrate_empty() {
        for payload in [
            "42",
            "{not json",
            r#"{"items":[]}"#,
            r#"[{"size":"M","quantity":1}]"#,
            r#"[{"product":{"id":"t","name":"T","price":1},"size":"M","quantity":-1}]"#,
        ] {
            let store = CartStore::new(MemoryStore::with_entry(CART_STORAGE_KEY, payload));
            assert!(store.items().is_empty(), "payload {payload} should be discarded");
        }
    }

    #[test]
    fn test_partial_garbage_discards_everything() {
        let payload = r#"[
            {"product":{"id":"t","name":"T","price":1},"size":"M","quantity":2},
            {"product":{"id":"u","name":"U"},"size":"M","quantity":1}
        ]"#;
        let store = CartStore::new(MemoryStore::with_entry(CART_STORAGE_KEY, payload));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_duplicate_lines_in_storage_are_discarded() {
        let line = r#"{"product":{"id":"t","name":"T","price":1},"size":"M","quantity":1}"#;
        let payload = format!("[{line},{line}]");
        let store = CartStore::new(MemoryStore::with_entry(CART_STORAGE_KEY, payload));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStore::new();
        let mut store = CartStore::with_key(&storage, "staging-cart");
        store.add_item(&product("tee", 10), "S");

        assert!(storage.get("staging-cart").unwrap().is_some());
        assert!(storage.get(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let storage = MemoryStore::new();
        let mut store = CartStore::new(&storage);
        store.add_item(&product("tee", 10), "S");

        store.clear();

        assert!(store.items().is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }
}
