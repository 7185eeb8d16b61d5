//! Key-value store trait and the typed wrapper built on it.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::CacheError;

/// A synchronous string-keyed store with local-storage semantics.
///
/// Implementations take `&self` so one backend can be shared between the
/// components that persist through it.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), CacheError>;

    /// List every key currently stored.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone, Default)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// value does not deserialize as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let tracks: Option<Vec<Track>> = cache.get("divergent-audio-tracks")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("divergent-cart", &items)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Track {
        title: String,
        plays: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::new(MemoryStore::new());
        let tracks = vec![Track {
            title: "Signal".to_string(),
            plays: 3,
        }];

        cache.set("tracks", &tracks).unwrap();
        let loaded: Option<Vec<Track>> = cache.get("tracks").unwrap();
        assert_eq!(loaded, Some(tracks));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let loaded: Option<Vec<Track>> = cache.get("nothing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let store = MemoryStore::new();
        store.set("tracks", "42").unwrap();

        let cache = Cache::new(store);
        let result: Result<Option<Vec<Track>>, _> = cache.get("tracks");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_shared_store_by_reference() {
        let store = MemoryStore::new();
        {
            let cache = Cache::new(&store);
            cache.set("muted", &true).unwrap();
        }
        assert_eq!(store.get("muted").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_delete_and_exists() {
        let cache = Cache::new(MemoryStore::new());
        cache.set("muted", &false).unwrap();
        assert!(cache.exists("muted").unwrap());

        cache.delete("muted").unwrap();
        assert!(!cache.exists("muted").unwrap());
        assert!(cache.keys().unwrap().is_empty());
    }
}
