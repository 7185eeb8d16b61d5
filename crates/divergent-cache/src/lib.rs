//! Key-value storage seam for the Divergent storefront.
//!
//! Models browser local storage: a synchronous, string-keyed, string-valued
//! store. Backends are swappable without touching the code that persists
//! through them:
//!
//! - [`MemoryStore`] - process-local map, used in tests
//! - [`FileStore`] - a single JSON document on disk, for non-browser targets
//!
//! [`Cache`] layers automatic JSON serialization on top of any backend.
//!
//! # Example
//!
//! ```rust
//! use divergent_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     muted: bool,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("divergent-prefs", &Prefs { muted: true })?;
//!
//! let prefs: Option<Prefs> = cache.get("divergent-prefs")?;
//! assert_eq!(prefs, Some(Prefs { muted: true }));
//! # Ok::<(), divergent_cache::CacheError>(())
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
