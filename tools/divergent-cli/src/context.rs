//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use divergent_cache::FileStore;
use divergent_commerce::cart::CartStore;
use divergent_commerce::catalog::StaticCatalog;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Product catalog.
    pub catalog: StaticCatalog,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: StaticCatalog::divergent(),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Location of the storage document.
    pub fn storage_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.path)
    }

    /// Open the storage document and hydrate the cart from it.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let path = self.storage_path();
        let storage = FileStore::open(&path)
            .with_context(|| format!("Failed to open storage: {}", path.display()))?;
        Ok(CartStore::with_key(storage, self.config.storage.cart_key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use divergent_commerce::catalog::CatalogProvider;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("divergent.toml"),
            "[storage]\ncart_key = \"studio-cart\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.storage.cart_key, "studio-cart");
        assert_eq!(path, dir.path().join("divergent.toml"));
    }

    #[test]
    fn test_open_cart_uses_configured_storage() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.path().to_path_buf(),
            catalog: StaticCatalog::divergent(),
        };
        ctx.config.storage.cart_key = "studio-cart".to_string();

        {
            let mut cart = ctx.open_cart().unwrap();
            let scarf = ctx.catalog.product_by_slug("nova-signal-scarf").unwrap();
            cart.add_item(scarf, scarf.default_size());
        }

        let cart = ctx.open_cart().unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.storage_key(), "studio-cart");
        assert!(ctx.storage_path().exists());
    }

    #[test]
    fn test_corrupt_storage_opens_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.path().to_path_buf(),
            catalog: StaticCatalog::divergent(),
        };
        let path = ctx.storage_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        for content in [r#"{"divergent-cart": ["#, "[]", r#"{"divergent-cart": []}"#] {
            std::fs::write(&path, content).unwrap();

            let mut cart = ctx.open_cart().unwrap();
            assert!(cart.items().is_empty(), "{content}");

            let pants = ctx.catalog.product_by_slug("nova-drift-pants").unwrap();
            cart.add_item(pants, "L");
            assert_eq!(ctx.open_cart().unwrap().item_count(), 1);
        }
    }
}
