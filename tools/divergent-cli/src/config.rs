//! CLI configuration.

use anyhow::{Context, Result};
use divergent_commerce::cart::CART_STORAGE_KEY;
use divergent_commerce::checkout::ShippingPolicy;
use divergent_commerce::Price;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_NAMES: [&str; 3] = ["divergent.toml", ".divergent.toml", "divergent.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where cart data is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout pricing.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Check the config for values that cannot work.
    ///
    /// Returns `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.storage.path.trim().is_empty() {
            errors.push("storage.path must not be empty".to_string());
        }

        if self.storage.cart_key.trim().is_empty() {
            errors.push("storage.cart_key must not be empty".to_string());
        } else if self.storage.cart_key != CART_STORAGE_KEY {
            warnings.push(format!(
                "storage.cart_key '{}' differs from '{}'; carts saved under the old key will not load",
                self.storage.cart_key, CART_STORAGE_KEY
            ));
        }

        if self.checkout.flat_shipping_rate > self.checkout.free_shipping_threshold {
            warnings.push(
                "checkout.flat_shipping_rate is larger than checkout.free_shipping_threshold"
                    .to_string(),
            );
        }

        (errors, warnings)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON document holding every stored key, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_storage_path")]
    pub path: String,

    /// Key the cart is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_storage_path() -> String {
    ".divergent/storage.json".to_string()
}

fn default_cart_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            cart_key: default_cart_key(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Subtotal at or above which shipping is free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Price,

    /// Shipping charged below the threshold.
    #[serde(default = "default_flat_shipping_rate")]
    pub flat_shipping_rate: Price,
}

fn default_free_shipping_threshold() -> Price {
    ShippingPolicy::default().free_shipping_threshold
}

fn default_flat_shipping_rate() -> Price {
    ShippingPolicy::default().flat_rate
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping_rate: default_flat_shipping_rate(),
        }
    }
}

impl CheckoutConfig {
    /// The shipping policy these settings describe.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            free_shipping_threshold: self.free_shipping_threshold,
            flat_rate: self.flat_shipping_rate,
        }
    }
}

/// Generate a default divergent.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Divergent storefront configuration

[storage]
path = "{path}"
cart_key = "{key}"

[checkout]
free_shipping_threshold = 150
flat_shipping_rate = 12
"#,
        path = default_storage_path(),
        key = CART_STORAGE_KEY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.storage.cart_key, CART_STORAGE_KEY);
        assert_eq!(config.checkout.shipping_policy(), ShippingPolicy::default());
        let (errors, warnings) = config.validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.path, ".divergent/storage.json");
        assert_eq!(config.checkout.free_shipping_threshold, Price::from(150));
    }

    #[test]
    fn test_validate_flags_bad_values() {
        let mut config = CliConfig::default();
        config.storage.cart_key = String::new();
        config.checkout.flat_shipping_rate = Price::from(500);

        let (errors, warnings) = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("divergent.json");
        std::fs::write(&path, r#"{"storage":{"cart_key":"staging-cart"}}"#).unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.cart_key, "staging-cart");
        assert_eq!(config.storage.path, ".divergent/storage.json");
    }
}
