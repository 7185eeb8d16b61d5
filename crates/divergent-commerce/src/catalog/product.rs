//! Product types.

use crate::error::CommerceError;
use crate::ids::{ExhibitionId, ProductId};
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Sizes offered for apparel.
pub const APPAREL_SIZES: [&str; 4] = ["S", "M", "L", "XL"];

/// The only size offered for accessories.
pub const ONE_SIZE: &str = "One Size";

/// Product type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductType {
    #[default]
    Hoodie,
    Pants,
    Accessory,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Hoodie => "Hoodie",
            ProductType::Pants => "Pants",
            ProductType::Accessory => "Accessory",
        }
    }
}

/// Colour tone used to render a product image placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageTone {
    Rose,
    #[default]
    Slate,
    Ember,
    Ivory,
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductImage {
    pub id: String,
    /// Alt text.
    pub alt: String,
    #[serde(default)]
    pub tone: ImageTone,
}

/// Museum-plaque style product details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProductDetails {
    pub material: String,
    pub fit: String,
    pub weight: String,
    pub care: String,
}

/// A product in the catalog.
///
/// Serialized in camelCase so a persisted cart carries the same product shape
/// the storefront has always written. Only `id`, `name` and `price` are
/// required when reading one back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    pub name: String,
    /// URL-friendly slug (unique).
    #[serde(default)]
    pub slug: String,
    /// Unit price.
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: ProductDetails,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Exhibition (drop) this product was released in.
    #[serde(default)]
    pub exhibition_id: Option<ExhibitionId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type", default)]
    pub product_type: ProductType,
}

impl Product {
    /// Create a product with only the fields the cart depends on.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            price,
            description: String::new(),
            details: ProductDetails::default(),
            images: Vec::new(),
            exhibition_id: None,
            tags: Vec::new(),
            product_type: ProductType::default(),
        }
    }

    /// Set the product type.
    pub fn with_type(mut self, product_type: ProductType) -> Self {
        self.product_type = product_type;
        self
    }

    /// Check if this product is sold in a single size.
    pub fn is_one_size(&self) -> bool {
        self.product_type == ProductType::Accessory
    }

    /// Sizes a customer can pick for this product.
    pub fn available_sizes(&self) -> Vec<&'static str> {
        if self.is_one_size() {
            vec![ONE_SIZE]
        } else {
            APPAREL_SIZES.to_vec()
        }
    }

    /// Size preselected on the product page.
    pub fn default_size(&self) -> &'static str {
        if self.is_one_size() {
            ONE_SIZE
        } else {
            "M"
        }
    }

    /// Check if `size` is offered (case-insensitive).
    pub fn offers_size(&self, size: &str) -> bool {
        self.available_sizes()
            .iter()
            .any(|s| s.eq_ignore_ascii_case(size))
    }

    /// Canonical spelling of `size`, if offered.
    pub fn canonical_size(&self, size: &str) -> Option<&'static str> {
        self.available_sizes()
            .into_iter()
            .find(|s| s.eq_ignore_ascii_case(size))
    }

    /// Canonical spelling of `size`, or `UnknownSize` listing what is offered.
    pub fn require_size(&self, size: &str) -> Result<&'static str, CommerceError> {
        self.canonical_size(size)
            .ok_or_else(|| CommerceError::UnknownSize {
                product: self.name.clone(),
                size: size.to_string(),
                available: self.available_sizes().join(", "),
            })
    }

    /// Tone of the first image, used for thumbnails.
    pub fn thumbnail_tone(&self) -> ImageTone {
        self.images.first().map(|i| i.tone).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apparel_sizes() {
        let hoodie = Product::new("nova-hoodie", "NOVA RELIC HOODIE", Price::from(165));
        assert_eq!(hoodie.available_sizes(), vec!["S", "M", "L", "XL"]);
        assert_eq!(hoodie.default_size(), "M");
        assert!(hoodie.offers_size("xl"));
        assert!(!hoodie.offers_size(ONE_SIZE));
        assert_eq!(hoodie.canonical_size("l"), Some("L"));
    }

    #[test]
    fn test_accessory_is_one_size() {
        let scarf = Product::new("nova-accessory", "NOVA SIGNAL SCARF", Price::from(72))
            .with_type(ProductType::Accessory);
        assert!(scarf.is_one_size());
        assert_eq!(scarf.default_size(), ONE_SIZE);
        assert!(!scarf.offers_size("M"));
        assert!(matches!(
            scarf.require_size("M"),
            Err(CommerceError::UnknownSize { .. })
        ));
        assert_eq!(scarf.require_size("one size").unwrap(), ONE_SIZE);
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let product = Product::new("nova-pants", "NOVA DRIFT PANTS", Price::from(138))
            .with_type(ProductType::Pants);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["type"], "Pants");
        assert!(json.get("exhibitionId").is_some());
        assert!(json.get("product_type").is_none());
    }

    #[test]
    fn test_minimal_product_deserializes() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","name":"Tee","price":10}"#).unwrap();
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.price, Price::from(10));
        assert_eq!(product.thumbnail_tone(), ImageTone::Slate);
    }

    #[test]
    fn test_product_without_price_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"id":"p1","name":"Tee"}"#);
        assert!(result.is_err());
    }
}
