//! Catalog providers.
//!
//! The cart never owns catalog data; it copies whatever `Product` the
//! presentation layer hands it. Providers are the read-only source of those
//! records.

use crate::catalog::{
    Exhibition, ExhibitionStatus, ImageTone, Product, ProductDetails, ProductImage, ProductType,
};
use crate::error::CommerceError;
use crate::ids::{ExhibitionId, ProductId};
use crate::price::Price;

/// Read-only source of sellable products.
pub trait CatalogProvider {
    /// Every product, in display order.
    fn products(&self) -> &[Product];

    /// Every exhibition, in display order.
    fn exhibitions(&self) -> &[Exhibition];

    /// Look up a product by ID.
    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| &p.id == id)
    }

    /// Look up a product by slug.
    fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.slug == slug)
    }

    /// Resolve a slug or ID, failing with `ProductNotFound`.
    fn resolve(&self, slug_or_id: &str) -> Result<&Product, CommerceError> {
        self.product_by_slug(slug_or_id)
            .or_else(|| self.products().iter().find(|p| p.id == *slug_or_id))
            .ok_or_else(|| CommerceError::ProductNotFound(slug_or_id.to_string()))
    }

    /// Products released in `exhibition`.
    fn products_in(&self, exhibition: &ExhibitionId) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.exhibition_id.as_ref() == Some(exhibition))
            .collect()
    }
}

/// In-memory catalog built from a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    exhibitions: Vec<Exhibition>,
}

impl StaticCatalog {
    /// Build a catalog from explicit records.
    pub fn new(products: Vec<Product>, exhibitions: Vec<Exhibition>) -> Self {
        Self {
            products,
            exhibitions,
        }
    }

    /// The Divergent Studios catalog: EXHIBITION 001 and its three pieces.
    pub fn divergent() -> Self {
        let nova = ExhibitionId::new("nova");
        let tags = || {
            vec![
                "LIMITED".to_string(),
                "EXHIBITION 001".to_string(),
                "NOVA".to_string(),
            ]
        };

        let exhibitions = vec![Exhibition {
            id: nova.clone(),
            title: "EXHIBITION 001: NOVA".to_string(),
            slug: "nova".to_string(),
            meaning: "A new beginning. The first star of Divergent Studios.".to_string(),
            statement: vec![
                "NOVA is the ignition of our studio language.".to_string(),
                "It is a controlled spark: new textures, sharper silhouettes, and a luminous edge."
                    .to_string(),
                "Every piece is a fragment of a larger installation. Limited, deliberate, and fleeting."
                    .to_string(),
            ],
            year: "2026".to_string(),
            status: ExhibitionStatus::Live,
            edition: "Limited run. No restock.".to_string(),
        }];

        let products = vec![
            Product {
                id: ProductId::new("nova-hoodie"),
                name: "NOVA RELIC HOODIE".to_string(),
                slug: "nova-relic-hoodie".to_string(),
                price: Price::from(165),
                description: "A sculpted heavyweight hoodie with dimensional seams and an archival finish. Built to feel like a gallery artifact.".to_string(),
                details: details(
                    "100% brushed cotton fleece",
                    "Oversized, dropped shoulder",
                    "520 GSM",
                    "Cold wash, hang dry",
                ),
                images: vec![
                    image("hoodie-1", "NOVA hoodie front", ImageTone::Rose),
                    image("hoodie-2", "NOVA hoodie back", ImageTone::Slate),
                    image("hoodie-3", "NOVA hoodie detail", ImageTone::Ember),
                ],
                exhibition_id: Some(nova.clone()),
                tags: tags(),
                product_type: ProductType::Hoodie,
            },
            Product {
                id: ProductId::new("nova-pants"),
                name: "NOVA DRIFT PANTS".to_string(),
                slug: "nova-drift-pants".to_string(),
                price: Price::from(138),
                description: "Tapered utility trousers with a soft structure and gallery-grade drape. Built for movement through curated spaces.".to_string(),
                details: details(
                    "Cotton nylon blend",
                    "Relaxed taper",
                    "390 GSM",
                    "Cold wash, low tumble",
                ),
                images: vec![
                    image("pants-1", "NOVA pants front", ImageTone::Slate),
                    image("pants-2", "NOVA pants back", ImageTone::Ivory),
                    image("pants-3", "NOVA pants detail", ImageTone::Rose),
                ],
                exhibition_id: Some(nova.clone()),
                tags: tags(),
                product_type: ProductType::Pants,
            },
            Product {
                id: ProductId::new("nova-accessory"),
                name: "NOVA SIGNAL SCARF".to_string(),
                slug: "nova-signal-scarf".to_string(),
                price: Price::from(72),
                description: "An abstract knit accessory that reads like a gallery placard. Designed to punctuate the exhibition uniform.".to_string(),
                details: details(
                    "Merino blend knit",
                    "One size",
                    "220 GSM",
                    "Hand wash, lay flat",
                ),
                images: vec![
                    image("accessory-1", "NOVA scarf", ImageTone::Ember),
                    image("accessory-2", "NOVA scarf detail", ImageTone::Rose),
                    image("accessory-3", "NOVA scarf drape", ImageTone::Ivory),
                ],
                exhibition_id: Some(nova),
                tags: tags(),
                product_type: ProductType::Accessory,
            },
        ];

        Self::new(products, exhibitions)
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn exhibitions(&self) -> &[Exhibition] {
        &self.exhibitions
    }
}

fn details(material: &str, fit: &str, weight: &str, care: &str) -> ProductDetails {
    ProductDetails {
        material: material.to_string(),
        fit: fit.to_string(),
        weight: weight.to_string(),
        care: care.to_string(),
    }
}

fn image(id: &str, alt: &str, tone: ImageTone) -> ProductImage {
    ProductImage {
        id: id.to_string(),
        alt: alt.to_string(),
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divergent_catalog_contents() {
        let catalog = StaticCatalog::divergent();
        assert_eq!(catalog.products().len(), 3);
        assert_eq!(catalog.exhibitions().len(), 1);
        assert!(catalog.exhibitions()[0].is_live());
    }

    #[test]
    fn test_lookup_by_slug_and_id() {
        let catalog = StaticCatalog::divergent();

        let hoodie = catalog.product_by_slug("nova-relic-hoodie").unwrap();
        assert_eq!(hoodie.price, Price::from(165));

        let same = catalog.product(&ProductId::new("nova-hoodie")).unwrap();
        assert_eq!(same, hoodie);
    }

    #[test]
    fn test_resolve_accepts_slug_or_id() {
        let catalog = StaticCatalog::divergent();
        assert_eq!(
            catalog.resolve("nova-signal-scarf").unwrap().id.as_str(),
            "nova-accessory"
        );
        assert_eq!(catalog.resolve("nova-pants").unwrap().slug, "nova-drift-pants");
        assert!(matches!(
            catalog.resolve("nova-cape"),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_products_in_exhibition() {
        let catalog = StaticCatalog::divergent();
        assert_eq!(catalog.products_in(&ExhibitionId::new("nova")).len(), 3);
        assert!(catalog.products_in(&ExhibitionId::new("eclipse")).is_empty());
    }
}
