//! Product domain entity
//!
//! Products are defined once at compile time and never mutated or persisted.

use serde::Serialize;

/// A purchasable catalog item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Product {
    /// Unique identifier used in URLs
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Non-negative price in the shop currency
    pub price: f64,
    /// Category, e.g. "mug" or "vase"
    #[serde(rename = "type")]
    pub product_type: &'static str,
    /// Image URL
    pub image: &'static str,
}

/// Optional filters applied when listing the catalog.
///
/// All filters are conjunctive; `None` means "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub product_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Check whether a product passes every filter that is set.
    ///
    /// An empty type string is treated the same as no type filter. Price
    /// bounds must compare true, so a NaN bound matches nothing.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(wanted) = self.product_type.as_deref().filter(|t| !t.is_empty()) {
            if product.product_type.to_lowercase() != wanted.to_lowercase() {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if !(product.price >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !(product.price <= max) {
                return false;
            }
        }
        true
    }
}

/// The storefront catalog. Slugs must stay unique.
pub static CATALOG: [Product; 8] = [
    Product {
        slug: "terra-mug",
        title: "Terra Mug",
        description: "Hand-thrown stoneware mug with a warm terracotta glaze.",
        price: 28.0,
        product_type: "mug",
        image: "https://images.unsplash.com/photo-1529107386315-e1a2ed48a620?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "olive-bowl",
        title: "Olive Bowl",
        description: "Muted olive glaze with a subtle matte finish.",
        price: 34.0,
        product_type: "bowl",
        image: "https://images.unsplash.com/photo-1533321942807-08e8a5f1a3f9?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "beige-plate",
        title: "Beige Dinner Plate",
        description: "Warm beige plate with light speckle texture.",
        price: 42.0,
        product_type: "plate",
        image: "https://images.unsplash.com/photo-1549880338-65ddcdfd017b?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "clay-vase",
        title: "Clay Vase",
        description: "Elegant tall vase inspired by natural forms.",
        price: 68.0,
        product_type: "vase",
        image: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "wheel-mug",
        title: "Wheel Mug",
        description: "Classic wheel-thrown mug with ergonomic handle.",
        price: 26.0,
        product_type: "mug",
        image: "https://images.unsplash.com/photo-1522335789203-aabd1fc54bc9?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "sand-bowl",
        title: "Sand Bowl",
        description: "Neutral sand-toned bowl for everyday use.",
        price: 30.0,
        product_type: "bowl",
        image: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "horizon-plate",
        title: "Horizon Plate",
        description: "Wide rim plate with horizon gradient glaze.",
        price: 48.0,
        product_type: "plate",
        image: "https://images.unsplash.com/photo-1515543237350-b3eea1ec8082?q=80&w=1600&auto=format&fit=crop",
    },
    Product {
        slug: "urban-vase",
        title: "Urban Vase",
        description: "Minimalist vase with soft clay brown finish.",
        price: 72.0,
        product_type: "vase",
        image: "https://images.unsplash.com/photo-1512203492609-8f7f6db6c9f9?q=80&w=1600&auto=format&fit=crop",
    },
];
