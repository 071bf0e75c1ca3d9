//! Catalog entities: read-only projections owned by the storage engine

use crate::core::entity::Entity;
use serde::{Deserialize, Serialize};

/// A product brand; small reference collection, listed without paging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

impl Entity for Brand {
    fn resource_name() -> &'static str {
        "brands"
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// A product type; small reference collection, listed without paging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
}

impl Entity for ProductType {
    fn resource_name() -> &'static str {
        "product_types"
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// A catalog product.
///
/// Prices are integer cents so ordering is total and arithmetic exact.
/// `brand` and `product_type` are navigation data: `None` until a
/// specification requests the corresponding include path ("brand",
/// "product_type").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub picture_url: String,
    pub brand_id: i64,
    pub type_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
}

impl Product {
    /// Navigation path constant for the brand relation
    pub const INCLUDE_BRAND: &'static str = "brand";

    /// Navigation path constant for the product type relation
    pub const INCLUDE_TYPE: &'static str = "product_type";
}

impl Entity for Product {
    fn resource_name() -> &'static str {
        "products"
    }

    fn id(&self) -> i64 {
        self.id
    }
}
