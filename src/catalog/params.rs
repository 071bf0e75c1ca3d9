//! Query parameters for product listing
//!
//! One instance arrives per list request, typically deserialized from a
//! query string by the HTTP collaborator. Everything that has a safe
//! default is normalized in accessor methods rather than rejected: page
//! index clamps to 1, page size clamps into [1, 50], an unknown sort token
//! deserializes to the name fallback. The raw fields are kept as supplied;
//! normalization never mutates the struct.

use serde::{Deserialize, Serialize};

/// Default page size of the original catalog API
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Upper bound on caller-supplied page sizes
pub const MAX_PAGE_SIZE: usize = 50;

/// Sort key for product listings.
///
/// Unrecognized tokens fall back to [`ProductSort::Name`], the deterministic
/// default; paging without a stable order is undefined, so there is always
/// some sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ProductSort {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "priceAsc")]
    PriceAsc,
    #[serde(rename = "priceDesc")]
    PriceDesc,
}

impl ProductSort {
    /// Map a caller-supplied sort token; unknown tokens normalize to the
    /// name fallback rather than failing
    pub fn from_token(token: &str) -> Self {
        match token {
            "priceAsc" => ProductSort::PriceAsc,
            "priceDesc" => ProductSort::PriceDesc,
            _ => ProductSort::Name,
        }
    }
}

impl<'de> Deserialize<'de> for ProductSort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(ProductSort::from_token(&token))
    }
}

/// Parameters for one product list request
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductParams {
    /// Free-text search over product names, case-insensitive substring
    pub search: Option<String>,

    /// Restrict to one brand
    pub brand_id: Option<i64>,

    /// Restrict to one product type
    pub type_id: Option<i64>,

    /// Sort key; unknown tokens fall back to name ascending
    pub sort: ProductSort,

    /// Page number (starts at 1)
    pub page_index: usize,

    /// Number of items per page
    pub page_size: usize,
}

impl Default for ProductParams {
    fn default() -> Self {
        Self {
            search: None,
            brand_id: None,
            type_id: None,
            sort: ProductSort::Name,
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductParams {
    /// Get the page index, ensuring minimum of 1
    pub fn page_index(&self) -> usize {
        self.page_index.max(1)
    }

    /// Get the page size, clamped into [1, MAX_PAGE_SIZE]
    pub fn page_size(&self) -> usize {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// The search text, lowercased, if non-empty
    pub fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Rows to skip for the requested window; never negative because the
    /// page index is clamped to 1 first
    pub fn skip(&self) -> usize {
        (self.page_index() - 1) * self.page_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ProductParams::default();
        assert_eq!(params.page_index(), 1);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.sort, ProductSort::Name);
        assert_eq!(params.skip(), 0);
        assert!(params.search_term().is_none());
    }

    #[test]
    fn test_page_index_clamps_to_one() {
        let params = ProductParams {
            page_index: 0,
            ..Default::default()
        };
        assert_eq!(params.page_index(), 1);
        assert_eq!(params.skip(), 0);
    }

    #[test]
    fn test_page_size_clamps_into_bounds() {
        let too_big = ProductParams {
            page_size: 500,
            ..Default::default()
        };
        assert_eq!(too_big.page_size(), MAX_PAGE_SIZE);

        let too_small = ProductParams {
            page_size: 0,
            ..Default::default()
        };
        assert_eq!(too_small.page_size(), 1);
    }

    #[test]
    fn test_skip_from_page_window() {
        let params = ProductParams {
            page_index: 3,
            page_size: 5,
            ..Default::default()
        };
        assert_eq!(params.skip(), 10);
    }

    #[test]
    fn test_search_term_normalizes() {
        let params = ProductParams {
            search: Some("  Blue ".to_string()),
            ..Default::default()
        };
        assert_eq!(params.search_term().as_deref(), Some("blue"));

        let blank = ProductParams {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(blank.search_term().is_none());
    }

    #[test]
    fn test_deserializes_from_query_shape() {
        let params: ProductParams = serde_json::from_value(serde_json::json!({
            "search": "boot",
            "brandId": 2,
            "sort": "priceDesc",
            "pageIndex": 2,
            "pageSize": 10
        }))
        .unwrap();
        assert_eq!(params.brand_id, Some(2));
        assert_eq!(params.sort, ProductSort::PriceDesc);
        assert_eq!(params.page_index, 2);
    }

    #[test]
    fn test_unknown_sort_token_falls_back_to_name() {
        let params: ProductParams =
            serde_json::from_value(serde_json::json!({ "sort": "popularity" })).unwrap();
        assert_eq!(params.sort, ProductSort::Name);
    }
}
