//! Specification builders for the product catalog
//!
//! The variation between catalog queries is entirely data — which predicate,
//! which includes, which window — so these are plain functions returning
//! populated [`Specification`] values, not specification subtypes.
//!
//! The page and count builders derive their predicate from the same shared
//! criteria constructor. That is the invariant making a count computed from
//! one numerically valid for a page computed from the other.

use crate::catalog::entity::Product;
use crate::catalog::params::{ProductParams, ProductSort};
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::field::SortValue;
use crate::core::spec::{Criteria, OrderKey, Specification};
use std::sync::Arc;

/// Build the specification for one page of products: criteria, one order
/// key, both navigation includes, and the paging window from the params.
pub fn product_page(params: &ProductParams) -> CatalogResult<Specification<Product>> {
    let criteria = product_criteria(params)?;
    Ok(Specification::builder()
        .shared_criteria(criteria)
        .order_by(order_key(params.sort))
        .include(Product::INCLUDE_BRAND)
        .include(Product::INCLUDE_TYPE)
        .page(params.skip(), params.page_size())
        .build())
}

/// Build the count-only specification: identical criteria, no ordering, no
/// includes, no paging.
pub fn product_count(params: &ProductParams) -> CatalogResult<Specification<Product>> {
    let criteria = product_criteria(params)?;
    Ok(Specification::builder().shared_criteria(criteria).build())
}

/// Build the specification for a single product lookup by id, with both
/// navigation includes attached.
pub fn product_by_id(id: i64) -> CatalogResult<Specification<Product>> {
    if id < 1 {
        return Err(CatalogError::invalid(format!(
            "product id must be positive, got {id}"
        )));
    }
    Ok(Specification::builder()
        .criteria(move |p: &Product| p.id == id)
        .include(Product::INCLUDE_BRAND)
        .include(Product::INCLUDE_TYPE)
        .build())
}

/// AND-combination of the supplied filters; no filters means match-all.
///
/// The id filters are validated here, once, so the page and count builders
/// cannot diverge on what counts as acceptable input.
fn product_criteria(params: &ProductParams) -> CatalogResult<Criteria<Product>> {
    for (field, value) in [("brand_id", params.brand_id), ("type_id", params.type_id)] {
        if let Some(id) = value
            && id < 1
        {
            return Err(CatalogError::invalid(format!(
                "{field} must be positive, got {id}"
            )));
        }
    }

    let search = params.search_term();
    let brand_id = params.brand_id;
    let type_id = params.type_id;

    Ok(Arc::new(move |product: &Product| {
        search
            .as_deref()
            .is_none_or(|term| product.name.to_lowercase().contains(term))
            && brand_id.is_none_or(|id| product.brand_id == id)
            && type_id.is_none_or(|id| product.type_id == id)
    }))
}

fn order_key(sort: ProductSort) -> OrderKey<Product> {
    match sort {
        ProductSort::Name => OrderKey::asc(|p: &Product| SortValue::from(p.name.clone())),
        ProductSort::PriceAsc => OrderKey::asc(|p: &Product| SortValue::from(p.price_cents)),
        ProductSort::PriceDesc => OrderKey::desc(|p: &Product| SortValue::from(p.price_cents)),
    }
}
