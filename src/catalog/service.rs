//! Catalog facade: the read contract exposed to collaborators
//!
//! Owns one repository per entity collection and pairs count with page for
//! listings. HTTP routing, DTO mapping and seeding live in collaborators;
//! this is a library-level contract, not a network-facing one.

use crate::catalog::entity::{Brand, Product, ProductType};
use crate::catalog::params::ProductParams;
use crate::catalog::specs;
use crate::core::error::CatalogResult;
use crate::core::query::Pagination;
use crate::core::repository::Repository;
use crate::core::store::EntityStore;
use std::sync::Arc;

/// Read-only catalog over caller-supplied stores
pub struct Catalog<PS, BS, TS>
where
    PS: EntityStore<Product>,
    BS: EntityStore<Brand>,
    TS: EntityStore<ProductType>,
{
    products: Repository<Product, PS>,
    brands: Repository<Brand, BS>,
    types: Repository<ProductType, TS>,
}

impl<PS, BS, TS> Catalog<PS, BS, TS>
where
    PS: EntityStore<Product>,
    BS: EntityStore<Brand>,
    TS: EntityStore<ProductType>,
{
    /// Create a catalog over explicit store handles
    pub fn new(products: Arc<PS>, brands: Arc<BS>, types: Arc<TS>) -> Self {
        Self {
            products: Repository::new(products),
            brands: Repository::new(brands),
            types: Repository::new(types),
        }
    }

    /// List one page of products with the total match count.
    ///
    /// Runs the count spec and the page spec — criteria-equivalent by
    /// construction — and pairs the results into a [`Pagination`].
    pub async fn list_products(
        &self,
        params: &ProductParams,
    ) -> CatalogResult<Pagination<Product>> {
        let page_spec = specs::product_page(params)?;
        let count_spec = specs::product_count(params)?;

        let count = self.products.count(&count_spec).await?;
        let data = self.products.list(&page_spec).await?;

        tracing::debug!(
            count,
            rows = data.len(),
            page_index = params.page_index(),
            "listed products"
        );
        Ok(Pagination::new(
            params.page_index(),
            params.page_size(),
            count,
            data,
        ))
    }

    /// Get one product by id with brand and type attached
    pub async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        let spec = specs::product_by_id(id)?;
        self.products.get_by_id(id, &spec).await
    }

    /// Every brand, unfiltered and unpaged
    pub async fn brands(&self) -> CatalogResult<Vec<Brand>> {
        self.brands.list_all().await
    }

    /// Every product type, unfiltered and unpaged
    pub async fn product_types(&self) -> CatalogResult<Vec<ProductType>> {
        self.types.list_all().await
    }
}
