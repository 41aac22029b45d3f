use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Port over the remote product catalog. Read-only: the storefront never
/// writes back to the catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
    async fn fetch_by_id(&self, id: u64) -> Result<Product, CatalogError>;
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}
