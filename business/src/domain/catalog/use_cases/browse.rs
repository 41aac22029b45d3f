use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::sorting::SortKey;

pub struct BrowseProductsParams {
    /// Empty means the full catalog, unfiltered.
    pub categories: Vec<String>,
    pub sort: SortKey,
}

#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, CatalogError>;
}
