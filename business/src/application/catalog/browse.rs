use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::sorting::sort_products;
use crate::domain::catalog::use_cases::browse::{BrowseProductsParams, BrowseProductsUseCase};
use crate::domain::logger::Logger;

pub struct BrowseProductsUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseProductsUseCase for BrowseProductsUseCaseImpl {
    async fn execute(&self, params: BrowseProductsParams) -> Result<Vec<Product>, CatalogError> {
        let mut products = if params.categories.is_empty() {
            self.logger.info("Fetching the full product listing");
            self.catalog.fetch_all().await?
        } else {
            self.logger.info(&format!(
                "Fetching products for {} selected categories",
                params.categories.len()
            ));

            // One fetch per category, in flight at the same time. Results
            // are joined back in the order the categories were given so
            // the first occurrence of a duplicate id wins.
            let handles: Vec<_> = params
                .categories
                .iter()
                .map(|category| {
                    let catalog = Arc::clone(&self.catalog);
                    let category = category.clone();
                    tokio::spawn(async move { catalog.fetch_by_category(&category).await })
                })
                .collect();

            let mut merged = Vec::new();
            for handle in handles {
                let batch = handle.await.map_err(|_| CatalogError::Unavailable)??;
                merged.extend(batch);
            }

            let mut seen = HashSet::new();
            merged.retain(|product| seen.insert(product.id));
            merged
        };

        sort_products(&mut products, params.sort);

        self.logger
            .info(&format!("Listing {} products", products.len()));
        Ok(products)
    }
}
