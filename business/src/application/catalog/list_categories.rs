use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct ListCategoriesUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        self.logger.info("Fetching category list");
        let categories = self.catalog.fetch_categories().await?;
        self.logger
            .info(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::model::Product;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogService for Catalog {
            async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
            async fn fetch_by_id(&self, id: u64) -> Result<Product, CatalogError>;
            async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;
            async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_flat_category_list() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog.expect_fetch_categories().returning(|| {
            Ok(vec![
                "electronics".to_string(),
                "jewelery".to_string(),
                "men's clothing".to_string(),
                "women's clothing".to_string(),
            ])
        });

        let use_case = ListCategoriesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn should_propagate_catalog_failure() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_categories()
            .returning(|| Err(CatalogError::Unavailable));

        let use_case = ListCategoriesUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), CatalogError::Unavailable));
    }
}
