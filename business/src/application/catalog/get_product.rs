use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::get_product::GetProductByIdUseCase;
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, id: u64) -> Result<Product, CatalogError> {
        self.logger.info(&format!("Fetching product {}", id));
        let product = self.catalog.fetch_by_id(id).await?;
        self.logger
            .info(&format!("Fetched product {}: {}", product.id, product.title));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::model::Rating;

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
    async fn should_return_product_when_catalog_has_it() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_id()
            .withf(|id| *id == 3)
            .returning(|id| {
                Ok(Product::from_catalog(
                    id,
                    "Mens Cotton Jacket".to_string(),
                    BigDecimal::from_str("55.99").unwrap(),
                    "great outerwear jackets".to_string(),
                    "men's clothing".to_string(),
                    "https://example.com/jacket.png".to_string(),
                    Rating {
                        rate: 4.7,
                        count: 500,
                    },
                ))
            });

        let use_case = GetProductByIdUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(3).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().title, "Mens Cotton Jacket");
    }

    #[tokio::test]
    async fn should_propagate_not_found_from_catalog() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_fetch_by_id()
            .returning(|_| Err(CatalogError::ProductNotFound));

        let use_case = GetProductByIdUseCaseImpl {
            catalog: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(9999).await;

        assert!(matches!(result.unwrap_err(), CatalogError::ProductNotFound));
    }
}
