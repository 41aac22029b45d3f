use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Product;
use business::domain::catalog::services::CatalogService;

use crate::client::StoreApiClient;
use crate::dto::ProductDto;

pub struct CatalogStoreApi {
    client: StoreApiClient,
}

impl CatalogStoreApi {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    async fn fetch_product_list(&self, url: String) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        let products: Vec<ProductDto> = response
            .json()
            .await
            .map_err(|_| CatalogError::InvalidResponse)?;

        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }
}

#[async_trait]
impl CatalogService for CatalogStoreApi {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch_product_list(self.client.products_url()).await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Product, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(id))
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::ProductNotFound);
        }
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        // The catalog answers an unknown id with 200 and an empty body,
        // which fails to decode.
        let product: ProductDto = response
            .json()
            .await
            .map_err(|_| CatalogError::ProductNotFound)?;

        Ok(product.into_domain())
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.fetch_product_list(self.client.category_url(category))
            .await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.categories_url())
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        response
            .json()
            .await
            .map_err(|_| CatalogError::InvalidResponse)
    }
}
