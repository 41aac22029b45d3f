use reqwest::Client;

/// Shared HTTP client configuration for the store catalog API.
pub struct StoreApiClient {
    pub client: Client,
    pub base_url: String,
}

impl StoreApiClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the full product listing endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the single-product endpoint URL.
    pub fn product_url(&self, id: u64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Returns the per-category listing endpoint URL.
    pub fn category_url(&self, category: &str) -> String {
        format!("{}/products/category/{}", self.base_url, category)
    }

    /// Returns the category tag listing endpoint URL.
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_from_base_url() {
        let client = StoreApiClient::new("https://fakestoreapi.com".to_string());

        assert_eq!(client.products_url(), "https://fakestoreapi.com/products");
        assert_eq!(client.product_url(7), "https://fakestoreapi.com/products/7");
        assert_eq!(
            client.category_url("jewelery"),
            "https://fakestoreapi.com/products/category/jewelery"
        );
        assert_eq!(
            client.categories_url(),
            "https://fakestoreapi.com/products/categories"
        );
    }
}
