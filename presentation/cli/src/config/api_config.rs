/// Configuration for the remote store catalog API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_API_BASE_URL: Catalog base URL (default: "https://fakestoreapi.com")
    pub fn from_env() -> Self {
        let base_url = std::env::var("STOREFRONT_API_BASE_URL")
            .unwrap_or_else(|_| "https://fakestoreapi.com".to_string());

        Self { base_url }
    }
}
