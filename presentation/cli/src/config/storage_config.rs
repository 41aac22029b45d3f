/// Configuration for local cart storage.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_DATA_DIR: Directory for storage slots (default: ".storefront")
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var("STOREFRONT_DATA_DIR").unwrap_or_else(|_| ".storefront".to_string());

        Self { data_dir }
    }
}
