#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("catalog.invalid_response")]
    InvalidResponse,
}
