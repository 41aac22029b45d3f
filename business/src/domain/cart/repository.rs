use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::Cart;

/// Persistence port for the cart. The whole cart is written as one slot
/// and overwritten on every save (last write wins).
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Cart, StorageError>;
    async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}
