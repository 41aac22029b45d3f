use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::StorageError;

use crate::storage::{KeyValueError, KeyValueStorage};

use super::entity::CartItemEntity;

/// Fixed slot the cart array lives under. One key, overwritten whole on
/// every save.
pub const CART_STORAGE_KEY: &str = "cart";

pub struct CartRepositoryKeyValue {
    storage: KeyValueStorage,
}

impl CartRepositoryKeyValue {
    pub fn new(storage: KeyValueStorage) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKeyValue {
    async fn load(&self) -> Result<Cart, StorageError> {
        let raw = self
            .storage
            .read(CART_STORAGE_KEY)
            .await
            .map_err(|_| StorageError::ReadFailed)?;

        let Some(raw) = raw else {
            return Ok(Cart::new());
        };

        let entities: Vec<CartItemEntity> = serde_json::from_str(&raw).map_err(|error| {
            tracing::warn!("cart slot holds unparseable data: {}", error);
            StorageError::Corrupted
        })?;

        Ok(Cart::from_items(
            entities.into_iter().map(CartItemEntity::into_domain).collect(),
        ))
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let entities: Vec<CartItemEntity> = cart
            .items()
            .iter()
            .map(CartItemEntity::from_domain)
            .collect();

        let raw = serde_json::to_string(&entities).map_err(|_| StorageError::WriteFailed)?;

        self.storage
            .write(CART_STORAGE_KEY, &raw)
            .await
            .map_err(|error| match error {
                KeyValueError::ReadError => StorageError::ReadFailed,
                KeyValueError::WriteError => StorageError::WriteFailed,
            })
    }
}
