use async_trait::async_trait;

use crate::domain::cart::model::Cart;

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, product_id: u64) -> Cart;
}
