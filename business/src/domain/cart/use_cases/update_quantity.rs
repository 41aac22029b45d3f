use async_trait::async_trait;

use crate::domain::cart::model::Cart;

pub struct UpdateQuantityParams {
    pub product_id: u64,
    /// 0 behaves as removal. No upper bound here; the input boundary
    /// clamps before calling.
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Cart;
}
