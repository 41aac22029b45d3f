use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::Product;

pub struct AddToCartParams {
    pub product: Product,
    pub quantity: u32,
}

/// Storage failures are absorbed by policy (logged, never surfaced), so
/// the mutation returns the resulting cart directly.
#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Cart;
}
