use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::view::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self) -> Cart {
        match self.repository.load().await {
            Ok(cart) => cart,
            Err(error) => {
                self.logger
                    .warn(&format!("Starting from an empty cart: {}", error));
                Cart::new()
            }
        }
    }
}
