use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Cart {
        self.logger.info("Clearing cart");

        // The result is empty no matter what storage held, so there is
        // nothing to load first.
        let cart = Cart::new();

        if let Err(error) = self.repository.save(&cart).await {
            self.logger
                .error(&format!("Failed to persist cart: {}", error));
        }

        cart
    }
}
