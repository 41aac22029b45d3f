use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{UpdateQuantityParams, UpdateQuantityUseCase};
use crate::domain::logger::Logger;

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Cart {
        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            params.product_id, params.quantity
        ));

        let mut cart = match self.repository.load().await {
            Ok(cart) => cart,
            Err(error) => {
                self.logger
                    .warn(&format!("Starting from an empty cart: {}", error));
                Cart::new()
            }
        };

        cart.set_quantity(params.product_id, params.quantity);

        if let Err(error) = self.repository.save(&cart).await {
            self.logger
                .error(&format!("Failed to persist cart: {}", error));
        }

        cart
    }
}
