use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::RemoveFromCartUseCase;
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, product_id: u64) -> Cart {
        self.logger
            .info(&format!("Removing product {} from cart", product_id));

        let mut cart = match self.repository.load().await {
            Ok(cart) => cart,
            Err(error) => {
                self.logger
                    .warn(&format!("Starting from an empty cart: {}", error));
                Cart::new()
            }
        };

        cart.remove(product_id);

        if let Err(error) = self.repository.save(&cart).await {
            self.logger
                .error(&format!("Failed to persist cart: {}", error));
        }

        cart
    }
}
