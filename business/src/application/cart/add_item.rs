use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Cart {
        self.logger.info(&format!(
            "Adding {} x product {} to cart",
            params.quantity, params.product.id
        ));

        let mut cart = match self.repository.load().await {
            Ok(cart) => cart,
            Err(error) => {
                self.logger
                    .warn(&format!("Starting from an empty cart: {}", error));
                Cart::new()
            }
        };

        cart.add(params.product, params.quantity);

        if let Err(error) = self.repository.save(&cart).await {
            self.logger
                .error(&format!("Failed to persist cart: {}", error));
        }

        cart
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::cart::model::CartItem;
    use crate::domain::catalog::model::{Product, Rating};
    use crate::domain::errors::StorageError;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Cart, StorageError>;
            async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u64) -> Product {
        Product::from_catalog(
            id,
            format!("Product {}", id),
            BigDecimal::from_str("12.99").unwrap(),
            "".to_string(),
            "electronics".to_string(),
            "https://example.com/image.png".to_string(),
            Rating {
                rate: 4.0,
                count: 25,
            },
        )
    }

    #[tokio::test]
    async fn should_append_product_and_persist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(Cart::new()));
        mock_repo
            .expect_save()
            .withf(|cart| cart.items().len() == 1 && cart.items()[0].quantity == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(1),
                quantity: 2,
            })
            .await;

        assert_eq!(cart.total_items(), 2);
    }

    #[tokio::test]
    async fn should_increment_quantity_when_product_already_present() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| {
            Ok(Cart::from_items(vec![CartItem {
                product: product(1),
                quantity: 1,
            }]))
        });
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(1),
                quantity: 3,
            })
            .await;

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_cart_when_load_fails() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(StorageError::Corrupted));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(1),
                quantity: 1,
            })
            .await;

        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test]
    async fn should_return_updated_cart_even_when_save_fails() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(Cart::new()));
        mock_repo
            .expect_save()
            .returning(|_| Err(StorageError::WriteFailed));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddToCartParams {
                product: product(1),
                quantity: 1,
            })
            .await;

        assert_eq!(cart.total_items(), 1);
    }
}
