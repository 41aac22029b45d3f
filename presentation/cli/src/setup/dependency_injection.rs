use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryKeyValue;
use persistence::storage::KeyValueStorage;

use storeapi::catalog::CatalogStoreApi;
use storeapi::client::StoreApiClient;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::remove_item::RemoveFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::cart::view::GetCartUseCaseImpl;
use business::application::catalog::browse::BrowseProductsUseCaseImpl;
use business::application::catalog::get_product::GetProductByIdUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;

use business::domain::cart::use_cases::add_item::AddToCartUseCase;
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::remove_item::RemoveFromCartUseCase;
use business::domain::cart::use_cases::update_quantity::UpdateQuantityUseCase;
use business::domain::cart::use_cases::view::GetCartUseCase;
use business::domain::catalog::use_cases::browse::BrowseProductsUseCase;
use business::domain::catalog::use_cases::get_product::GetProductByIdUseCase;
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub browse_products: Arc<dyn BrowseProductsUseCase>,
    pub get_product: Arc<dyn GetProductByIdUseCase>,
    pub list_categories: Arc<dyn ListCategoriesUseCase>,
    pub get_cart: Arc<dyn GetCartUseCase>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    pub update_quantity: Arc<dyn UpdateQuantityUseCase>,
    pub clear_cart: Arc<dyn ClearCartUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog = Arc::new(CatalogStoreApi::new(StoreApiClient::new(
            config.api.base_url.clone(),
        )));
        let cart_repository = Arc::new(CartRepositoryKeyValue::new(KeyValueStorage::new(
            config.storage.data_dir.clone(),
        )));

        // Catalog use cases
        let browse_products = Arc::new(BrowseProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product = Arc::new(GetProductByIdUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let list_categories = Arc::new(ListCategoriesUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_cart = Arc::new(AddToCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart = Arc::new(RemoveFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity = Arc::new(UpdateQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        Self {
            browse_products,
            get_product,
            list_categories,
            get_cart,
            add_to_cart,
            remove_from_cart,
            update_quantity,
            clear_cart,
        }
    }
}
