use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::catalog::model::{Product, Rating};

#[derive(Debug, Serialize, Deserialize)]
pub struct RatingEntity {
    pub rate: f64,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: u64,
    pub title: String,
    pub price: BigDecimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: RatingEntity,
}

/// Stored shape of one cart line.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub product: ProductEntity,
    pub quantity: u32,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            product: ProductEntity {
                id: item.product.id,
                title: item.product.title.clone(),
                price: item.product.price.clone(),
                description: item.product.description.clone(),
                category: item.product.category.clone(),
                image: item.product.image.clone(),
                rating: RatingEntity {
                    rate: item.product.rating.rate,
                    count: item.product.rating.count,
                },
            },
            quantity: item.quantity,
        }
    }

    pub fn into_domain(self) -> CartItem {
        CartItem {
            product: Product::from_catalog(
                self.product.id,
                self.product.title,
                self.product.price,
                self.product.description,
                self.product.category,
                self.product.image,
                Rating {
                    rate: self.product.rating.rate,
                    count: self.product.rating.count,
                },
            ),
            quantity: self.quantity,
        }
    }
}
