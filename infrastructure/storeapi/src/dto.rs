use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::catalog::model::{Product, Rating};

#[derive(Debug, Deserialize)]
pub struct RatingDto {
    pub rate: f64,
    pub count: u64,
}

/// Wire shape of a catalog product.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: RatingDto,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        // Go through the decimal literal so a wire price of 109.95 stays
        // 109.95 rather than its binary expansion. Finite JSON numbers
        // always parse.
        let price = BigDecimal::from_str(&self.price.to_string()).unwrap_or_default();

        Product::from_catalog(
            self.id,
            self.title,
            price,
            self.description,
            self.category,
            self.image,
            Rating {
                rate: self.rating.rate,
                count: self.rating.count,
            },
        )
    }
}
