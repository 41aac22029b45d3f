use serde::{Deserialize, Serialize};

use super::model::Product;

/// Listing order requested by the user. `Default` keeps the order the
/// catalog returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Default,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Default => write!(f, "default"),
            SortKey::PriceAsc => write!(f, "price-asc"),
            SortKey::PriceDesc => write!(f, "price-desc"),
            SortKey::TitleAsc => write!(f, "title-asc"),
            SortKey::TitleDesc => write!(f, "title-desc"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "title-asc" => Ok(SortKey::TitleAsc),
            "title-desc" => Ok(SortKey::TitleDesc),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

/// Sorts in place, stable, so ties keep the catalog's order. Titles are
/// compared case-insensitively; prices by exact decimal value.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::TitleAsc => {
            products.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::TitleDesc => {
            products.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
    }
}
