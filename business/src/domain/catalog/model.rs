use bigdecimal::BigDecimal;

/// Average review score and review count as reported by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog product. The remote catalog is the source of truth; the
/// client never edits these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: BigDecimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Constructor for data fetched from the catalog (no validation).
    pub fn from_catalog(
        id: u64,
        title: String,
        price: BigDecimal,
        description: String,
        category: String,
        image: String,
        rating: Rating,
    ) -> Self {
        Self {
            id,
            title,
            price,
            description,
            category,
            image,
            rating,
        }
    }
}
