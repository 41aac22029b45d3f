use anyhow::anyhow;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::sorting::SortKey;
use business::domain::catalog::use_cases::browse::BrowseProductsParams;

use crate::setup::dependency_injection::DependencyContainer;

pub async fn products(
    container: &DependencyContainer,
    categories: Vec<String>,
    sort: SortKey,
) -> anyhow::Result<()> {
    let products = container
        .browse_products
        .execute(BrowseProductsParams { categories, sort })
        .await
        .map_err(|_| anyhow!("Failed to load products. Please try again."))?;

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &products {
        println!(
            "{:>4}  $ {:>8}  [{}]  {}",
            product.id,
            product.price.round(2),
            product.category,
            product.title
        );
    }

    Ok(())
}

pub async fn product(container: &DependencyContainer, id: u64) -> anyhow::Result<()> {
    let product = container
        .get_product
        .execute(id)
        .await
        .map_err(|error| match error {
            CatalogError::ProductNotFound => anyhow!("Product not found."),
            _ => anyhow!("Failed to load product. Please try again."),
        })?;

    println!("{}", product.title);
    println!("Category: {}", product.category);
    println!("Price:    $ {}", product.price.round(2));
    println!(
        "Rating:   {} ({} reviews)",
        product.rating.rate, product.rating.count
    );
    println!();
    println!("{}", product.description);
    println!();
    println!("Image: {}", product.image);

    Ok(())
}

pub async fn categories(container: &DependencyContainer) -> anyhow::Result<()> {
    let categories = container
        .list_categories
        .execute()
        .await
        .map_err(|_| anyhow!("Failed to load categories. Please try again."))?;

    for category in &categories {
        println!("{}", category);
    }

    Ok(())
}
