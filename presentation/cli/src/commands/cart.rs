use anyhow::anyhow;
use bigdecimal::BigDecimal;

use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::AddToCartParams;
use business::domain::cart::use_cases::update_quantity::UpdateQuantityParams;
use business::domain::catalog::errors::CatalogError;

use crate::setup::dependency_injection::DependencyContainer;

fn render_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in cart.items() {
        let line_total = item.product.price.clone() * BigDecimal::from(item.quantity);
        println!(
            "{:>4}  {:>3} x $ {:>8} = $ {:>9}  {}",
            item.product.id,
            item.quantity,
            item.product.price.round(2),
            line_total.round(2),
            item.product.title
        );
    }

    println!();
    println!("Items: {}", cart.total_items());
    println!("Total: $ {}", cart.total_value().round(2));
}

pub async fn show(container: &DependencyContainer) -> anyhow::Result<()> {
    let cart = container.get_cart.execute().await;
    render_cart(&cart);
    Ok(())
}

/// Fetches the product first so the stored line carries the full catalog
/// record, then runs the add mutation.
pub async fn add(container: &DependencyContainer, id: u64, quantity: u32) -> anyhow::Result<()> {
    let product = container
        .get_product
        .execute(id)
        .await
        .map_err(|error| match error {
            CatalogError::ProductNotFound => anyhow!("Product not found."),
            _ => anyhow!("Failed to load product. Please try again."),
        })?;

    let cart = container
        .add_to_cart
        .execute(AddToCartParams { product, quantity })
        .await;
    render_cart(&cart);
    Ok(())
}

pub async fn remove(container: &DependencyContainer, id: u64) -> anyhow::Result<()> {
    let cart = container.remove_from_cart.execute(id).await;
    render_cart(&cart);
    Ok(())
}

pub async fn set(container: &DependencyContainer, id: u64, quantity: u32) -> anyhow::Result<()> {
    let cart = container
        .update_quantity
        .execute(UpdateQuantityParams {
            product_id: id,
            quantity,
        })
        .await;
    render_cart(&cart);
    Ok(())
}

pub async fn clear(container: &DependencyContainer) -> anyhow::Result<()> {
    let cart = container.clear_cart.execute().await;
    render_cart(&cart);
    Ok(())
}
