use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::catalog::model::Product;

/// One cart line: a catalog product and how many of it the user wants.
/// Quantity is always at least 1; dropping to 0 removes the line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

/// The user's in-progress selection. Lines keep the order of first add,
/// and a product id appears at most once.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Constructor for data rehydrated from storage. Normalizes foreign
    /// data: zero-quantity lines are dropped and duplicate ids merge
    /// into the first occurrence.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item.product, item.quantity);
        }
        cart
    }

    /// Adds `quantity` units of `product`. An id already in the cart has
    /// its quantity incremented; a new id is appended. Adding 0 units is
    /// a no-op, so a quantity below 1 can never enter the cart.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    /// Drops the line for `product_id`, if any.
    pub fn remove(&mut self, product_id: u64) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Sets the quantity for `product_id`. A quantity of 0 behaves as
    /// `remove`. Unknown ids are left untouched.
    pub fn set_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of price × quantity across all lines, in exact decimal
    /// arithmetic.
    pub fn total_value(&self) -> BigDecimal {
        self.items
            .iter()
            .map(|item| item.product.price.clone() * BigDecimal::from(item.quantity))
            .fold(BigDecimal::zero(), |total, line| total + line)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() || self.total_items() == 0
    }
}
