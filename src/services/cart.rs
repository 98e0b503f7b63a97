use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{order::OrderSummary, product::Product};

#[derive(Error, Debug, PartialEq)]
pub enum CartError {
    #[error("'{name}' is not in the cart")]
    ItemNotFound { name: String },

    #[error("Your cart is empty")]
    EmptyCart,
}

/// Products picked by the user, in the order they were added, with a running
/// total.
///
/// The total is maintained incrementally: every `add` adds the price and every
/// `remove` subtracts it, so the floating-point result depends on the order of
/// operations exactly as a running sum would. Only `clear` resets it, and it
/// resets to exactly zero.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
    total: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, product: &Product) -> usize {
        self.items.iter().filter(|item| *item == product).count()
    }

    /// Append a product. Duplicates are allowed and count as separate units.
    pub fn add(&mut self, product: Product) {
        self.total += product.price;
        debug!(
            "Added '{}' to cart: {} items, total {:.2}",
            product.name,
            self.items.len() + 1,
            self.total
        );
        self.items.push(product);
    }

    /// Remove the first item equal to `product`. A product that is not in the
    /// cart is an error and leaves the cart unchanged.
    pub fn remove(&mut self, product: &Product) -> Result<(), CartError> {
        let Some(index) = self.items.iter().position(|item| item == product) else {
            warn!("Cannot remove '{}': not in cart", product.name);
            return Err(CartError::ItemNotFound {
                name: product.name.clone(),
            });
        };

        let removed = self.items.remove(index);
        self.total -= removed.price;
        debug!(
            "Removed '{}' from cart: {} items, total {:.2}",
            removed.name,
            self.items.len(),
            self.total
        );
        Ok(())
    }

    /// Snapshot the cart for the confirmation step. Does not clear it.
    pub fn checkout_summary(&self) -> Result<OrderSummary, CartError> {
        if self.items.is_empty() {
            warn!("Checkout attempted on an empty cart");
            return Err(CartError::EmptyCart);
        }

        let summary = OrderSummary::new(self.items.clone(), self.total);
        info!(
            "Prepared order {} with {} items, total {:.2}",
            summary.id,
            summary.item_count(),
            summary.total
        );
        Ok(summary)
    }

    pub fn clear(&mut self) {
        debug!("Clearing cart with {} items", self.items.len());
        self.items.clear();
        self.total = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn laptop() -> Product {
        Product::new("Laptop", 899.99, "High-performance laptop with 16GB RAM").unwrap()
    }

    fn headphones() -> Product {
        Product::new("Headphones", 89.99, "Noise-cancelling wireless headphones").unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut cart = Cart::new();
        cart.add(headphones());
        cart.add(laptop());
        cart.add(headphones());

        let names: Vec<&str> = cart.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Headphones", "Laptop", "Headphones"]);
        assert_eq!(cart.quantity_of(&headphones()), 2);
        assert!((cart.total() - (89.99 + 899.99 + 89.99)).abs() < EPSILON);
    }

    #[test]
    fn test_remove_takes_first_occurrence_only() {
        let mut cart = Cart::new();
        cart.add(headphones());
        cart.add(laptop());
        cart.add(headphones());

        cart.remove(&headphones()).unwrap();

        let names: Vec<&str> = cart.items().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Laptop", "Headphones"]);
        assert_eq!(cart.quantity_of(&headphones()), 1);
    }

    #[test]
    fn test_remove_missing_item_fails_without_changes() {
        let mut cart = Cart::new();
        cart.add(headphones());
        let before = cart.total();

        let result = cart.remove(&laptop());

        assert_eq!(
            result,
            Err(CartError::ItemNotFound {
                name: "Laptop".to_string()
            })
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), before);
    }

    #[test]
    fn test_add_then_remove_on_empty_cart_is_exact() {
        let mut cart = Cart::new();
        cart.add(laptop());
        cart.remove(&laptop()).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_checkout_summary_does_not_clear() {
        let mut cart = Cart::new();
        cart.add(laptop());

        let summary = cart.checkout_summary().unwrap();

        assert_eq!(summary.items, vec![laptop()]);
        assert_eq!(summary.total, cart.total());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_checkout_summary_on_empty_cart() {
        let cart = Cart::new();
        assert!(matches!(cart.checkout_summary(), Err(CartError::EmptyCart)));
    }

    #[test]
    fn test_clear_resets_total_to_exact_zero() {
        let mut cart = Cart::new();
        for _ in 0..10 {
            cart.add(Product::new("Cable", 0.1, "USB-C cable").unwrap());
        }
        cart.remove(&Product::new("Cable", 0.1, "USB-C cable").unwrap())
            .unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
