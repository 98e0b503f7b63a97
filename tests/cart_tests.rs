use storefront_cli::models::product::Product;
use storefront_cli::services::{Cart, CartError, Catalog};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
        "expected {} to be close to {}",
        actual,
        expected
    );
}

fn two_product_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new("Laptop", 899.99, "High-performance laptop with 16GB RAM").unwrap(),
        Product::new("Headphones", 89.99, "Noise-cancelling wireless headphones").unwrap(),
    ])
}

#[test]
fn test_add_remove_checkout_clear_scenario() {
    let catalog = two_product_catalog();
    let laptop = catalog.find_by_name("Laptop").cloned().unwrap();
    let headphones = catalog.find_by_name("Headphones").cloned().unwrap();
    let mut cart = Cart::new();

    cart.add(laptop.clone());
    assert_close(cart.total(), 899.99);

    cart.add(headphones.clone());
    assert_close(cart.total(), 989.98);

    cart.remove(&laptop).unwrap();
    assert_close(cart.total(), 89.99);
    assert_eq!(cart.items(), &[headphones.clone()]);

    let summary = cart.checkout_summary().unwrap();
    assert_eq!(summary.items, vec![headphones.clone()]);
    assert_close(summary.total, 89.99);
    assert_eq!(cart.len(), 1, "checkout summary must not clear the cart");

    cart.clear();
    assert!(cart.items().is_empty());
    assert_eq!(cart.total(), 0.0);

    // the summary is a snapshot and survives the clear
    assert_eq!(summary.item_count(), 1);
}

#[test]
fn test_checkout_on_empty_cart_fails() {
    let cart = Cart::new();
    assert!(matches!(cart.checkout_summary(), Err(CartError::EmptyCart)));
}

#[test]
fn test_remove_unknown_product_fails() {
    let mut cart = Cart::new();
    let lamp = Product::new("Desk Lamp", 24.99, "LED lamp").unwrap();

    let err = cart.remove(&lamp).unwrap_err();
    assert_eq!(err.to_string(), "'Desk Lamp' is not in the cart");
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn test_total_tracks_sum_of_added_prices() {
    let prices = [0.1, 0.2, 0.3, 19.99, 1299.99, 0.01, 5.5, 74.25];
    let mut cart = Cart::new();
    let mut expected = 0.0;

    for (i, price) in prices.iter().enumerate() {
        cart.add(Product::new(format!("Item {}", i), *price, "").unwrap());
        expected += price;
        assert_close(cart.total(), expected);
    }

    let sum: f64 = cart.items().iter().map(|p| p.price).sum();
    assert_close(cart.total(), sum);
}

#[test]
fn test_remove_then_readd_restores_total() {
    let catalog = two_product_catalog();
    let laptop = catalog.find_by_name("Laptop").cloned().unwrap();
    let headphones = catalog.find_by_name("Headphones").cloned().unwrap();
    let mut cart = Cart::new();
    cart.add(laptop.clone());
    cart.add(headphones.clone());
    let before = cart.total();

    cart.remove(&headphones).unwrap();
    cart.add(headphones.clone());

    assert_close(cart.total(), before);
    assert_eq!(cart.quantity_of(&headphones), 1);
}

#[test]
fn test_clear_after_many_cycles_is_exact_zero() {
    let item = Product::new("Cable", 0.1, "USB-C cable").unwrap();
    let mut cart = Cart::new();

    for _ in 0..100 {
        cart.add(item.clone());
        cart.add(item.clone());
        cart.remove(&item).unwrap();
    }
    assert_eq!(cart.len(), 100);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}
