use crate::models::product::Product;
use crate::seed::{ProductSource, SeedError};

/// The storefront's hardcoded product list.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

// name, price, description, image, rating, reviews
const SEED: &[(&str, f64, &str, Option<&str>, f64, u32)] = &[
    ("Laptop", 899.99, "High-performance laptop with 16GB RAM", Some("images/laptop.png"), 4.5, 128),
    ("Smartphone", 499.99, "Latest model with 128GB storage", Some("images/smartphone.png"), 4.3, 342),
    ("Headphones", 89.99, "Noise-cancelling wireless headphones", Some("images/headphones.png"), 4.6, 215),
    ("Tablet", 299.99, "10-inch tablet with HD display", Some("images/tablet.png"), 4.1, 97),
    ("Smart Watch", 199.99, "Fitness tracker with heart rate monitor", Some("images/smartwatch.png"), 4.0, 156),
    ("Bluetooth Speaker", 59.99, "Portable speaker with 10-hour battery life", Some("images/speaker.png"), 4.4, 283),
    ("Wireless Earbuds", 129.99, "True wireless earbuds with charging case", None, 4.2, 411),
    ("DSLR Camera", 749.99, "24MP sensor with 18-55mm kit lens", None, 4.7, 64),
    ("Gaming Console", 449.99, "Next-gen console with 1TB SSD", None, 4.8, 502),
    ("Fitness Band", 39.99, "Slim activity tracker with sleep monitoring", None, 3.9, 188),
    ("Gaming Laptop", 1299.99, "RTX graphics and 144Hz display", None, 4.6, 73),
    ("Soundbar", 179.99, "Home theatre speaker with wireless subwoofer", None, 4.3, 121),
];

impl ProductSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Product>, SeedError> {
        SEED.iter()
            .enumerate()
            .map(|(index, &(name, price, description, image, rating, reviews))| {
                let product = Product::new(name, price, description)
                    .and_then(|p| p.with_rating(rating, reviews))
                    .map_err(|source| SeedError::InvalidProduct { index, source })?;

                Ok(match image {
                    Some(path) => product.with_image(path),
                    None => product,
                })
            })
            .collect()
    }

    fn describe(&self) -> String {
        "built-in seed".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_is_valid_and_ordered() {
        let products = BuiltinSource.load().unwrap();

        assert_eq!(products.len(), SEED.len());
        assert_eq!(products[0].name, "Laptop");
        assert_eq!(products[0].image_path.as_deref(), Some("images/laptop.png"));
        assert_eq!(products[6].image_path, None);
        assert!(products.iter().all(|p| p.check().is_ok()));
    }
}
