use tracing::{debug, info};

use crate::{
    models::{category::Category, product::Product},
    seed::{ProductSource, SeedError},
};

/// Read-only product list, fixed at construction. Every query preserves
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog from a seed source
    pub fn from_source(source: &dyn ProductSource) -> Result<Self, SeedError> {
        let products = source.load()?;
        info!(
            "Catalog loaded {} products from {}",
            products.len(),
            source.describe()
        );
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products for a free-text category label. The catch-all label returns
    /// the whole catalog; unknown labels return nothing.
    pub fn filter_by_category(&self, label: &str) -> Vec<&Product> {
        let products = match Category::from_label(label) {
            Some(category) => self.filter(category),
            None => Vec::new(),
        };

        debug!(
            "Category filter '{}' matched {} of {} products",
            label,
            products.len(),
            self.products.len()
        );
        products
    }

    pub fn filter(&self, category: Category) -> Vec<&Product> {
        if category.is_catch_all() {
            return self.products.iter().collect();
        }

        let keywords = category.keywords();
        self.products
            .iter()
            .filter(|product| keywords.iter().any(|keyword| product.matches_keyword(keyword)))
            .collect()
    }

    /// Case-insensitive search on name and description
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }

        let products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.matches_keyword(term))
            .collect();

        debug!("Search '{}' returned {} products", term, products.len());
        products
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let name = name.trim();
        self.products
            .iter()
            .find(|product| product.name.eq_ignore_ascii_case(name))
    }

    /// Product count per browsable category, in menu order. The catch-all is
    /// left out since its count is just `len()`.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter(|category| !category.is_catch_all())
            .map(|category| (category, self.filter(category).len()))
            .collect()
    }
}
