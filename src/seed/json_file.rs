use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::models::product::Product;
use crate::seed::{ProductSource, SeedError};

/// Products read from a JSON array on disk, e.g.
///
/// ```json
/// [{ "name": "Laptop", "price": 899.99, "description": "16GB RAM", "rating": 4.5 }]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Product>, SeedError> {
        debug!("Reading product seed from {}", self.path.display());
        let contents = fs::read_to_string(&self.path)?;
        let mut products: Vec<Product> = serde_json::from_str(&contents)?;

        if products.is_empty() {
            return Err(SeedError::Empty);
        }

        for (index, product) in products.iter_mut().enumerate() {
            product.name = product.name.trim().to_string();
            product.description = product.description.trim().to_string();
            product.check().map_err(|source| {
                warn!("Rejecting seed entry {} ('{}'): {}", index, product.name, source);
                SeedError::InvalidProduct { index, source }
            })?;
        }

        Ok(products)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
