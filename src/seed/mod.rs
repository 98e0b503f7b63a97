pub mod builtin;
pub mod json_file;

pub use builtin::*;
pub use json_file::*;

use thiserror::Error;

use crate::models::product::{Product, ProductError};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid product at index {index}: {source}")]
    InvalidProduct {
        index: usize,
        #[source]
        source: ProductError,
    },

    #[error("Seed contains no products")]
    Empty,
}

/// Where catalog products come from at startup
pub trait ProductSource {
    fn load(&self) -> Result<Vec<Product>, SeedError>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}
