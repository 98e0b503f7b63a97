use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct Product {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom = "validate_name")]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,

    #[serde(default)]
    pub review_count: u32,
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Name is required"));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid price for '{name}': {price}")]
    InvalidPrice { name: String, price: f64 },

    #[error("Invalid rating for '{name}': {rating}")]
    InvalidRating { name: String, rating: f64 },
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let product = Self {
            name: name.into().trim().to_string(),
            price,
            description: description.into().trim().to_string(),
            image_path: None,
            rating: 0.0,
            review_count: 0,
        };
        product.check()?;
        Ok(product)
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Result<Self, ProductError> {
        if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
            return Err(ProductError::InvalidRating {
                name: self.name,
                rating,
            });
        }
        self.rating = rating;
        self.review_count = review_count;
        Ok(self)
    }

    /// Runs the field validators plus the checks `validator` cannot express
    /// (NaN and infinite prices slip through a plain range check).
    pub fn check(&self) -> Result<(), ProductError> {
        self.validate()?;

        if !self.price.is_finite() {
            return Err(ProductError::InvalidPrice {
                name: self.name.clone(),
                price: self.price,
            });
        }
        if !self.rating.is_finite() {
            return Err(ProductError::InvalidRating {
                name: self.name.clone(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    /// Case-insensitive substring match against name or description.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }

    pub fn has_reviews(&self) -> bool {
        self.review_count > 0
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {:.2}", self.name, self.price)
    }
}
