use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::product::Product;

/// Snapshot of a cart at checkout time. Independent of the cart it came from:
/// clearing the cart afterwards leaves the summary intact.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderSummary {
    pub id: Uuid,
    pub items: Vec<Product>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderSummary {
    pub fn new(items: Vec<Product>, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            items,
            total,
            created_at: Utc::now(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items grouped by product in first-seen order, with their quantity.
    pub fn line_items(&self) -> Vec<(&Product, usize)> {
        let mut lines: Vec<(&Product, usize)> = Vec::new();
        for item in &self.items {
            match lines.iter_mut().find(|(product, _)| *product == item) {
                Some((_, quantity)) => *quantity += 1,
                None => lines.push((item, 1)),
            }
        }
        lines
    }
}
