use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i64,
    /// Free-text category name, matched against `Category.name`.
    #[serde(rename = "categoria")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, price: f64, stock: i64, category: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            price,
            stock,
            category,
            created_at: Utc::now(),
        }
    }
}
