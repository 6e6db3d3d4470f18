use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Client {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "numeroCompras")]
    pub purchase_count: i64,
    #[serde(rename = "montoTotal")]
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(name: String, phone: String, address: String, purchase_count: i64, total_spent: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            address,
            purchase_count,
            total_spent,
            created_at: Utc::now(),
        }
    }
}
