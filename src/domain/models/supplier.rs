use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Supplier {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "categoria")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Supplier {
    pub fn new(name: String, phone: String, email: String, address: String, category: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            email,
            address,
            category,
            created_at: Utc::now(),
        }
    }
}
