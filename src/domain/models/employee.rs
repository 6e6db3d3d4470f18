use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "rfc")]
    pub tax_id: String,
    #[serde(rename = "puesto")]
    pub position: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "fechaIngreso")]
    pub hired_at: Option<DateTime<Utc>>,
    #[serde(rename = "salario")]
    pub salary: f64,
    pub created_at: DateTime<Utc>,
}

pub struct NewEmployeeParams {
    pub name: String,
    pub phone: String,
    pub tax_id: String,
    pub position: String,
    pub address: String,
    pub hired_at: Option<DateTime<Utc>>,
    pub salary: f64,
}

impl Employee {
    pub fn new(params: NewEmployeeParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            phone: params.phone,
            tax_id: params.tax_id,
            position: params.position,
            address: params.address,
            hired_at: params.hired_at,
            salary: params.salary,
            created_at: Utc::now(),
        }
    }
}
