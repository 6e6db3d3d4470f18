use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateProductRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "categoria")]
    pub category: String,
}

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    pub stock: Option<i64>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
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
}

#[derive(Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "rfc")]
    pub tax_id: Option<String>,
    #[serde(rename = "puesto")]
    pub position: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "fechaIngreso")]
    pub hired_at: Option<DateTime<Utc>>,
    #[serde(rename = "salario")]
    pub salary: Option<f64>,
}

#[derive(Deserialize)]
pub struct CreateSupplierRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "categoria")]
    pub category: String,
}

#[derive(Deserialize)]
pub struct UpdateSupplierRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
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
}

#[derive(Deserialize)]
pub struct UpdateClientRequest {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "numeroCompras")]
    pub purchase_count: Option<i64>,
    #[serde(rename = "montoTotal")]
    pub total_spent: Option<f64>,
}
