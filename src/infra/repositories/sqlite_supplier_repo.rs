use crate::domain::{models::supplier::Supplier, ports::SupplierRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSupplierRepo {
    pool: SqlitePool,
}

impl SqliteSupplierRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for SqliteSupplierRepo {
    async fn create(&self, supplier: &Supplier) -> Result<Supplier, AppError> {
        sqlx::query_as::<_, Supplier>(
            "INSERT INTO suppliers (id, name, phone, email, address, category, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id, name, phone, email, address, category, created_at",
        )
            .bind(&supplier.id)
            .bind(&supplier.name)
            .bind(&supplier.phone)
            .bind(&supplier.email)
            .bind(&supplier.address)
            .bind(&supplier.category)
            .bind(supplier.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Supplier>, AppError> {
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, phone, email, address, category, created_at FROM suppliers WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, phone, email, address, category, created_at FROM suppliers ORDER BY created_at ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, supplier: &Supplier) -> Result<Supplier, AppError> {
        sqlx::query_as::<_, Supplier>(
            "UPDATE suppliers SET name = ?, phone = ?, email = ?, address = ?, category = ? WHERE id = ? RETURNING id, name, phone, email, address, category, created_at",
        )
            .bind(&supplier.name)
            .bind(&supplier.phone)
            .bind(&supplier.email)
            .bind(&supplier.address)
            .bind(&supplier.category)
            .bind(&supplier.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
