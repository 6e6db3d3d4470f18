use crate::domain::{models::client::Client, ports::ClientRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteClientRepo {
    pool: SqlitePool,
}

impl SqliteClientRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepo {
    async fn create(&self, client: &Client) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (id, name, phone, address, purchase_count, total_spent, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id, name, phone, address, purchase_count, total_spent, created_at",
        )
            .bind(&client.id)
            .bind(&client.name)
            .bind(&client.phone)
            .bind(&client.address)
            .bind(client.purchase_count)
            .bind(client.total_spent)
            .bind(client.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError> {
        sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, address, purchase_count, total_spent, created_at FROM clients WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Client>, AppError> {
        sqlx::query_as::<_, Client>(
            "SELECT id, name, phone, address, purchase_count, total_spent, created_at FROM clients ORDER BY created_at ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            "UPDATE clients SET name = ?, phone = ?, address = ?, purchase_count = ?, total_spent = ? WHERE id = ? RETURNING id, name, phone, address, purchase_count, total_spent, created_at",
        )
            .bind(&client.name)
            .bind(&client.phone)
            .bind(&client.address)
            .bind(client.purchase_count)
            .bind(client.total_spent)
            .bind(&client.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
