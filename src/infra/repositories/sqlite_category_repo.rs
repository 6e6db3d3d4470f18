use crate::domain::{models::category::{Category, CategoryWithCount}, ports::CategoryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCategoryRepo {
    pool: SqlitePool,
}

impl SqliteCategoryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepo {
    async fn create(&self, category: &Category) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, name, description, created_at) VALUES (?, ?, ?, ?) RETURNING id, name, description, created_at",
        )
            .bind(&category.id)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, AppError> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at FROM categories WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        // Products associate to categories by exact name match, so the
        // count is a join on the denormalized name column.
        sqlx::query_as::<_, CategoryWithCount>(
            "SELECT c.id, c.name, c.description, COUNT(p.id) AS total_products \
             FROM categories c \
             LEFT JOIN products p ON p.category = c.name \
             GROUP BY c.id, c.name, c.description, c.created_at \
             ORDER BY c.created_at ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, category: &Category) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = ?, description = ? WHERE id = ? RETURNING id, name, description, created_at",
        )
            .bind(&category.name)
            .bind(&category.description)
            .bind(&category.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
