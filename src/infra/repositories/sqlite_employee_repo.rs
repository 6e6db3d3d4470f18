use crate::domain::{models::employee::Employee, ports::EmployeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEmployeeRepo {
    pool: SqlitePool,
}

impl SqliteEmployeeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepo {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (id, name, phone, tax_id, position, address, hired_at, salary, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, name, phone, tax_id, position, address, hired_at, salary, created_at",
        )
            .bind(&employee.id)
            .bind(&employee.name)
            .bind(&employee.phone)
            .bind(&employee.tax_id)
            .bind(&employee.position)
            .bind(&employee.address)
            .bind(employee.hired_at)
            .bind(employee.salary)
            .bind(employee.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, phone, tax_id, position, address, hired_at, salary, created_at FROM employees WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, phone, tax_id, position, address, hired_at, salary, created_at FROM employees ORDER BY created_at ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET name = ?, phone = ?, tax_id = ?, position = ?, address = ?, hired_at = ?, salary = ? WHERE id = ? RETURNING id, name, phone, tax_id, position, address, hired_at, salary, created_at",
        )
            .bind(&employee.name)
            .bind(&employee.phone)
            .bind(&employee.tax_id)
            .bind(&employee.position)
            .bind(&employee.address)
            .bind(employee.hired_at)
            .bind(employee.salary)
            .bind(&employee.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
