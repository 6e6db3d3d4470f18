use crate::domain::{models::employee::Employee, ports::EmployeeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresEmployeeRepo {
    pool: PgPool,
}

impl PostgresEmployeeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepo {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (id, name, phone, tax_id, position, address, hired_at, salary, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id, name, phone, tax_id, position, address, hired_at, salary, created_at",
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
            "SELECT id, name, phone, tax_id, position, address, hired_at, salary, created_at FROM employees WHERE id = $1",
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
            "UPDATE employees SET name = $1, phone = $2, tax_id = $3, position = $4, address = $5, hired_at = $6, salary = $7 WHERE id = $8 RETURNING id, name, phone, tax_id, position, address, hired_at, salary, created_at",
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
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
