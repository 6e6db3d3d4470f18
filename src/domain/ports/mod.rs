use crate::domain::models::{
    user::User, product::Product, category::{Category, CategoryWithCount},
    employee::Employee, supplier::Supplier, client::Client,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError>;
    async fn list(&self) -> Result<Vec<Product>, AppError>;
    async fn update(&self, product: &Product) -> Result<Product, AppError>;
    /// Returns true when a row was actually removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> Result<Category, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Category>, AppError>;
    async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError>;
    async fn update(&self, category: &Category) -> Result<Category, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, employee: &Employee) -> Result<Employee, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError>;
    async fn list(&self) -> Result<Vec<Employee>, AppError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn create(&self, supplier: &Supplier) -> Result<Supplier, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Supplier>, AppError>;
    async fn list(&self) -> Result<Vec<Supplier>, AppError>;
    async fn update(&self, supplier: &Supplier) -> Result<Supplier, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create(&self, client: &Client) -> Result<Client, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError>;
    async fn list(&self) -> Result<Vec<Client>, AppError>;
    async fn update(&self, client: &Client) -> Result<Client, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
