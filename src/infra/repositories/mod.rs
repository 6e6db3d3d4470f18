pub mod sqlite_user_repo;
pub mod sqlite_product_repo;
pub mod sqlite_category_repo;
pub mod sqlite_employee_repo;
pub mod sqlite_supplier_repo;
pub mod sqlite_client_repo;

pub mod postgres_user_repo;
pub mod postgres_product_repo;
pub mod postgres_category_repo;
pub mod postgres_employee_repo;
pub mod postgres_supplier_repo;
pub mod postgres_client_repo;
