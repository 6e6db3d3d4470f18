use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, ProductRepository, CategoryRepository,
    EmployeeRepository, SupplierRepository, ClientRepository,
};
use crate::domain::services::credentials::CredentialService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub supplier_repo: Arc<dyn SupplierRepository>,
    pub client_repo: Arc<dyn ClientRepository>,
    pub credential_service: Arc<CredentialService>,
}
