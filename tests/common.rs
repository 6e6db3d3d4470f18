use inventory_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::services::credentials::CredentialService,
    infra::repositories::{
        sqlite_user_repo::SqliteUserRepo,
        sqlite_product_repo::SqliteProductRepo,
        sqlite_category_repo::SqliteCategoryRepo,
        sqlite_employee_repo::SqliteEmployeeRepo,
        sqlite_supplier_repo::SqliteSupplierRepo,
        sqlite_client_repo::SqliteClientRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::Router;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let credential_service = Arc::new(CredentialService::new(user_repo.clone()));

        let state = Arc::new(AppState {
            config,
            user_repo,
            product_repo: Arc::new(SqliteProductRepo::new(pool.clone())),
            category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            employee_repo: Arc::new(SqliteEmployeeRepo::new(pool.clone())),
            supplier_repo: Arc::new(SqliteSupplierRepo::new(pool.clone())),
            client_repo: Arc::new(SqliteClientRepo::new(pool.clone())),
            credential_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
