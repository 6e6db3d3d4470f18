use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::credentials::CredentialService;
use crate::infra::repositories::{
    postgres_user_repo::PostgresUserRepo, postgres_product_repo::PostgresProductRepo,
    postgres_category_repo::PostgresCategoryRepo, postgres_employee_repo::PostgresEmployeeRepo,
    postgres_supplier_repo::PostgresSupplierRepo, postgres_client_repo::PostgresClientRepo,
    sqlite_user_repo::SqliteUserRepo, sqlite_product_repo::SqliteProductRepo,
    sqlite_category_repo::SqliteCategoryRepo, sqlite_employee_repo::SqliteEmployeeRepo,
    sqlite_supplier_repo::SqliteSupplierRepo, sqlite_client_repo::SqliteClientRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let user_repo = Arc::new(PostgresUserRepo::new(pool.clone()));
        let credential_service = Arc::new(CredentialService::new(user_repo.clone()));

        AppState {
            config: config.clone(),
            user_repo,
            product_repo: Arc::new(PostgresProductRepo::new(pool.clone())),
            category_repo: Arc::new(PostgresCategoryRepo::new(pool.clone())),
            employee_repo: Arc::new(PostgresEmployeeRepo::new(pool.clone())),
            supplier_repo: Arc::new(PostgresSupplierRepo::new(pool.clone())),
            client_repo: Arc::new(PostgresClientRepo::new(pool.clone())),
            credential_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let user_repo = Arc::new(SqliteUserRepo::new(pool.clone()));
        let credential_service = Arc::new(CredentialService::new(user_repo.clone()));

        AppState {
            config: config.clone(),
            user_repo,
            product_repo: Arc::new(SqliteProductRepo::new(pool.clone())),
            category_repo: Arc::new(SqliteCategoryRepo::new(pool.clone())),
            employee_repo: Arc::new(SqliteEmployeeRepo::new(pool.clone())),
            supplier_repo: Arc::new(SqliteSupplierRepo::new(pool.clone())),
            client_repo: Arc::new(SqliteClientRepo::new(pool.clone())),
            credential_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
