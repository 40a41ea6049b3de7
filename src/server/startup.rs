use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::seed::SeedService};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs all
/// pending SeaORM migrations so the schema is up-to-date before the server accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Seeds demo data when enabled in configuration.
pub async fn seed_database(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    if !config.seed_database {
        return Ok(());
    }

    if SeedService::new(db).seed_if_empty().await? {
        tracing::info!("Seeded database with demo restaurants and pizzas");
    } else {
        tracing::info!("Database already contains data, skipping seed");
    }

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
///
/// If the signal handler can not be installed the future never resolves, leaving the server
/// running until it is killed.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
