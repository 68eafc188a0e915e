//! Database connection pool management.

use async_trait::async_trait;
use shaku::Component;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use strata_config::DatabaseConfig;
use strata_core::{Interface, StrataError, StrataResult};
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying pool.
    fn inner(&self) -> &AnyPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> StrataResult<()>;

    /// Runs database migrations.
    async fn run_migrations(&self) -> StrataResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
///
/// Backed by an `sqlx` `Any` pool so the same code runs against MySQL in
/// production and SQLite in tests.
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: AnyPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// # Errors
    ///
    /// Returns a database error if no connection can be established.
    pub async fn new(config: &DatabaseConfig) -> StrataResult<Self> {
        sqlx::any::install_default_drivers();

        let backend = config.url.split(':').next().unwrap_or_default();
        info!(backend, "Connecting to database...");

        let pool = AnyPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .idle_timeout(config.idle_timeout())
            .connect(&config.url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                StrataError::Database(format!("Failed to connect: {e}"))
            })?;

        info!("Database connection pool established");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &AnyPool {
        &self.pool
    }

    async fn health_check(&self) -> StrataResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StrataError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    async fn run_migrations(&self) -> StrataResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StrataError::Database(format!("Migration failed: {e}")))?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
