use crate::log_info;
use crate::shared::errors::AppError;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new() -> Result<Self, AppError> {
        let database_url = Self::get_validated_database_url()?;

        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool_config = Self::get_optimal_pool_config();
        let pool = r2d2::Pool::builder()
            .max_size(pool_config.max_size)
            .min_idle(Some(pool_config.min_idle))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}, min_idle: {:?}",
            pool.max_size(),
            pool_config.min_idle
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Apply any migrations not yet recorded in the schema_migrations table.
    pub fn run_pending_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {}", e)))?;

        for version in &applied {
            log_info!("Applied migration {}", version);
        }
        Ok(())
    }

    /// Validate and retrieve database URL without exposing credentials
    fn get_validated_database_url() -> Result<String, AppError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;

        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::DatabaseError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        log_info!(
            "Initializing database connection to: {}",
            database_url.split('@').last().unwrap_or("unknown_host")
        );

        Ok(database_url)
    }

    /// Pool sizing from available parallelism, capped for a single-service deployment
    fn get_optimal_pool_config() -> PoolConfig {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let max_size = std::cmp::min(cpu_count * 2, 20);
        let min_idle = std::cmp::max(2, max_size / 4);

        PoolConfig {
            max_size: max_size as u32,
            min_idle: min_idle as u32,
        }
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        self.pool.get().map_err(AppError::from)
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }

    /// Get the underlying connection pool (useful for testing and repository initialization)
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(Debug)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}

#[derive(Debug)]
struct PoolConfig {
    max_size: u32,
    min_idle: u32,
}
