//! Connection pool, migrations and the blocking executor.

use log::{error, info};
use std::sync::Arc;
use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, StorageError};
use trellis_core::errors::{DatabaseError, Error, Result};

mod executor;
pub use executor::DbExecutor;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const MAX_CONNECTIONS: u32 = 10;
const MIN_IDLE_CONNECTIONS: u32 = 5;
const CONNECTION_LIFETIME: Duration = Duration::from_secs(30 * 60);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Build the connection pool. Fails when the initial idle connections
/// cannot be opened within the connection timeout.
pub fn create_pool(database_url: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(MAX_CONNECTIONS)
        .min_idle(Some(MIN_IDLE_CONNECTIONS))
        .max_lifetime(Some(CONNECTION_LIFETIME))
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}

/// Apply embedded migrations that have not run yet.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let result = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::from(StorageError::MigrationFailed(e.to_string()))
    })?;

    if result.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &result {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}
