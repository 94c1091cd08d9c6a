use std::sync::Arc;

use diesel::connection::Connection;
use diesel::pg::PgConnection;
use log::warn;

use super::{get_connection, DbPool};
use crate::errors::StorageError;
use trellis_core::errors::{Error, Result};

/// Runs Diesel jobs on Tokio's blocking pool with a pooled connection.
///
/// Each call checks out its own connection, so jobs run concurrently up to
/// the pool size. Dropping the returned future does not cancel a job that
/// has already started.
#[derive(Clone)]
pub struct DbExecutor {
    pool: Arc<DbPool>,
}

impl DbExecutor {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Run a read-only job outside of an explicit transaction.
    pub async fn read<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_connection(&pool)?;
            job(&mut conn)
        })
        .await
    }

    /// Run a job inside a transaction; any error rolls it back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut PgConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking(move || {
            let mut conn = get_connection(&pool)?;
            conn.transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into())
        })
        .await
    }
}

async fn run_blocking<F, T>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        warn!("Database task did not complete: {}", e);
        Error::from(StorageError::TaskFailed(e.to_string()))
    })?
}
