use log::{debug, info};
use rusqlite::Connection;

use super::connection::{DbPool, create_memory_pool, create_pool, get_connection};
use super::setup;
use crate::config::settings::DatabaseSettings;
use crate::errors::Result;

/// Pooled SQLite database handing out one transaction per logical operation
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn open(settings: &DatabaseSettings) -> Result<Self> {
        let pool = create_pool(&settings.path, settings.pool_size)?;
        info!("Opened tournament database at {}", settings.path);
        Ok(Self { pool })
    }

    pub fn in_memory() -> Result<Self> {
        let pool = create_memory_pool()?;
        Ok(Self { pool })
    }

    /// Runs `operation` inside a fresh transaction on a pooled connection.
    ///
    /// The transaction commits only if `operation` returns `Ok`. On an error
    /// (or a panic) it is dropped, which rolls it back, and the connection goes
    /// back to the pool either way.
    pub fn transaction<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction()?;
        let value = operation(&tx)?;
        tx.commit()?;
        debug!("Transaction committed");
        Ok(value)
    }

    pub fn initialize_schema(&self) -> Result<()> {
        self.transaction(setup::initialize_schema)
    }

    pub fn reset(&self) -> Result<()> {
        self.transaction(setup::reset_database)
    }
}
