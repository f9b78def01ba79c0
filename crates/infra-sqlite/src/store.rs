// SQLite TransactionalStore Implementation

use crate::error::map_sqlx_error;
use crate::SqliteStoreTransaction;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;
use taskboard_core::error::Result;
use taskboard_core::port::{StoreTransaction, TimeProvider, TransactionalStore};

/// Opens transactions for the creation paths
pub struct SqliteStore {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }
}

#[async_trait]
impl TransactionalStore for SqliteStore {
    async fn begin_transaction(&self) -> Result<Box<dyn StoreTransaction>> {
        // Take the write lock up front: a deferred transaction that reads and
        // then writes fails with SQLITE_BUSY instead of waiting.
        let tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteStoreTransaction::new(
            tx,
            Arc::clone(&self.time_provider),
        )))
    }
}
