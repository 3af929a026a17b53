use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::database;
use crate::errors::StorageError;
use crate::types::{Draw, DrawNumbers};

/// Append-only storage for draws.
///
/// Calls may block; async callers run them on the blocking pool.
pub trait DrawStore: Send + Sync {
    fn append_draw(&self, numbers: &DrawNumbers) -> Result<Draw, StorageError>;

    /// Every stored draw, in no particular order.
    fn list_all_draws(&self) -> Result<Vec<Draw>, StorageError>;

    fn latest_draws(&self, limit: u32) -> Result<Vec<Draw>, StorageError>;

    fn count_draws(&self) -> Result<u64, StorageError>;
}

/// SQLite-backed store. The connection is taken per call and released when
/// the guard drops.
#[derive(Clone)]
pub struct SqliteDrawStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteDrawStore {
    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut guard = self
            .connection
            .lock()
            .map_err(|_| StorageError::Poisoned)?;
        f(&mut guard)
    }
}

impl DrawStore for SqliteDrawStore {
    fn append_draw(&self, numbers: &DrawNumbers) -> Result<Draw, StorageError> {
        self.with_conn(|conn| database::insert_draw(conn, numbers))
    }

    fn list_all_draws(&self) -> Result<Vec<Draw>, StorageError> {
        self.with_conn(|conn| database::get_all_draws(conn))
    }

    fn latest_draws(&self, limit: u32) -> Result<Vec<Draw>, StorageError> {
        self.with_conn(|conn| database::get_latest_draws(conn, limit))
    }

    fn count_draws(&self) -> Result<u64, StorageError> {
        self.with_conn(|conn| database::count_draws(conn))
    }
}
