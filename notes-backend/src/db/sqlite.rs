//! NoteStore - SQLite-backed note storage
//!
//! Owns an r2d2 pool of connections to a single database file. The pool sits
//! behind a read/write lock: reads share it, writes and `close()` take it
//! exclusively, so at most one writer touches the file at a time.

use parking_lot::RwLock;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;

/// Default number of pooled connections
pub const DEFAULT_POOL_SIZE: u32 = 4;

pub type DbConn = PooledConnection<SqliteConnectionManager>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("note store is closed")]
    Closed,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub struct NoteStore {
    pool: RwLock<Option<Pool<SqliteConnectionManager>>>,
}

impl NoteStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(db_path: &str) -> StoreResult<Self> {
        Self::open_with_pool_size(db_path, DEFAULT_POOL_SIZE)
    }

    pub fn open_with_pool_size(db_path: &str, pool_size: u32) -> StoreResult<Self> {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        let store = Self {
            pool: RwLock::new(Some(pool)),
        };
        store.ensure_schema()?;

        Ok(store)
    }

    /// Create the notes table if it does not exist yet.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        self.with_write_conn(|conn| {
            conn.execute(
                "CREATE TABLE IF NOT EXISTS notes (
                    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    content TEXT,
                    timestamp INTEGER NOT NULL
                )",
                [],
            )?;
            Ok(())
        })
    }

    /// Release the pool. Every later operation fails with `StoreError::Closed`.
    pub fn close(&self) {
        let pool = self.pool.write().take();
        drop(pool);
    }

    pub fn is_closed(&self) -> bool {
        self.pool.read().is_none()
    }

    /// Run `f` on a pooled connection while holding the shared lock.
    pub(crate) fn with_read_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let guard = self.pool.read();
        let pool = guard.as_ref().ok_or(StoreError::Closed)?;
        let conn: DbConn = pool.get()?;
        f(&conn)
    }

    /// Run `f` on a pooled connection while holding the exclusive lock.
    pub(crate) fn with_write_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let guard = self.pool.write();
        let pool = guard.as_ref().ok_or(StoreError::Closed)?;
        let conn: DbConn = pool.get()?;
        f(&conn)
    }
}
