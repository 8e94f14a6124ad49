use rusqlite::Connection;
use std::cell::RefCell;
use std::fs;

use crate::errors::ServerError;

// Thread-local connection slot. astra dispatches requests onto a fixed
// worker pool, so each worker ends up with one long-lived connection.
thread_local! {
    static DB_CONN: RefCell<Option<Connection>> = RefCell::new(None);
}

#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides a mutable connection to the closure, opening one lazily
    /// the first time the current thread asks for it.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                if slot.is_none() {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("open db failed: {e}")))?;
                    conn.execute_batch("PRAGMA foreign_keys = ON;")
                        .map_err(|e| ServerError::DbError(format!("enable fks failed: {e}")))?;
                    *slot = Some(conn);
                }
                let conn = slot.as_mut().expect("connection slot just filled");
                f(conn)
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Apply the schema file to the database. Idempotent: the schema uses
/// `create ... if not exists` throughout.
pub fn init_db(db: &Database, schema_path: &str) -> Result<(), ServerError> {
    let schema_sql = fs::read_to_string(schema_path)
        .map_err(|e| ServerError::DbError(format!("read schema file failed: {e}")))?;

    db.with_conn(|conn| {
        conn.execute_batch(&schema_sql)
            .map_err(|e| ServerError::DbError(format!("apply schema failed: {e}")))
    })?;

    tracing::info!(schema = schema_path, "database initialized");
    Ok(())
}
