//! SQLite connection wrapper (single embedded handle, shared with the
//! HTTP layer behind a mutex).

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Result};

pub struct DbPool {
    pub conn: Connection,
}

/// The one database handle of the process. Handlers lock it for the full
/// span of an operation and release it before responding.
pub type SharedDb = Arc<Mutex<DbPool>>;

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // WAL keeps readers from blocking the writer.
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self { conn })
    }

    pub fn into_shared(self) -> SharedDb {
        Arc::new(Mutex::new(self))
    }
}
