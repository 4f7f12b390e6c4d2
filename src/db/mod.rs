pub mod migrate;
pub mod pool;
pub mod queries;

use rusqlite::Connection;

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
