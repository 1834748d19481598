use rusqlite::Connection;
use tracing::{info, warn};

use crate::error::StoreResult;

pub fn run(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS categories (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            category_name   TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS messages (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            message         TEXT NOT NULL,
            user_id         INTEGER NOT NULL REFERENCES users(id),
            category_id     INTEGER NOT NULL REFERENCES categories(id)
        );

        CREATE INDEX IF NOT EXISTS idx_messages_user
            ON messages(user_id);

        CREATE INDEX IF NOT EXISTS idx_messages_category
            ON messages(category_id);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}

/// Drops every table and recreates the schema. Dependents go first so the
/// foreign keys never block the drop.
pub fn reset(conn: &Connection) -> StoreResult<()> {
    warn!("Dropping all tables");
    conn.execute_batch(
        "
        DROP TABLE IF EXISTS messages;
        DROP TABLE IF EXISTS categories;
        DROP TABLE IF EXISTS users;
        ",
    )?;

    run(conn)
}
