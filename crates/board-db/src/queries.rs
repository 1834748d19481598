use rusqlite::Connection;

use crate::Database;
use crate::error::{StoreError, StoreResult};
use crate::models::{CategoryRow, MessageRow, UserRow};

/// Point lookups and ordered scans served from the reader pool.
impl Database {
    // -- Users --

    pub fn get_user(&self, id: i64) -> StoreResult<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_id(conn, id))
    }

    pub fn list_users(&self) -> StoreResult<Vec<UserRow>> {
        self.with_conn(query_users)
    }

    // -- Categories --

    pub fn get_category(&self, id: i64) -> StoreResult<Option<CategoryRow>> {
        self.with_conn(|conn| query_category_by_id(conn, id))
    }

    pub fn list_categories(&self) -> StoreResult<Vec<CategoryRow>> {
        self.with_conn(query_categories)
    }

    // -- Messages --

    pub fn get_message(&self, id: i64) -> StoreResult<Option<MessageRow>> {
        self.with_conn(|conn| query_message_by_id(conn, id))
    }

    pub fn list_messages(&self) -> StoreResult<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }
}

// -- Users --

/// Returns the id assigned by the store.
pub fn insert_user(conn: &Connection, username: &str) -> StoreResult<i64> {
    conn.execute("INSERT INTO users (username) VALUES (?1)", [username])?;
    Ok(conn.last_insert_rowid())
}

pub fn update_username(conn: &Connection, id: i64, username: &str) -> StoreResult<bool> {
    let changed = conn.execute(
        "UPDATE users SET username = ?1 WHERE id = ?2",
        rusqlite::params![username, id],
    )?;
    Ok(changed > 0)
}

pub fn delete_user(conn: &Connection, id: i64) -> StoreResult<bool> {
    let changed = conn.execute("DELETE FROM users WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

pub fn query_user_by_id(conn: &Connection, id: i64) -> StoreResult<Option<UserRow>> {
    let mut stmt = conn.prepare("SELECT id, username FROM users WHERE id = ?1")?;
    stmt.query_row([id], UserRow::from_row).optional()
}

fn query_users(conn: &Connection) -> StoreResult<Vec<UserRow>> {
    let mut stmt = conn.prepare("SELECT id, username FROM users ORDER BY id DESC")?;
    let rows = stmt
        .query_map([], UserRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

// -- Categories --

pub fn insert_category(conn: &Connection, category_name: &str) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO categories (category_name) VALUES (?1)",
        [category_name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_category_name(conn: &Connection, id: i64, category_name: &str) -> StoreResult<bool> {
    let changed = conn.execute(
        "UPDATE categories SET category_name = ?1 WHERE id = ?2",
        rusqlite::params![category_name, id],
    )?;
    Ok(changed > 0)
}

pub fn delete_category(conn: &Connection, id: i64) -> StoreResult<bool> {
    let changed = conn.execute("DELETE FROM categories WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

pub fn query_category_by_id(conn: &Connection, id: i64) -> StoreResult<Option<CategoryRow>> {
    let mut stmt = conn.prepare("SELECT id, category_name FROM categories WHERE id = ?1")?;
    stmt.query_row([id], CategoryRow::from_row).optional()
}

fn query_categories(conn: &Connection) -> StoreResult<Vec<CategoryRow>> {
    let mut stmt = conn.prepare("SELECT id, category_name FROM categories ORDER BY id DESC")?;
    let rows = stmt
        .query_map([], CategoryRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

// -- Messages --

pub fn insert_message(
    conn: &Connection,
    message: &str,
    user_id: i64,
    category_id: i64,
) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO messages (message, user_id, category_id) VALUES (?1, ?2, ?3)",
        rusqlite::params![message, user_id, category_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_message(conn: &Connection, id: i64) -> StoreResult<bool> {
    let changed = conn.execute("DELETE FROM messages WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

pub fn query_message_by_id(conn: &Connection, id: i64) -> StoreResult<Option<MessageRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, message, user_id, category_id FROM messages WHERE id = ?1",
    )?;
    stmt.query_row([id], MessageRow::from_row).optional()
}

fn query_messages(conn: &Connection) -> StoreResult<Vec<MessageRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, message, user_id, category_id FROM messages ORDER BY id DESC",
    )?;
    let rows = stmt
        .query_map([], MessageRow::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> StoreResult<Option<T>>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> StoreResult<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::from(e)),
        }
    }
}
