//! Database row types. These map directly to SQLite rows and are converted
//! into the `board-types` models at the service boundary.

use board_types::models::{Category, Message, User};
use rusqlite::Row;

pub struct UserRow {
    pub id: i64,
    pub username: String,
}

pub struct CategoryRow {
    pub id: i64,
    pub category_name: String,
}

pub struct MessageRow {
    pub id: i64,
    pub message: String,
    pub user_id: i64,
    pub category_id: i64,
}

impl UserRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            username: row.get(1)?,
        })
    }
}

impl CategoryRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            category_name: row.get(1)?,
        })
    }
}

impl MessageRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            message: row.get(1)?,
            user_id: row.get(2)?,
            category_id: row.get(3)?,
        })
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
        }
    }
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            category_name: row.category_name,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            message: row.message,
            user_id: row.user_id,
            category_id: row.category_id,
        }
    }
}
