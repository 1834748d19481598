use rusqlite::ffi;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by the store. Constraint violations are split out so
/// callers can react to them without inspecting SQLite codes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("{0} lock poisoned")]
    Poisoned(&'static str),

    #[error("sqlite error: {0}")]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        let extended_code = match &err {
            rusqlite::Error::SqliteFailure(cause, _) => Some(cause.extended_code),
            _ => None,
        };

        match extended_code {
            Some(ffi::SQLITE_CONSTRAINT_UNIQUE) | Some(ffi::SQLITE_CONSTRAINT_PRIMARYKEY) => {
                Self::UniqueViolation(err.to_string())
            }
            Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => Self::ForeignKeyViolation(err.to_string()),
            _ => Self::Sqlite(err),
        }
    }
}
