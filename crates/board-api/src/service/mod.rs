//! Resource services: input validation and the transactional write contract
//! shared by users, categories and messages.
//!
//! Uniqueness is never pre-checked. A write is attempted inside
//! [`Database::with_tx`](board_db::Database::with_tx) and the store's
//! constraint signal is mapped to a [`ServiceError`]; every failed write rolls
//! back before the error leaves the service.

pub mod categories;
pub mod messages;
pub mod users;

use std::fmt;

use board_db::StoreError;
use thiserror::Error;
use tracing::warn;

/// Longest accepted `username` / `category_name`, in characters.
pub const NAME_MAX_CHARS: usize = 50;

/// Longest accepted message body, in characters.
pub const MESSAGE_MAX_CHARS: usize = 255;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} is still referenced by messages")]
    InUse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Created,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        })
    }
}

/// Outcome of a successful write: what happened and the identifying value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub action: Action,
    pub data: String,
}

impl Mutation {
    pub fn new(action: Action, data: impl Into<String>) -> Self {
        Self {
            action,
            data: data.into(),
        }
    }
}

/// Result of a full scan. An empty table is reported as `Empty` rather than
/// an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Rows(Vec<T>),
    Empty { resource: &'static str },
}

impl<T> Listing<T> {
    pub(crate) fn from_rows<R: Into<T>>(rows: Vec<R>, resource: &'static str) -> Self {
        if rows.is_empty() {
            Self::Empty { resource }
        } else {
            Self::Rows(rows.into_iter().map(Into::into).collect())
        }
    }
}

pub(crate) fn not_found(resource: &str) -> ServiceError {
    ServiceError::NotFound(resource.to_string())
}

/// Validates a unique name field, trims surrounding whitespace and case-folds
/// it to lowercase.
pub(crate) fn normalize_name(field: &str, value: &str) -> ServiceResult<String> {
    let folded = value.trim().to_lowercase();
    check_text(field, &folded, NAME_MAX_CHARS)?;
    Ok(folded)
}

pub(crate) fn check_text(field: &str, value: &str, max_chars: usize) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::BadRequest(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_chars {
        return Err(ServiceError::BadRequest(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(())
}

/// Maps a uniqueness violation to `AlreadyExists(label)`; anything else is
/// internal.
pub(crate) fn exists_as(label: &str) -> impl FnOnce(StoreError) -> ServiceError {
    let label = label.to_string();
    move |err| match err {
        StoreError::UniqueViolation(cause) => {
            warn!("Uniqueness conflict on {}: {}", label, cause);
            ServiceError::AlreadyExists(label)
        }
        other => other.into(),
    }
}

/// Maps a foreign-key violation on delete to `InUse(resource)`.
pub(crate) fn in_use_as(resource: &'static str) -> impl FnOnce(StoreError) -> ServiceError {
    move |err| match err {
        StoreError::ForeignKeyViolation(cause) => {
            warn!("{} still referenced: {}", resource, cause);
            ServiceError::InUse(resource.to_string())
        }
        other => other.into(),
    }
}
