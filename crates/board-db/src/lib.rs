pub mod error;
pub mod migrations;
pub mod models;
pub mod queries;

use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use tracing::{debug, error, info};

pub use error::{StoreError, StoreResult};

pub const DEFAULT_READER_POOL_SIZE: usize = 4;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Store handle: one writer connection plus a small pool of read-only
/// connections. Every write goes through [`Database::with_tx`].
pub struct Database {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    reader_idx: AtomicUsize,
}

impl Database {
    pub fn open(path: &Path, reader_count: usize) -> StoreResult<Self> {
        let writer = Connection::open(path)?;

        // WAL mode so readers never wait on the writer
        writer.pragma_update(None, "journal_mode", "WAL")?;
        writer.pragma_update(None, "foreign_keys", "ON")?;
        writer.busy_timeout(BUSY_TIMEOUT)?;

        migrations::run(&writer)?;

        let reader_count = reader_count.max(1);
        let mut readers = Vec::with_capacity(reader_count);
        for _ in 0..reader_count {
            let conn = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            conn.busy_timeout(BUSY_TIMEOUT)?;
            readers.push(Mutex::new(conn));
        }

        info!(
            "Database opened at {} (1 writer + {} readers)",
            path.display(),
            reader_count
        );
        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            reader_idx: AtomicUsize::new(0),
        })
    }

    /// Runs a read-only closure on the next reader connection.
    pub fn with_conn<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Connection) -> StoreResult<T>,
    {
        let idx = self.reader_idx.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[idx]
            .lock()
            .map_err(|_| StoreError::Poisoned("reader"))?;
        f(&conn)
    }

    /// Runs `f` inside an IMMEDIATE transaction on the writer connection.
    ///
    /// The transaction commits only when `f` returns `Ok`. Any error (and any
    /// unwind) drops the transaction guard, which rolls back, so a failed
    /// write never leaves partial state behind. `f` may fail with any error
    /// type a [`StoreError`] converts into.
    pub fn with_tx<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut conn = self
            .writer
            .lock()
            .map_err(|_| StoreError::Poisoned("writer"))?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(StoreError::from)?;

        match f(&tx) {
            Ok(value) => {
                tx.commit().map_err(StoreError::from)?;
                Ok(value)
            }
            Err(e) => {
                debug!("Rolling back transaction");
                // Keep the closure's error; a failed rollback is only logged.
                if let Err(rollback_err) = tx.rollback() {
                    error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    /// Drops and recreates the whole schema. Development use only.
    pub fn reset(&self) -> StoreResult<()> {
        self.with_tx(|tx| migrations::reset(tx))?;
        info!("Database reset complete");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_closure_rolls_back() {
        let t = test_support::open();

        let result: StoreResult<()> = t.db.with_tx(|tx| {
            queries::insert_user(tx, "alice")?;
            Err(StoreError::Poisoned("test"))
        });
        assert!(result.is_err());

        assert!(t.db.list_users().unwrap().is_empty());
    }

    #[test]
    fn closure_error_survives_a_failed_rollback() {
        let t = test_support::open();

        // Ending the transaction early makes the guard's own rollback fail
        let err = t
            .db
            .with_tx(|tx| -> StoreResult<()> {
                queries::insert_user(tx, "alice")?;
                tx.execute_batch("ROLLBACK")?;
                Err(StoreError::UniqueViolation("users.username".into()))
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)), "got {err:?}");

        assert!(t.db.list_users().unwrap().is_empty());
        t.db.with_tx(|tx| queries::insert_user(tx, "alice")).unwrap();
    }

    #[test]
    fn committed_write_is_visible_to_readers() {
        let t = test_support::open();

        let id = t.db.with_tx(|tx| queries::insert_user(tx, "alice")).unwrap();

        // Round-robin hits every reader at least once
        for _ in 0..3 {
            let row = t.db.get_user(id).unwrap().unwrap();
            assert_eq!(row.username, "alice");
        }
    }

    #[test]
    fn duplicate_insert_is_unique_violation() {
        let t = test_support::open();
        t.db.with_tx(|tx| queries::insert_user(tx, "alice")).unwrap();

        let err = t
            .db
            .with_tx(|tx| queries::insert_user(tx, "alice"))
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation(_)), "got {err:?}");
    }

    #[test]
    fn deleting_referenced_user_is_foreign_key_violation() {
        let t = test_support::open();
        let (user_id, _) = t
            .db
            .with_tx(|tx| {
                let user_id = queries::insert_user(tx, "alice")?;
                let category_id = queries::insert_category(tx, "news")?;
                queries::insert_message(tx, "hello", user_id, category_id)?;
                Ok::<_, StoreError>((user_id, category_id))
            })
            .unwrap();

        let err = t
            .db
            .with_tx(|tx| queries::delete_user(tx, user_id))
            .unwrap_err();
        assert!(matches!(err, StoreError::ForeignKeyViolation(_)), "got {err:?}");
        assert!(t.db.get_user(user_id).unwrap().is_some());
    }

    #[test]
    fn reset_empties_tables_and_restarts_ids() {
        let t = test_support::open();
        t.db.with_tx(|tx| {
            let user_id = queries::insert_user(tx, "alice")?;
            let category_id = queries::insert_category(tx, "news")?;
            queries::insert_message(tx, "hello", user_id, category_id)
        })
        .unwrap();

        t.db.reset().unwrap();

        assert!(t.db.list_users().unwrap().is_empty());
        assert!(t.db.list_categories().unwrap().is_empty());
        assert!(t.db.list_messages().unwrap().is_empty());

        let id = t.db.with_tx(|tx| queries::insert_user(tx, "bob")).unwrap();
        assert_eq!(id, 1);
    }
}
