//! Scoped access to the database file.
//!
//! A connection lives only for the duration of one operation and is dropped,
//! closing the file, on every exit path including errors.

use std::path::Path;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::StoreError;
use crate::schema::open_database;

fn open(path: &Path) -> Result<Connection, StoreError> {
    open_database(path).map_err(|source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a read against a freshly opened connection.
pub(crate) fn with_connection<T>(
    path: &Path,
    f: impl FnOnce(&Connection) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    let conn = open(path)?;
    f(&conn)
}

/// Run a mutation inside an immediate transaction.
///
/// The write lock is taken up front, so concurrent mutations queue behind
/// each other. The transaction commits only if `f` succeeds; otherwise it
/// rolls back when dropped.
pub(crate) fn with_transaction<T>(
    path: &Path,
    f: impl FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    let mut conn = open(path)?;
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
