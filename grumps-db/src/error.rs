use std::path::PathBuf;

use thiserror::Error;

use crate::operations::OperationError;
use crate::schema::SchemaError;

/// The backing database could not be opened or queried.
///
/// Always recoverable: the next call opens a fresh connection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database {}: {source}", .path.display())]
    Open { path: PathBuf, source: SchemaError },
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database operation failed: {0}")]
    Operation(#[from] OperationError),
}
