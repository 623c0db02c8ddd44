//! Error handling for syncopate-store

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by the persistence layer.
///
/// An apply that returns one of these never reached its post-commit
/// step; retrying is the caller's (or the log-replay layer's) decision.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite failure: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("migration {id} failed: {reason}")]
    Migration { id: String, reason: String },

    #[error("checksum mismatch for migration {id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("malformed oplog payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("hydration failed: {0}")]
    Hydration(#[from] syncopate_core::CollectionError),
}
