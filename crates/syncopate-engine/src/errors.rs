//! Error handling for syncopate-engine

use thiserror::Error;

use syncopate_core::ReconcileError;
use syncopate_store::StoreError;

/// Result type alias using ExecError
pub type Result<T> = std::result::Result<T, ExecError>;

/// Failures surfaced while executing a command.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The durable apply could not be committed; reconciliation and
    /// propagation never ran.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The store committed but the live view has diverged from it. The
    /// durable mutation stands; the divergence is repaired by resync.
    #[error(transparent)]
    Consistency(#[from] ReconcileError),

    /// The view context has shut down and can no longer reconcile.
    #[error("view context has shut down")]
    ViewGone,
}
