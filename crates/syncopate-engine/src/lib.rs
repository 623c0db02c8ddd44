//! Syncopate Engine - command orchestration
//!
//! Owns the apply/commit/reconcile/propagate sequence: a command's
//! mutation and its oplog record commit in one transaction, the live
//! view is reconciled on the thread that owns it, and locally-originated
//! changes are propagated to peers - replayed remote changes never are.

pub mod errors;
pub mod executor;
pub mod sync;
pub mod view;

pub use errors::{ExecError, Result};
pub use executor::{ExecReport, Executor, Propagation};
pub use sync::{NullSyncTrigger, SyncTrigger};
pub use view::{ReconcileOutcome, ViewActor, ViewHandle};
