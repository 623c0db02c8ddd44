//! Command executor
//!
//! Runs one command through its whole lifecycle: durably apply the
//! mutation (plus its oplog record) in a single transaction, reconcile
//! the live view, then notify the transport iff the change originated
//! locally. A remote-sourced replay is never re-broadcast - that is the
//! invariant keeping the peer mesh from oscillating the same mutation
//! forever.

use std::sync::Arc;

use rusqlite::Connection;
use tracing::debug;

use syncopate_core::Command;
use syncopate_store::{append_op, apply_mutation, StoreError};

use crate::errors::Result;
use crate::sync::SyncTrigger;
use crate::view::{ReconcileOutcome, ViewHandle};

/// Whether a committed command was forwarded to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Triggered,
    Skipped,
}

/// What a completed command did at each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecReport {
    /// Rows the durable apply touched; zero for a not-yet-replicated
    /// target
    pub rows_affected: usize,
    pub reconcile: ReconcileOutcome,
    pub propagation: Propagation,
}

pub struct Executor {
    view: ViewHandle,
    sync: Arc<dyn SyncTrigger>,
}

impl Executor {
    pub fn new(view: ViewHandle, sync: Arc<dyn SyncTrigger>) -> Self {
        Self { view, sync }
    }

    /// Run one command to completion.
    ///
    /// A store failure aborts before reconciliation. A consistency
    /// failure surfaces after the commit: the durable mutation stands,
    /// and propagation is withheld.
    pub fn execute(&self, conn: &mut Connection, cmd: &Command) -> Result<ExecReport> {
        let tx = conn.transaction().map_err(StoreError::Sqlite)?;
        let rows_affected = apply_mutation(&tx, cmd.source(), cmd.guid(), cmd.mutation())?;
        if cmd.loggable() {
            append_op(&tx, cmd.source(), &cmd.to_record())?;
        }
        tx.commit().map_err(StoreError::Sqlite)?;

        // Always reconcile after a successful commit, even when no row
        // matched: replayed commands still exercise resolution.
        let reconcile = self
            .view
            .reconcile(cmd.source(), cmd.guid(), cmd.mutation().clone())?;

        let propagation = if cmd.source().is_local() {
            self.sync.catalog_changed();
            Propagation::Triggered
        } else {
            Propagation::Skipped
        };

        debug!(
            source = %cmd.source(),
            guid = cmd.guid(),
            op = cmd.mutation().kind(),
            rows_affected,
            ?reconcile,
            ?propagation,
            "command completed"
        );

        Ok(ExecReport {
            rows_affected,
            reconcile,
            propagation,
        })
    }
}
