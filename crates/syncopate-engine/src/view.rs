//! View context actor
//!
//! The collection index is owned by a single thread; every post-commit
//! reconciliation is a message to that thread. Shared view entities are
//! never mutated from an arbitrary worker, and the actor's mailbox
//! serializes reconciliations, so late-arriving commands land in commit
//! order (last writer wins).

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use tracing::{debug, warn};

use syncopate_core::{Collection, CollectionIndex, Mutation, ReconcileError, Source};

use crate::errors::ExecError;

/// Result of a reconciliation that did not fatally fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The target entity was resolved and mutated.
    Applied,
    /// The source has no live collection; the durable row stands alone.
    SkippedOffline,
}

type ReconcileReply = std::result::Result<ReconcileOutcome, ReconcileError>;

enum ViewMsg {
    Attach {
        source: Source,
        collection: Collection,
    },
    Detach {
        source: Source,
    },
    Reconcile {
        source: Source,
        guid: String,
        mutation: Mutation,
        reply: Sender<ReconcileReply>,
    },
    Shutdown,
}

/// Cloneable facade over the view thread.
#[derive(Clone)]
pub struct ViewHandle {
    sender: Sender<ViewMsg>,
}

impl ViewHandle {
    /// Register a source's collection with the view.
    pub fn attach(&self, source: Source, collection: Collection) -> Result<(), ExecError> {
        self.sender
            .send(ViewMsg::Attach { source, collection })
            .map_err(|_| ExecError::ViewGone)
    }

    /// Drop a source's collection; its entities stay alive only through
    /// handles other holders still own.
    pub fn detach(&self, source: Source) -> Result<(), ExecError> {
        self.sender
            .send(ViewMsg::Detach { source })
            .map_err(|_| ExecError::ViewGone)
    }

    /// Reconcile a just-committed mutation into the live view.
    ///
    /// Blocks until the view thread has processed the request, preserving
    /// the strict apply-then-reconcile ordering of a single command.
    pub fn reconcile(
        &self,
        source: Source,
        guid: &str,
        mutation: Mutation,
    ) -> Result<ReconcileOutcome, ExecError> {
        let (reply, verdict) = bounded(1);
        self.sender
            .send(ViewMsg::Reconcile {
                source,
                guid: guid.to_string(),
                mutation,
                reply,
            })
            .map_err(|_| ExecError::ViewGone)?;

        let outcome = verdict.recv().map_err(|_| ExecError::ViewGone)?;
        Ok(outcome?)
    }

    /// Ask the view thread to exit once its mailbox drains.
    pub fn shutdown(&self) {
        let _ = self.sender.send(ViewMsg::Shutdown);
    }
}

/// Owns the collection index and serializes every mutation to it.
pub struct ViewActor {
    index: CollectionIndex,
    recv: Receiver<ViewMsg>,
}

impl ViewActor {
    /// Spawn the view thread over an initial (possibly empty) index.
    pub fn spawn(index: CollectionIndex) -> (ViewHandle, JoinHandle<()>) {
        let (sender, recv) = unbounded();
        let actor = ViewActor { index, recv };
        let thread = thread::spawn(move || actor.run());
        (ViewHandle { sender }, thread)
    }

    fn run(mut self) {
        while let Ok(msg) = self.recv.recv() {
            match msg {
                ViewMsg::Attach { source, collection } => self.index.attach(source, collection),
                ViewMsg::Detach { source } => {
                    self.index.detach(&source);
                }
                ViewMsg::Reconcile {
                    source,
                    guid,
                    mutation,
                    reply,
                } => {
                    let _ = reply.send(self.reconcile(source, &guid, &mutation));
                }
                ViewMsg::Shutdown => break,
            }
        }
    }

    fn reconcile(&mut self, source: Source, guid: &str, mutation: &Mutation) -> ReconcileReply {
        let Some(collection) = self.index.collection(&source) else {
            // The durable row is already updated; there is simply no live
            // view left to refresh.
            debug!(%source, guid, "source has gone offline, leaving view untouched");
            return Ok(ReconcileOutcome::SkippedOffline);
        };

        let Some(entry) = collection.resolve(guid) else {
            warn!(%source, guid, "committed row has no live catalog entry");
            return Err(ReconcileError::EntityNotFound {
                source,
                guid: guid.to_string(),
            });
        };

        match mutation {
            Mutation::RenamePlaylist { title } => {
                debug!(
                    %source,
                    guid,
                    variant = entry.variant(),
                    old = %entry.title(),
                    new = %title,
                    "renaming catalog entry"
                );
                entry.set_title(title);
            }
        }

        Ok(ReconcileOutcome::Applied)
    }
}
