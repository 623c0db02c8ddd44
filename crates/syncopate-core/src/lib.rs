//! Syncopate Core - domain kernel for peer-to-peer catalog replication
//!
//! This crate provides the foundational types for the replicated mutation
//! command protocol:
//! - Source identity (local sentinel vs. remote peer id)
//! - Catalog view entities (playlists, auto playlists, stations) with
//!   shared-ownership handles
//! - Per-source collections and the collection index
//! - Commands, their validation, and the replication log record format
//!
//! Persistence lives in `syncopate-store`; orchestration of the
//! apply/commit/reconcile/propagate sequence lives in `syncopate-engine`.

pub mod collection;
pub mod command;
pub mod errors;
pub mod logging;
pub mod model;
pub mod source;

// Re-export commonly used types
pub use collection::{Collection, CollectionIndex};
pub use command::{Command, LogRecord, Mutation};
pub use errors::{CollectionError, CommandError, ReconcileError};
pub use model::{
    AutoPlaylist, AutoPlaylistRef, CatalogEntry, Playlist, PlaylistKind, PlaylistRef, Station,
    StationRef,
};
pub use source::{Source, SourceId};
