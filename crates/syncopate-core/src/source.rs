//! Source identity
//!
//! A source is the owner of one catalog: the local user, or a remote peer
//! whose catalog is replicated here. Storage rows and live collections are
//! both scoped by source, so guids only need to be unique within one
//! source's namespace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric id of a remote peer, allocated by the store's source
/// registry. The local catalog never has one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SourceId(pub i64);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a catalog owner.
///
/// The local catalog is a distinguished sentinel without an id; remote
/// peers carry the id allocated by the source registry. Storage predicates
/// and the sync propagation decision both match exhaustively on this type,
/// so neither can silently fall through to the wrong case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The catalog owned by this process.
    Local,
    /// A replicated catalog owned by the peer with the given id.
    Remote(SourceId),
}

impl Source {
    pub fn is_local(&self) -> bool {
        matches!(self, Source::Local)
    }

    /// The registry id, absent exactly when the source is local.
    pub fn id(&self) -> Option<SourceId> {
        match self {
            Source::Local => None,
            Source::Remote(id) => Some(*id),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local => write!(f, "local"),
            Source::Remote(id) => write!(f, "source {}", id),
        }
    }
}

impl std::error::Error for Source {}
