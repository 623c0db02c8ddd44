use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// An ordinary, hand-curated playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Identifier, unique within the owning source's namespace
    pub guid: String,
    /// Human-readable title
    pub title: String,
}

impl Playlist {
    pub fn new(guid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            title: title.into(),
        }
    }

    /// Wrap in a shared-ownership handle for the collection index.
    pub fn shared(self) -> PlaylistRef {
        Arc::new(RwLock::new(self))
    }
}

/// A rule-driven playlist whose contents refresh from its generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPlaylist {
    pub guid: String,
    pub title: String,
}

impl AutoPlaylist {
    pub fn new(guid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            title: title.into(),
        }
    }

    pub fn shared(self) -> AutoPlaylistRef {
        Arc::new(RwLock::new(self))
    }
}

/// An endless station seeded from listening rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub guid: String,
    pub title: String,
}

impl Station {
    pub fn new(guid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            title: title.into(),
        }
    }

    pub fn shared(self) -> StationRef {
        Arc::new(RwLock::new(self))
    }
}

/// Shared handle to a playlist; cloning shares the underlying entity.
pub type PlaylistRef = Arc<RwLock<Playlist>>;
pub type AutoPlaylistRef = Arc<RwLock<AutoPlaylist>>;
pub type StationRef = Arc<RwLock<Station>>;

/// Variant discriminator as persisted in the playlist table's `kind`
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaylistKind {
    Playlist,
    AutoPlaylist,
    Station,
}

impl PlaylistKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistKind::Playlist => "playlist",
            PlaylistKind::AutoPlaylist => "auto",
            PlaylistKind::Station => "station",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "playlist" => Some(PlaylistKind::Playlist),
            "auto" => Some(PlaylistKind::AutoPlaylist),
            "station" => Some(PlaylistKind::Station),
            _ => None,
        }
    }
}
