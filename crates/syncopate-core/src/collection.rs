//! Per-source collections and the collection index
//!
//! A `Collection` is one source's live view of its catalog: three
//! guid-keyed maps, one per playlist variant. The `CollectionIndex` maps
//! each known source to its collection; a source with no entry has gone
//! offline and has no live view to reconcile.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::CollectionError;
use crate::model::{
    AutoPlaylist, AutoPlaylistRef, CatalogEntry, Playlist, PlaylistRef, Station, StationRef,
};
use crate::source::Source;

/// One source's live catalog view.
///
/// The three variants share a single guid namespace: a guid inserted under
/// one variant cannot be inserted under another.
#[derive(Debug, Default)]
pub struct Collection {
    playlists: HashMap<String, PlaylistRef>,
    auto_playlists: HashMap<String, AutoPlaylistRef>,
    stations: HashMap<String, StationRef>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains(&self, guid: &str) -> bool {
        self.playlists.contains_key(guid)
            || self.auto_playlists.contains_key(guid)
            || self.stations.contains_key(guid)
    }

    pub fn insert_playlist(&mut self, playlist: Playlist) -> Result<PlaylistRef, CollectionError> {
        if self.contains(&playlist.guid) {
            return Err(CollectionError::DuplicateGuid {
                guid: playlist.guid,
            });
        }
        let guid = playlist.guid.clone();
        let handle = playlist.shared();
        self.playlists.insert(guid, handle.clone());
        Ok(handle)
    }

    pub fn insert_auto_playlist(
        &mut self,
        playlist: AutoPlaylist,
    ) -> Result<AutoPlaylistRef, CollectionError> {
        if self.contains(&playlist.guid) {
            return Err(CollectionError::DuplicateGuid {
                guid: playlist.guid,
            });
        }
        let guid = playlist.guid.clone();
        let handle = playlist.shared();
        self.auto_playlists.insert(guid, handle.clone());
        Ok(handle)
    }

    pub fn insert_station(&mut self, station: Station) -> Result<StationRef, CollectionError> {
        if self.contains(&station.guid) {
            return Err(CollectionError::DuplicateGuid { guid: station.guid });
        }
        let guid = station.guid.clone();
        let handle = station.shared();
        self.stations.insert(guid, handle.clone());
        Ok(handle)
    }

    /// Resolve a guid to its entity, trying playlists, then auto
    /// playlists, then stations. First match wins; the order is fixed.
    pub fn resolve(&self, guid: &str) -> Option<CatalogEntry> {
        if let Some(p) = self.playlists.get(guid) {
            return Some(CatalogEntry::Playlist(p.clone()));
        }
        if let Some(p) = self.auto_playlists.get(guid) {
            return Some(CatalogEntry::AutoPlaylist(p.clone()));
        }
        self.stations
            .get(guid)
            .map(|s| CatalogEntry::Station(s.clone()))
    }

    pub fn len(&self) -> usize {
        self.playlists.len() + self.auto_playlists.len() + self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Live collections keyed by source.
///
/// Mutated only from the thread that owns the view (the engine's view
/// actor); everything else goes through shared entity handles.
#[derive(Debug, Default)]
pub struct CollectionIndex {
    collections: HashMap<Source, Collection>,
}

impl CollectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source's collection, replacing any previous one.
    pub fn attach(&mut self, source: Source, collection: Collection) {
        debug!(%source, entries = collection.len(), "attaching collection");
        self.collections.insert(source, collection);
    }

    /// Drop a source's collection when it goes offline.
    pub fn detach(&mut self, source: &Source) -> Option<Collection> {
        debug!(%source, "detaching collection");
        self.collections.remove(source)
    }

    pub fn collection(&self, source: &Source) -> Option<&Collection> {
        self.collections.get(source)
    }
}
