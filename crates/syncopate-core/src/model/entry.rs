use super::playlist::{AutoPlaylistRef, PlaylistRef, StationRef};

/// A resolved catalog entity, tagged by variant.
///
/// Resolution across a source's three collections yields exactly one of
/// these; callers match exhaustively instead of chaining nullable lookups,
/// so an unhandled variant is a compile error rather than a runtime
/// assumption.
#[derive(Debug, Clone)]
pub enum CatalogEntry {
    Playlist(PlaylistRef),
    AutoPlaylist(AutoPlaylistRef),
    Station(StationRef),
}

impl CatalogEntry {
    pub fn guid(&self) -> String {
        match self {
            CatalogEntry::Playlist(p) => p.read().guid.clone(),
            CatalogEntry::AutoPlaylist(p) => p.read().guid.clone(),
            CatalogEntry::Station(s) => s.read().guid.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            CatalogEntry::Playlist(p) => p.read().title.clone(),
            CatalogEntry::AutoPlaylist(p) => p.read().title.clone(),
            CatalogEntry::Station(s) => s.read().title.clone(),
        }
    }

    /// Retitle the entity through its shared handle; every holder of the
    /// handle observes the change.
    pub fn set_title(&self, title: &str) {
        match self {
            CatalogEntry::Playlist(p) => p.write().title = title.to_string(),
            CatalogEntry::AutoPlaylist(p) => p.write().title = title.to_string(),
            CatalogEntry::Station(s) => s.write().title = title.to_string(),
        }
    }

    /// Variant name for diagnostics.
    pub fn variant(&self) -> &'static str {
        match self {
            CatalogEntry::Playlist(_) => "playlist",
            CatalogEntry::AutoPlaylist(_) => "auto",
            CatalogEntry::Station(_) => "station",
        }
    }
}
