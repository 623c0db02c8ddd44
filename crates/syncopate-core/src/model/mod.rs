//! Catalog view entities
//!
//! Three playlist variants share one guid namespace per source. Entities
//! are handed out behind shared-ownership handles: the collection index
//! and any UI consumer hold the same `Arc`, so a post-commit mutation is
//! visible to every holder.

mod entry;
mod playlist;

pub use entry::CatalogEntry;
pub use playlist::{
    AutoPlaylist, AutoPlaylistRef, Playlist, PlaylistKind, PlaylistRef, Station, StationRef,
};
