//! Named playlists.
//!
//! Each [`Playlist`] keeps its own [`TrackList`] of catalog copies.
//! [`PlaylistBook`] owns all playlists of a session, keeps their names
//! unique and prunes tracks that were deleted from the library.

use crate::error::{LibraryError, Result};
use crate::library::Library;
use crate::sequence::TrackList;
use crate::track::{Track, TrackId};
use log::{debug, info};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Playlist {
    id: Uuid,
    name: String,
    pub cover: Option<PathBuf>,
    tracks: TrackList,
}

impl Playlist {
    #[must_use]
    pub fn new(name: &str, cover: Option<PathBuf>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            cover,
            tracks: TrackList::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, track: Track) {
        self.tracks.append(track);
    }

    pub fn add_all(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    /// Remove the first entry with `track_id`. Returns whether one existed.
    pub fn remove(&mut self, track_id: TrackId) -> bool {
        match self.tracks.position(|t| t.id() == track_id) {
            Some(index) => self.tracks.remove_at(index).is_ok(),
            None => false,
        }
    }

    #[must_use]
    pub fn tracks(&self) -> Vec<Track> {
        self.tracks.to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Drop entries the library no longer knows and refresh the others.
    fn retain_known(&mut self, library: &Library) -> usize {
        let before = self.tracks.len();
        self.tracks = self
            .tracks
            .iter()
            .filter_map(|t| library.find_by_id(t.id()).cloned())
            .collect();
        before - self.tracks.len()
    }
}

/// All playlists of one session, in creation order.
#[derive(Debug, Clone, Default)]
pub struct PlaylistBook {
    playlists: Vec<Playlist>,
}

impl PlaylistBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty playlist. Surrounding whitespace is trimmed from `name`.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EmptyPlaylistName`] for a blank name and
    /// [`LibraryError::PlaylistExists`] when the name is taken.
    pub fn create(&mut self, name: &str, cover: Option<PathBuf>) -> Result<&mut Playlist> {
        let name = self.available_name(name, None)?;
        info!("Created playlist `{name}'");
        let index = self.playlists.len();
        self.playlists.push(Playlist::new(&name, cover));
        Ok(&mut self.playlists[index])
    }

    /// Give playlist `id` a new name, under the same rules as [`PlaylistBook::create`].
    /// Keeping the current name is allowed.
    ///
    /// # Errors
    ///
    /// [`LibraryError::PlaylistNotFound`], [`LibraryError::EmptyPlaylistName`]
    /// or [`LibraryError::PlaylistExists`].
    pub fn rename(&mut self, id: Uuid, new_name: &str) -> Result<()> {
        if self.find_by_id(id).is_none() {
            return Err(LibraryError::PlaylistNotFound(id.to_string()));
        }
        let name = self.available_name(new_name, Some(id))?;
        let playlist = self.get_mut(id)?;
        info!("Renamed playlist `{}' to `{name}'", playlist.name);
        playlist.name = name;
        Ok(())
    }

    /// Remove playlist `id` and hand it back.
    ///
    /// # Errors
    ///
    /// [`LibraryError::PlaylistNotFound`] when no playlist has `id`.
    pub fn delete(&mut self, id: Uuid) -> Result<Playlist> {
        let index = self
            .playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(id.to_string()))?;
        let removed = self.playlists.remove(index);
        info!("Deleted playlist `{}'", removed.name);
        Ok(removed)
    }

    /// Trimmed `name` if no playlist other than `owner` uses it.
    fn available_name(&self, name: &str, owner: Option<Uuid>) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LibraryError::EmptyPlaylistName);
        }
        if self
            .playlists
            .iter()
            .any(|p| p.name == name && Some(p.id) != owner)
        {
            return Err(LibraryError::PlaylistExists(name.to_string()));
        }
        Ok(name.to_string())
    }

    #[must_use]
    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    #[must_use]
    pub fn find_by_id(&self, id: Uuid) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// First playlist called `name`.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.name == name)
    }

    /// # Errors
    ///
    /// [`LibraryError::PlaylistNotFound`] when no playlist has `id`.
    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(id.to_string()))
    }

    /// Prune every playlist against the library. Returns how many entries
    /// were dropped in total.
    pub fn retain_known(&mut self, library: &Library) -> usize {
        let dropped: usize = self
            .playlists
            .iter_mut()
            .map(|p| p.retain_known(library))
            .sum();
        if dropped > 0 {
            debug!("Dropped {dropped} deleted tracks from playlists");
        }
        dropped
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
