//! # Playback Session
//!
//! The player-side state that sits next to the [`Library`]:
//!
//! - the "now playing" [`TrackList`] and its cursor
//! - the play-next [`PlayQueue`]
//! - the [`History`] of played tracks
//! - the set of favorite tracks
//!
//! ## Navigation Policy
//!
//! `next` drains the queue first. Otherwise, while browsing the whole
//! library ([`BrowseMode::Home`]) it prefers a track with a related vibe
//! and falls back to circular catalog order; inside a playlist
//! ([`BrowseMode::Playlist`]) it only follows the list. `previous` mirrors
//! this without consulting the queue.
//!
//! Every track that starts playing is pushed onto the history.

use crate::error::{LibraryError, Result};
use crate::history::History;
use crate::library::Library;
use crate::playlist::Playlist;
use crate::queue::PlayQueue;
use crate::sequence::TrackList;
use crate::track::{Track, TrackId};
use log::{debug, info};
use std::collections::HashSet;

/// What the user is currently browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowseMode {
    /// Whole library; vibe navigation first.
    #[default]
    Home,
    /// A playlist or other explicit list; sequential navigation only.
    Playlist,
}

#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    now_playing: TrackList,
    queue: PlayQueue,
    history: History,
    favorites: HashSet<TrackId>,
    mode: BrowseMode,
}

impl PlaybackSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session whose "now playing" list is the whole catalog.
    #[must_use]
    pub fn from_library(library: &Library) -> Self {
        let mut session = Self::new();
        session.load(library.get_all());
        session
    }

    /// Replace the "now playing" list. Nothing is selected afterwards.
    pub fn load(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.now_playing.clear();
        self.now_playing.extend(tracks);
    }

    #[must_use]
    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BrowseMode) {
        debug!("Browse mode set to {mode:?}");
        self.mode = mode;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Track> {
        self.now_playing.current_track()
    }

    #[must_use]
    pub fn now_playing(&self) -> &TrackList {
        &self.now_playing
    }

    /// Start playing `track`: record it and point the cursor at it,
    /// appending it to the list if no entry has the same title and artist.
    pub fn play(&mut self, track: Track) -> Track {
        info!("Now playing: {} - {}", track.title, track.artist);
        self.history.push(track.clone());

        if self.now_playing.jump_to(&track).is_none() {
            self.now_playing.append_selected(track.clone());
        }
        track
    }

    /// Play a track the user picked directly; it leaves the queue if queued.
    pub fn play_selected(&mut self, track: Track) -> Track {
        self.queue.remove_first_match(&track);
        self.play(track)
    }

    /// Load a playlist into "now playing" and start its first track.
    ///
    /// # Errors
    ///
    /// [`LibraryError::EmptyContainer`] when the playlist has no tracks.
    pub fn play_playlist(&mut self, playlist: &Playlist) -> Result<Track> {
        self.load(playlist.tracks());
        let first = self
            .now_playing
            .select_first()
            .cloned()
            .ok_or(LibraryError::EmptyContainer("playlist"))?;
        Ok(self.play(first))
    }

    /// Pick and play the next track, see the module docs for the order.
    pub fn next(&mut self, library: &Library) -> Option<Track> {
        if let Some(queued) = self.queue.dequeue() {
            debug!("Next from queue");
            return Some(self.play(queued));
        }

        let candidate = match self.now_playing.current_track().cloned() {
            None => self.now_playing.select_first().cloned(),
            Some(current) => {
                let related = match self.mode {
                    BrowseMode::Home => library.next_related(&current).cloned(),
                    BrowseMode::Playlist => None,
                };
                related.or_else(|| self.now_playing.advance().cloned())
            }
        };

        candidate.map(|track| self.play(track))
    }

    /// Pick and play the previous track.
    pub fn previous(&mut self, library: &Library) -> Option<Track> {
        let candidate = match self.now_playing.current_track().cloned() {
            None => self.now_playing.select_first().cloned(),
            Some(current) => {
                let related = match self.mode {
                    BrowseMode::Home => library.prev_related(&current).cloned(),
                    BrowseMode::Playlist => None,
                };
                related.or_else(|| self.now_playing.retreat().cloned())
            }
        };

        candidate.map(|track| self.play(track))
    }

    pub fn enqueue(&mut self, track: Track) {
        self.queue.enqueue(track);
    }

    pub fn dequeue(&mut self) -> Option<Track> {
        self.queue.dequeue()
    }

    pub fn remove_from_queue(&mut self, track: &Track) -> bool {
        self.queue.remove_first_match(track)
    }

    pub fn reorder_queue(&mut self, order: Vec<Track>) {
        self.queue.reorder(order);
    }

    #[must_use]
    pub fn queued(&self) -> Vec<Track> {
        self.queue.to_vec()
    }

    #[must_use]
    pub fn queue(&self) -> &PlayQueue {
        &self.queue
    }

    pub fn push_history(&mut self, track: Track) {
        self.history.push(track);
    }

    pub fn pop_history(&mut self) -> Option<Track> {
        self.history.pop()
    }

    /// Most recent first.
    #[must_use]
    pub fn peek_history(&self) -> Vec<Track> {
        self.history.peek_all()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Flip the favorite flag. Returns `true` if the track is now a favorite.
    pub fn toggle_favorite(&mut self, track: &Track) -> bool {
        let id = track.id();
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn remove_favorite(&mut self, track: &Track) {
        self.favorites.remove(&track.id());
    }

    #[must_use]
    pub fn is_favorite(&self, track: &Track) -> bool {
        self.favorites.contains(&track.id())
    }

    /// Favorite tracks in catalog order.
    #[must_use]
    pub fn favorites(&self, library: &Library) -> Vec<Track> {
        library
            .tracks()
            .iter()
            .filter(|t| self.favorites.contains(&t.id()))
            .cloned()
            .collect()
    }

    /// Resynchronise with the library after it was edited.
    ///
    /// "Now playing" is reloaded from the catalog and keeps its cursor if
    /// the current track still exists. Queue, history and favorites lose
    /// deleted tracks; surviving entries pick up edited metadata.
    pub fn refresh(&mut self, library: &Library) {
        let current = self.now_playing.current_track().map(Track::id);
        self.load(library.get_all());
        if let Some(track) = current.and_then(|id| library.find_by_id(id)) {
            self.now_playing.jump_to(track);
        }

        let resolve = |id: TrackId| library.find_by_id(id).cloned();
        self.queue.revalidate(resolve);
        self.history.revalidate(resolve);
        self.favorites.retain(|id| library.contains(*id));
        debug!(
            "Session refreshed: {} queued, {} in history, {} favorites",
            self.queue.len(),
            self.history.len(),
            self.favorites.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{TrackFields, TrackUpdate};

    fn library() -> Library {
        Library::new().with_catalog([
            TrackFields::new("a", "x", "Pop", "Happy"),
            TrackFields::new("b", "x", "Pop", "Sad"),
            TrackFields::new("c", "x", "Pop", "Happy"),
            TrackFields::new("d", "x", "Rock", "Energetic"),
        ])
    }

    fn title(track: Option<Track>) -> String {
        track.map(|t| t.title).unwrap_or_default()
    }

    #[test]
    fn test_home_mode_prefers_vibe_then_falls_back() {
        let library = library();
        let mut session = PlaybackSession::from_library(&library);

        assert_eq!(title(session.next(&library)), "a");
        assert_eq!(title(session.next(&library)), "c");
        assert_eq!(title(session.next(&library)), "a", "Two-track bucket bounces back");

        let d = library.get_all()[3].clone();
        session.play(d);
        assert_eq!(title(session.next(&library)), "a", "Lone vibe wraps in catalog order");
    }

    #[test]
    fn test_playlist_mode_is_sequential() {
        let library = library();
        let mut session = PlaybackSession::from_library(&library);
        session.set_mode(BrowseMode::Playlist);

        let order: Vec<_> = (0..5).map(|_| title(session.next(&library))).collect();
        assert_eq!(order, ["a", "b", "c", "d", "a"]);
        assert_eq!(title(session.previous(&library)), "d");
    }

    #[test]
    fn test_previous_in_home_mode() {
        let library = library();
        let mut session = PlaybackSession::from_library(&library);
        let c = library.get_all()[2].clone();
        session.play(c);

        assert_eq!(title(session.previous(&library)), "a");
        let b = library.get_all()[1].clone();
        session.play(b);
        assert_eq!(title(session.previous(&library)), "a", "Lone vibe retreats in order");
    }

    #[test]
    fn test_queue_has_priority() {
        let library = library();
        let all = library.get_all();
        let mut session = PlaybackSession::from_library(&library);
        session.set_mode(BrowseMode::Playlist);
        session.play(all[0].clone());

        session.enqueue(all[3].clone());
        session.enqueue(all[1].clone());
        assert_eq!(title(session.next(&library)), "d");
        assert_eq!(title(session.next(&library)), "b");
        assert_eq!(title(session.next(&library)), "c", "Continues from the queued track");
        assert!(session.queued().is_empty());
    }

    #[test]
    fn test_play_selected_leaves_queue() {
        let library = library();
        let all = library.get_all();
        let mut session = PlaybackSession::from_library(&library);
        session.enqueue(all[1].clone());
        session.enqueue(all[2].clone());
        session.enqueue(all[1].clone());

        session.play_selected(all[1].clone());
        assert_eq!(session.queued(), vec![all[2].clone(), all[1].clone()]);
        assert_eq!(session.current(), Some(&all[1]));

        session.reorder_queue(vec![all[1].clone(), all[2].clone()]);
        assert!(session.remove_from_queue(&all[2]));
        assert_eq!(session.dequeue(), Some(all[1].clone()));
        assert!(session.dequeue().is_none());
    }

    #[test]
    fn test_history_records_every_play() {
        let library = library();
        let mut session = PlaybackSession::from_library(&library);
        session.set_mode(BrowseMode::Playlist);
        session.next(&library);
        session.next(&library);
        session.previous(&library);

        let played: Vec<_> = session.peek_history().into_iter().map(|t| t.title).collect();
        assert_eq!(played, ["a", "b", "a"]);
        assert_eq!(session.history().len(), 3);
        assert_eq!(title(session.pop_history()), "a");

        session.push_history(library.get_all()[3].clone());
        assert_eq!(title(session.peek_history().into_iter().next()), "d");
    }

    #[test]
    fn test_play_unknown_track_appends() {
        let library = library();
        let mut session = PlaybackSession::from_library(&library);
        let outsider = Track::new(TrackFields::new("z", "y", "Jazz", "Chill"));

        session.play(outsider.clone());
        assert_eq!(session.now_playing().len(), 5);
        assert_eq!(session.current(), Some(&outsider));
    }

    #[test]
    fn test_play_playlist() {
        let library = library();
        let all = library.get_all();
        let mut session = PlaybackSession::new();

        let empty = Playlist::new("Empty", None);
        assert_eq!(
            session.play_playlist(&empty),
            Err(LibraryError::EmptyContainer("playlist"))
        );

        let mut playlist = Playlist::new("Two", None);
        playlist.add_all([all[3].clone(), all[1].clone()]);
        session.set_mode(BrowseMode::Playlist);
        assert_eq!(session.play_playlist(&playlist), Ok(all[3].clone()));
        assert_eq!(title(session.next(&library)), "b");
        assert_eq!(title(session.next(&library)), "d");
    }

    #[test]
    fn test_favorites() {
        let library = library();
        let all = library.get_all();
        let mut session = PlaybackSession::from_library(&library);

        assert!(session.toggle_favorite(&all[2]));
        assert!(session.toggle_favorite(&all[0]));
        assert!(session.is_favorite(&all[0]));
        assert_eq!(session.favorites(&library), vec![all[0].clone(), all[2].clone()]);

        assert!(!session.toggle_favorite(&all[0]));
        session.remove_favorite(&all[2]);
        assert!(session.favorites(&library).is_empty());
    }

    #[test]
    fn test_refresh_after_catalog_edits() {
        let mut library = library();
        let all = library.get_all();
        let mut session = PlaybackSession::from_library(&library);
        session.play(all[2].clone());
        session.enqueue(all[1].clone());
        session.enqueue(all[3].clone());
        session.toggle_favorite(&all[1]);
        session.toggle_favorite(&all[3]);

        library.delete(all[1].id()).unwrap();
        library
            .update(all[3].id(), TrackUpdate::new("d2", "x", "Rock", "Energetic"))
            .unwrap();
        session.refresh(&library);

        assert_eq!(session.now_playing().len(), 3);
        assert_eq!(session.current(), Some(&all[2]));
        let queued: Vec<_> = session.queued().into_iter().map(|t| t.title).collect();
        assert_eq!(queued, ["d2"]);
        assert_eq!(session.favorites(&library).len(), 1);

        library.delete(all[2].id()).unwrap();
        session.refresh(&library);
        assert!(session.current().is_none());
        assert!(session.peek_history().is_empty());
    }
}
