//! # Library Controller
//!
//! [`Library`] owns the canonical [`TrackList`] of every track and the
//! [`VibeGraph`] built from it. It is the only write path for track data:
//! presentation code, playlists and the playback session all go through it
//! and hold copies, never references into it.
//!
//! ## Consistency
//!
//! Every mutation rebuilds the vibe graph from the current catalog, so the
//! two structures never disagree. `update` and `delete` either apply fully
//! or leave the library untouched.

use crate::algorithm::VibeScorer;
use crate::catalog::default_catalog;
use crate::error::{LibraryError, Result};
use crate::search::SearchList;
use crate::sequence::TrackList;
use crate::track::{Track, TrackFields, TrackId, TrackUpdate};
use crate::vibe::VibeGraph;
use log::{debug, info};
use std::path::Path;

#[derive(Debug)]
pub struct Library {
    tracks: TrackList,
    graph: VibeGraph,
    rebuild_on_add: bool,
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl Library {
    /// Empty library scored with the built-in vibe table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_graph(VibeGraph::new())
    }

    #[must_use]
    pub fn with_scorer(scorer: Box<dyn VibeScorer>) -> Self {
        Self::with_graph(VibeGraph::with_scorer(scorer))
    }

    fn with_graph(graph: VibeGraph) -> Self {
        Self {
            tracks: TrackList::new(),
            graph,
            rebuild_on_add: true,
        }
    }

    /// Load `fields` as new tracks (fresh identities) and build the index once.
    #[must_use]
    pub fn with_catalog(mut self, fields: impl IntoIterator<Item = TrackFields>) -> Self {
        self.tracks.extend(fields.into_iter().map(Track::new));
        self.rebuild_index();
        info!("Loaded {} tracks into the library", self.tracks.len());
        self
    }

    /// Load the built-in catalog with locators under `assets_dir`.
    #[must_use]
    pub fn with_default_catalog(self, assets_dir: &Path) -> Self {
        self.with_catalog(default_catalog(assets_dir))
    }

    /// When `false`, [`Library::add`] only registers the new track in the
    /// vibe graph and the caller must run [`Library::rebuild_index`] before
    /// relying on vibe navigation for it.
    pub fn set_rebuild_on_add(&mut self, rebuild: bool) {
        self.rebuild_on_add = rebuild;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Every track in catalog order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Track> {
        self.tracks.to_vec()
    }

    #[must_use]
    pub fn tracks(&self) -> &TrackList {
        &self.tracks
    }

    #[must_use]
    pub fn graph(&self) -> &VibeGraph {
        &self.graph
    }

    #[must_use]
    pub fn find_by_id(&self, id: TrackId) -> Option<&Track> {
        self.tracks.find(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: TrackId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Case-insensitive lookup through the vibe graph's key index.
    #[must_use]
    pub fn find_by_title_artist(&self, title: &str, artist: &str) -> Option<&Track> {
        self.graph.find(title, artist)
    }

    /// First track in catalog order whose title matches, ignoring case.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Track> {
        let wanted = title.to_lowercase();
        self.tracks.find(|t| t.title.to_lowercase() == wanted)
    }

    /// Tracks matching `keyword` in title, artist, genre or vibe.
    ///
    /// An empty keyword returns the whole catalog.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<Track> {
        if keyword.is_empty() {
            return self.get_all();
        }

        let snapshot: SearchList = self.tracks.iter().collect();
        let found = snapshot.search(keyword);
        debug!("Search `{}' matched {} of {} tracks", keyword, found.len(), snapshot.len());
        found
    }

    /// Create a track from `fields`, append it and index it.
    pub fn add(&mut self, fields: TrackFields) -> Track {
        let track = Track::new(fields);
        self.tracks.append(track.clone());
        self.graph.register(&track);
        if self.rebuild_on_add {
            self.rebuild_index();
        }
        info!("Added `{}' ({})", track, track.id());
        track
    }

    /// Overwrite a track's metadata in place and reindex.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] when no track has `id`.
    pub fn update(&mut self, id: TrackId, update: TrackUpdate) -> Result<Track> {
        let track = self
            .tracks
            .find_mut(|t| t.id() == id)
            .ok_or(LibraryError::NotFound(id))?;
        track.apply(update);
        let updated = track.clone();

        self.rebuild_index();
        info!("Updated `{}' ({})", updated, id);
        Ok(updated)
    }

    /// Remove a track and reindex.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] when no track has `id`.
    pub fn delete(&mut self, id: TrackId) -> Result<Track> {
        let index = self
            .tracks
            .position(|t| t.id() == id)
            .ok_or(LibraryError::NotFound(id))?;
        let removed = self.tracks.remove_at(index)?;

        self.rebuild_index();
        info!("Deleted `{}' ({})", removed, id);
        Ok(removed)
    }

    pub fn rebuild_index(&mut self) {
        self.graph.rebuild(self.tracks.iter());
    }

    #[must_use]
    pub fn next_related(&self, track: &Track) -> Option<&Track> {
        self.graph.next_by_vibe(track)
    }

    #[must_use]
    pub fn prev_related(&self, track: &Track) -> Option<&Track> {
        self.graph.prev_by_vibe(track)
    }

    /// Members of one literal vibe bucket in link order.
    #[must_use]
    pub fn tracks_with_vibe(&self, vibe: &str) -> Vec<Track> {
        self.graph
            .tracks_with_vibe(vibe)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::TableVibeScorer;
    use std::path::PathBuf;

    fn sample() -> Library {
        Library::new().with_catalog([
            TrackFields::new("Levitating", "Dua Lipa", "Pop", "Happy"),
            TrackFields::new("Riptide", "Vance Joy", "Indie Folk", "Happy"),
            TrackFields::new("Rasa Ini", "Vierra", "Pop", "Sad"),
            TrackFields::new("Sorai", "Nadin Amizah", "Pop", "Chill"),
            TrackFields::new("Best Part", "Daniel Caesar & H.E.R", "R&B", "Chill"),
        ])
    }

    fn titles(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_get_all_preserves_order() {
        let library = sample();
        assert_eq!(library.len(), 5);
        assert_eq!(
            titles(&library.get_all()),
            ["Levitating", "Riptide", "Rasa Ini", "Sorai", "Best Part"]
        );
    }

    #[test]
    fn test_find_by_id_and_title_artist() {
        let library = sample();
        let riptide = library.get_all()[1].clone();

        assert_eq!(library.find_by_id(riptide.id()), Some(&riptide));
        assert!(library.find_by_id(TrackId::new()).is_none());
        assert_eq!(library.find_by_title_artist("RIPTIDE", "vance joy"), Some(&riptide));
        assert!(library.find_by_title_artist("Riptide", "Someone Else").is_none());
    }

    #[test]
    fn test_find_by_title_ignores_unicode_case() {
        let library = Library::new().with_catalog([
            TrackFields::new("Electric Love", "BØRNS", "Indie Pop", "Energetic"),
            TrackFields::new("Øya", "Someone", "Pop", "Chill"),
            TrackFields::new("øya", "Someone Else", "Pop", "Chill"),
        ]);

        let found = library.find_by_title("ØYA").unwrap();
        assert_eq!(found.artist, "Someone", "First match in catalog order");
        assert_eq!(library.find_by_title("electric love").map(|t| t.artist.as_str()), Some("BØRNS"));
        assert!(library.find_by_title("Electric").is_none());
    }

    #[test]
    fn test_search() {
        let library = sample();
        assert_eq!(titles(&library.search("pop")), ["Levitating", "Rasa Ini", "Sorai"]);
        assert_eq!(titles(&library.search("CHILL")), ["Sorai", "Best Part"]);
        assert_eq!(library.search(""), library.get_all());
        assert!(library.search("metal").is_empty());
        assert_eq!(library.len(), 5, "Search must not touch the catalog");
    }

    #[test]
    fn test_add_links_into_bucket() {
        let mut library = sample();
        let added = library.add(TrackFields::new("Sad Song", "Someone", "Indie", "Sad"));

        assert_eq!(library.len(), 6);
        assert_eq!(library.get_all().last(), Some(&added));
        let rasa = library.find_by_title_artist("Rasa Ini", "Vierra").cloned().unwrap();
        assert_eq!(library.next_related(&rasa), Some(&added));
        assert_eq!(library.prev_related(&added), Some(&rasa));
    }

    #[test]
    fn test_add_without_rebuild_defers_linking() {
        let mut library = sample();
        library.set_rebuild_on_add(false);
        let added = library.add(TrackFields::new("Another", "Someone", "Pop", "Sad"));

        assert!(library.next_related(&added).is_none());
        assert_eq!(library.find_by_title_artist("another", "someone"), Some(&added));

        library.rebuild_index();
        assert!(library.prev_related(&added).is_some());
    }

    #[test]
    fn test_update_rewrites_fields_and_reindexes() {
        let mut library = sample();
        let sorai = library.get_all()[3].clone();

        let mut change = TrackUpdate::new("Sorai", "Nadin Amizah", "Pop", "Happy");
        change.artwork_path = Some(PathBuf::from("/covers/sorai.jpg"));
        let updated = library.update(sorai.id(), change).unwrap();

        assert_eq!(updated.id(), sorai.id());
        assert_eq!(updated.vibe, "Happy");
        assert_eq!(updated.artwork_path, Some(PathBuf::from("/covers/sorai.jpg")));
        assert_eq!(library.tracks_with_vibe("Happy").len(), 3);
        assert_eq!(titles(&library.tracks_with_vibe("Chill")), ["Best Part"]);

        let best_part = library.get_all()[4].clone();
        assert!(library.next_related(&best_part).is_none());
    }

    #[test]
    fn test_update_unknown_id_leaves_state() {
        let mut library = sample();
        let before = library.get_all();
        let missing = TrackId::new();

        let result = library.update(missing, TrackUpdate::new("x", "y", "z", "Sad"));
        assert_eq!(result, Err(LibraryError::NotFound(missing)));
        assert_eq!(library.get_all(), before);
        assert_eq!(library.tracks_with_vibe("Sad").len(), 1);
    }

    #[test]
    fn test_delete_reconnects_neighbours() {
        let mut library = Library::new().with_catalog([
            TrackFields::new("a", "x", "Pop", "Sad"),
            TrackFields::new("b", "x", "Pop", "Sad"),
            TrackFields::new("c", "x", "Pop", "Sad"),
        ]);
        let all = library.get_all();

        let removed = library.delete(all[1].id()).unwrap();
        assert_eq!(removed, all[1]);
        assert_eq!(library.get_all(), vec![all[0].clone(), all[2].clone()]);
        assert_eq!(library.next_related(&all[0]), Some(&all[2]));
        assert!(library.next_related(&all[1]).is_none());

        assert_eq!(library.delete(all[1].id()), Err(LibraryError::NotFound(all[1].id())));
    }

    #[test]
    fn test_with_default_catalog() {
        let library = Library::new().with_default_catalog(Path::new("/srv/assets"));
        assert_eq!(library.len(), 26);
        assert_eq!(titles(&library.tracks_with_vibe("Happy")), ["Levitating", "Riptide", "Shape of You"]);
    }

    #[test]
    fn test_custom_scorer_is_used() {
        let library = Library::with_scorer(Box::new(TableVibeScorer::new([("happy", (9, 9))])))
            .with_catalog([TrackFields::new("a", "x", "Pop", "Happy")]);
        let track = library.get_all()[0].clone();
        assert_eq!(
            library.graph().score_of(&track),
            Some(crate::algorithm::VibeScore::new(9, 9))
        );
    }
}
