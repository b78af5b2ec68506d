//! Track records and their identity.
//!
//! A [`Track`] is one entry of the music library. Its [`TrackId`] is assigned
//! once at creation and never changes; everything else can be rewritten by
//! [`crate::library::Library::update`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// Opaque, session-unique identity of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(Uuid);

impl TrackId {
    /// Fresh random identity.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Lower-cased `(title, artist)` pair.
///
/// Used as the vibe graph's lookup key and by cursor jumps that must match
/// tracks coming from an older snapshot of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedKey {
    pub title: String,
    pub artist: String,
}

impl NormalizedKey {
    #[must_use]
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            artist: artist.to_lowercase(),
        }
    }
}

/// Everything needed to create a track, minus the identity.
///
/// This is also the shape of one entry in a JSON catalog seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackFields {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: String,
    /// Free-text mood label, e.g. "Chill".
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub audio_path: Option<PathBuf>,
    #[serde(default)]
    pub artwork_path: Option<PathBuf>,
}

impl TrackFields {
    #[must_use]
    pub fn new(title: &str, artist: &str, genre: &str, vibe: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            vibe: vibe.to_string(),
            audio_path: None,
            artwork_path: None,
        }
    }

    #[must_use]
    pub fn with_audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_artwork(mut self, path: impl Into<PathBuf>) -> Self {
        self.artwork_path = Some(path.into());
        self
    }
}

/// Replacement values for [`crate::library::Library::update`].
///
/// Text fields are always overwritten. The locators are only replaced when
/// `Some`, so an editor that did not pick a new file keeps the old one.
#[derive(Debug, Clone, Default)]
pub struct TrackUpdate {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub vibe: String,
    pub audio_path: Option<PathBuf>,
    pub artwork_path: Option<PathBuf>,
}

impl TrackUpdate {
    #[must_use]
    pub fn new(title: &str, artist: &str, genre: &str, vibe: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            vibe: vibe.to_string(),
            audio_path: None,
            artwork_path: None,
        }
    }
}

/// One library entry.
///
/// Equality is by identity only: two tracks with identical metadata but
/// different ids are different tracks.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    id: TrackId,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub vibe: String,
    /// Stored as given; never opened or validated here.
    pub audio_path: Option<PathBuf>,
    pub artwork_path: Option<PathBuf>,
}

impl Track {
    /// Create a track with a freshly assigned identity.
    #[must_use]
    pub fn new(fields: TrackFields) -> Self {
        let track = Self {
            id: TrackId::new(),
            title: fields.title,
            artist: fields.artist,
            genre: fields.genre,
            vibe: fields.vibe,
            audio_path: fields.audio_path,
            artwork_path: fields.artwork_path,
        };
        log::trace!("Created track `{}' with id {}", track, track.id);
        track
    }

    #[must_use]
    pub fn id(&self) -> TrackId {
        self.id
    }

    #[must_use]
    pub fn normalized_key(&self) -> NormalizedKey {
        NormalizedKey::new(&self.title, &self.artist)
    }

    pub(crate) fn apply(&mut self, update: TrackUpdate) {
        self.title = update.title;
        self.artist = update.artist;
        self.genre = update.genre;
        self.vibe = update.vibe;
        if let Some(path) = update.audio_path {
            self.audio_path = Some(path);
        }
        if let Some(path) = update.artwork_path {
            self.artwork_path = Some(path);
        }
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl std::hash::Hash for Track {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({}, {})", self.title, self.artist, self.genre, self.vibe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_unique() {
        let a = Track::new(TrackFields::new("Riptide", "Vance Joy", "Indie Folk", "Happy"));
        let b = Track::new(TrackFields::new("Riptide", "Vance Joy", "Indie Folk", "Happy"));

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b, "Equal metadata must not make tracks equal");
        assert_eq!(a.normalized_key(), b.normalized_key());
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_normalized_key_ignores_case() {
        let track = Track::new(TrackFields::new("Shape of You", "Ed Sheeran", "Pop", "Happy"));
        assert_eq!(track.normalized_key(), NormalizedKey::new("SHAPE OF YOU", "ed sheeran"));
    }

    #[test]
    fn test_apply_keeps_locators_when_absent() {
        let mut track = Track::new(
            TrackFields::new("Sorai", "Nadin Amizah", "Pop", "Chill")
                .with_audio("/music/sorai.mp3")
                .with_artwork("/cover/sorai.jpg"),
        );
        let id = track.id();

        track.apply(TrackUpdate::new("Sorai (Live)", "Nadin Amizah", "Folk", "Sad"));

        assert_eq!(track.id(), id);
        assert_eq!(track.title, "Sorai (Live)");
        assert_eq!(track.vibe, "Sad");
        assert_eq!(track.audio_path, Some(PathBuf::from("/music/sorai.mp3")));
        assert_eq!(track.artwork_path, Some(PathBuf::from("/cover/sorai.jpg")));

        let mut update = TrackUpdate::new("Sorai", "Nadin Amizah", "Pop", "Chill");
        update.audio_path = Some(PathBuf::from("/music/sorai-v2.mp3"));
        track.apply(update);
        assert_eq!(track.audio_path, Some(PathBuf::from("/music/sorai-v2.mp3")));
    }

    #[test]
    fn test_serialized_track_reseeds_with_new_identity() {
        let track = Track::new(TrackFields::new("Sorai", "Nadin Amizah", "Pop", "Chill"));
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["id"], track.id().to_string());

        let fields: TrackFields = serde_json::from_value(json).unwrap();
        assert_eq!(fields, TrackFields::new("Sorai", "Nadin Amizah", "Pop", "Chill"));
        assert_ne!(Track::new(fields).id(), track.id());
    }

    #[test]
    fn test_track_id_parses_back() {
        let id = TrackId::new();
        let parsed: TrackId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}
