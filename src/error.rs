use crate::track::TrackId;
use thiserror::Error;

/// Recoverable failures of the in-memory library structures.
///
/// "Nothing matched" is not an error: searches return an empty `Vec` and
/// cursor or vibe lookups return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Track {0} not found")]
    NotFound(TrackId),
    #[error("Index {index} out of range for {len} tracks")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0} is empty")]
    EmptyContainer(&'static str),
    #[error("Playlist `{0}' not found")]
    PlaylistNotFound(String),
    #[error("A playlist named `{0}' already exists")]
    PlaylistExists(String),
    #[error("Playlist name cannot be empty")]
    EmptyPlaylistName,
}

pub type Result<T> = std::result::Result<T, LibraryError>;
