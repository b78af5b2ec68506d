//! In-memory music library that navigates by vibe.
//!
//! Core modules:
//! - [`library`] - Catalog controller, the only write path for tracks
//! - [`sequence`] - Cursor-bearing doubly linked track list
//! - [`vibe`] - Vibe graph: per-tag chains ordered by score
//! - [`algorithm`] - Vibe scoring (`VibeScorer` and the built-in table)
//! - [`playback`] - Playback session: queue, history, favorites, next/previous
//!
//! ### Supporting Modules
//!
//! - [`track`] - Track records and identity
//! - [`search`] - Singly linked snapshot used for keyword search
//! - [`queue`] - FIFO play-next queue
//! - [`history`] - LIFO play history
//! - [`playlist`] - Named playlists
//! - [`catalog`] - Built-in catalog and JSON seeds
//! - [`config`] - Configuration and data directory management
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`error`] - Library error type
//!
//! ## Quick Start Example
//!
//! ```
//! use vibedeck::library::Library;
//! use vibedeck::playback::PlaybackSession;
//! use vibedeck::track::TrackFields;
//!
//! let library = Library::new().with_catalog([
//!     TrackFields::new("Levitating", "Dua Lipa", "Pop", "Happy"),
//!     TrackFields::new("Rasa Ini", "Vierra", "Pop", "Sad"),
//!     TrackFields::new("Riptide", "Vance Joy", "Indie Folk", "Happy"),
//! ]);
//!
//! // Keyword search scans a snapshot and keeps catalog order
//! assert_eq!(library.search("pop").len(), 2);
//!
//! // Tracks sharing a vibe are linked to each other
//! let levitating = library.find_by_title_artist("levitating", "dua lipa").unwrap();
//! assert_eq!(library.next_related(levitating).unwrap().title, "Riptide");
//!
//! // The session prefers vibe neighbours when browsing the whole library
//! let mut session = PlaybackSession::from_library(&library);
//! session.play(levitating.clone());
//! assert_eq!(session.next(&library).unwrap().title, "Riptide");
//! ```
//!
//! ## Vibe Navigation
//!
//! Every track belongs to the bucket of its literal vibe tag. Inside a
//! bucket tracks are stably sorted by `(mood, energy)` and chained in that
//! order, so "next related" walks up the chain. The top member has no link
//! above it and falls back to the one below, so repeated "next" from there
//! alternates between the two highest members. A track alone in its bucket
//! has no related track.
//!
//! The score table can be replaced in the config file:
//!
//! ```json
//! { "vibe_scores": { "happy": [3, 3], "chill": [2, 1], "sad": [1, 1] } }
//! ```
//!
//! ## Error Handling
//!
//! Core operations return [`error::LibraryError`]; configuration, catalog
//! loading and the binary use `anyhow::Result` with context messages.

pub mod algorithm;
pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod library;
pub mod playback;
pub mod playlist;
pub mod queue;
pub mod search;
pub mod sequence;
pub mod track;
pub mod vibe;
