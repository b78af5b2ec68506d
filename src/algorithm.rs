//! Vibe scoring for mood-aware navigation.
//!
//! Maps a track's vibe-tag to a `(mood, energy)` pair. The vibe graph only
//! sees the [`VibeScorer`] trait, so a different table or an independent
//! energy metric can be swapped in without touching the linking logic.

use crate::track::Track;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `(mood, energy)` pair. Ordering is lexicographic, mood first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VibeScore {
    pub mood: i32,
    pub energy: i32,
}

impl VibeScore {
    #[must_use]
    pub const fn new(mood: i32, energy: i32) -> Self {
        Self { mood, energy }
    }
}

impl From<(i32, i32)> for VibeScore {
    fn from((mood, energy): (i32, i32)) -> Self {
        Self::new(mood, energy)
    }
}

/// Pure, total scoring function over tracks.
pub trait VibeScorer: std::fmt::Debug {
    /// Score a track. Must never fail; unknown vibes score `(0, 0)`.
    fn score(&self, track: &Track) -> VibeScore;
}

lazy_static::lazy_static! {
    /// Built-in vibe-tag table. Keys are lower-case.
    static ref DEFAULT_VIBE_SCORES: HashMap<&'static str, VibeScore> = HashMap::from([
        ("happy", VibeScore::new(3, 3)),
        ("chill", VibeScore::new(2, 1)),
        ("sad", VibeScore::new(1, 1)),
    ]);
}

/// Score a vibe-tag against the built-in table, ignoring case.
#[must_use]
pub fn score_vibe(vibe: &str) -> VibeScore {
    DEFAULT_VIBE_SCORES
        .get(vibe.to_lowercase().as_str())
        .copied()
        .unwrap_or_default()
}

/// Scorer backed by the built-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVibeScorer;

impl VibeScorer for DefaultVibeScorer {
    fn score(&self, track: &Track) -> VibeScore {
        score_vibe(&track.vibe)
    }
}

/// Scorer backed by a user-supplied table, e.g. from the config file.
#[derive(Debug, Clone, Default)]
pub struct TableVibeScorer {
    table: HashMap<String, VibeScore>,
}

impl TableVibeScorer {
    /// Keys are lower-cased so lookups stay case-insensitive.
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<VibeScore>,
    {
        Self {
            table: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl VibeScorer for TableVibeScorer {
    fn score(&self, track: &Track) -> VibeScore {
        self.table
            .get(&track.vibe.to_lowercase())
            .copied()
            .unwrap_or_default()
    }
}
