//! Playback history.
//!
//! A plain LIFO stack: the most recently played track is on top.

use crate::track::{Track, TrackId};

#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<Track>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, track: Track) {
        self.stack.push(track);
    }

    /// Remove and return the most recent entry, `None` when empty.
    pub fn pop(&mut self) -> Option<Track> {
        self.stack.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Track> {
        self.stack.last()
    }

    /// Most-recent-first copy; the stack itself is left as it was.
    #[must_use]
    pub fn peek_all(&self) -> Vec<Track> {
        self.stack.iter().rev().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Keep only entries `resolve` maps to a track, replacing each with the
    /// returned version. Order is preserved.
    pub fn revalidate(&mut self, mut resolve: impl FnMut(TrackId) -> Option<Track>) {
        self.stack = self
            .stack
            .drain(..)
            .filter_map(|track| resolve(track.id()))
            .collect();
    }
}
