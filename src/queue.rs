//! # Play-Next Queue Module
//!
//! Tracks the user explicitly asked to hear next. The player drains this
//! queue before falling back to vibe or sequential navigation.
//!
//! ## Semantics
//!
//! - Strict arrival order, duplicates allowed
//! - [`PlayQueue::remove_first_match`] drops exactly one entry
//! - [`PlayQueue::reorder`] replaces the contents wholesale, e.g. after a
//!   drag-and-drop in the queue view

use crate::track::{Track, TrackId};
use log::debug;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    items: VecDeque<Track>,
}

impl PlayQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, track: Track) {
        debug!("Queued `{}'", track.title);
        self.items.push_back(track);
    }

    /// Pop the oldest entry, `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<Track> {
        self.items.pop_front()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Track> {
        self.items.front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove the first entry equal to `track`; the rest keep their order.
    ///
    /// Returns whether anything was removed.
    pub fn remove_first_match(&mut self, track: &Track) -> bool {
        match self.items.iter().position(|queued| queued == track) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the whole queue with `order`.
    pub fn reorder(&mut self, order: Vec<Track>) {
        self.items = order.into();
    }

    /// Snapshot in play order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Track> {
        self.items.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Keep only entries `resolve` maps to a track, replacing each with the
    /// returned version.
    pub fn revalidate(&mut self, mut resolve: impl FnMut(TrackId) -> Option<Track>) {
        let before = self.items.len();
        self.items = self
            .items
            .drain(..)
            .filter_map(|track| resolve(track.id()))
            .collect();
        if self.items.len() != before {
            debug!("Dropped {} stale queue entries", before - self.items.len());
        }
    }
}
