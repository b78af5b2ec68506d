//! # Sequential Track Store
//!
//! [`TrackList`] is the ordered, doubly traversable container behind the
//! library catalog, playlists and the player's "now playing" list.
//!
//! ## Layout
//!
//! Nodes live in an arena (`Vec<Option<Node>>`) and refer to each other by
//! slot index. Freed slots are recycled, so relinking after a removal is O(1)
//! once the node is located and no node ever borrows another.
//!
//! ## Cursor
//!
//! The list carries an optional cursor ("current") used for playback.
//! [`TrackList::advance`] and [`TrackList::retreat`] wrap around the ends,
//! so auto-advance never has to handle end-of-list itself. The ends are
//! *not* physically linked; the wrap happens in the traversal.

use crate::error::{LibraryError, Result};
use crate::track::Track;
use log::trace;

#[derive(Debug, Clone)]
struct Node {
    track: Track,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered track container with a movable playback cursor.
#[derive(Debug, Clone, Default)]
pub struct TrackList {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    current: Option<usize>,
    len: usize,
}

impl TrackList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, slot: usize) -> Option<&Node> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Add a track at the end. O(1).
    pub fn append(&mut self, track: Track) {
        let slot = self.alloc(Node {
            track,
            prev: self.tail,
            next: None,
        });

        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    /// Add a track at the front. O(1).
    pub fn prepend(&mut self, track: Track) {
        let slot = self.alloc(Node {
            track,
            prev: None,
            next: self.head,
        });

        match self.head.and_then(|head| self.node_mut(head)) {
            Some(head) => head.prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Append and move the cursor onto the new last element.
    pub fn append_selected(&mut self, track: Track) -> Option<&Track> {
        self.append(track);
        self.current = self.tail;
        self.current_track()
    }

    /// Slot of the element at `index`, walking from whichever end is closer.
    fn slot_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut slot = self.head;
            for _ in 0..index {
                slot = slot.and_then(|s| self.node(s)).and_then(|n| n.next);
            }
            slot
        } else {
            let mut slot = self.tail;
            for _ in 0..(self.len - 1 - index) {
                slot = slot.and_then(|s| self.node(s)).and_then(|n| n.prev);
            }
            slot
        }
    }

    fn slot_where(&self, mut pred: impl FnMut(&Track) -> bool) -> Option<usize> {
        let mut slot = self.head;
        while let Some(s) = slot {
            let node = self.node(s)?;
            if pred(&node.track) {
                return Some(s);
            }
            slot = node.next;
        }
        None
    }

    /// Detach a node, relink its neighbours and relocate the cursor.
    fn unlink(&mut self, slot: usize) -> Option<Track> {
        let node = self.slots.get_mut(slot)?.take()?;

        match node.prev.and_then(|p| self.node_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.node_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        if self.current == Some(slot) {
            self.current = node.next.or(node.prev);
        }

        self.free.push(slot);
        self.len -= 1;
        if self.len == 0 {
            self.clear();
        }

        Some(node.track)
    }

    /// Remove the element at `index`.
    ///
    /// # Errors
    ///
    /// [`LibraryError::IndexOutOfRange`] when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Track> {
        let out_of_range = LibraryError::IndexOutOfRange {
            index,
            len: self.len,
        };
        let slot = self.slot_at(index).ok_or_else(|| out_of_range.clone())?;
        self.unlink(slot).ok_or(out_of_range)
    }

    /// Remove the first element with the same identity as `track`.
    pub fn remove_by_match(&mut self, track: &Track) -> Option<Track> {
        let slot = self.slot_where(|t| t == track)?;
        self.unlink(slot)
    }

    /// Drop every element and the cursor.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.current = None;
        self.len = 0;
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.slot_at(index)
            .and_then(|s| self.node(s))
            .map(|n| &n.track)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Track> {
        self.head.and_then(|s| self.node(s)).map(|n| &n.track)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Track> {
        self.tail.and_then(|s| self.node(s)).map(|n| &n.track)
    }

    #[must_use]
    pub fn position(&self, pred: impl FnMut(&Track) -> bool) -> Option<usize> {
        self.iter().position(pred)
    }

    #[must_use]
    pub fn find(&self, mut pred: impl FnMut(&Track) -> bool) -> Option<&Track> {
        self.iter().find(|t| pred(t))
    }

    pub fn find_mut(&mut self, pred: impl FnMut(&Track) -> bool) -> Option<&mut Track> {
        let slot = self.slot_where(pred)?;
        self.node_mut(slot).map(|n| &mut n.track)
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            slot: self.head,
        }
    }

    /// Ordered copy of the contents.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Track> {
        self.iter().cloned().collect()
    }

    #[must_use]
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|s| self.node(s)).map(|n| &n.track)
    }

    /// Put the cursor on the first element and return it.
    pub fn select_first(&mut self) -> Option<&Track> {
        self.current = self.head;
        self.current_track()
    }

    /// Step forward, wrapping from the last element to the first.
    ///
    /// Returns `None` only when no cursor is set.
    pub fn advance(&mut self) -> Option<&Track> {
        let slot = self.current?;
        let next = self.node(slot)?.next;
        self.current = next.or(self.head);
        trace!("Cursor advanced to slot {:?}", self.current);
        self.current_track()
    }

    /// Step backward, wrapping from the first element to the last.
    pub fn retreat(&mut self) -> Option<&Track> {
        let slot = self.current?;
        let prev = self.node(slot)?.prev;
        self.current = prev.or(self.tail);
        trace!("Cursor retreated to slot {:?}", self.current);
        self.current_track()
    }

    /// Move the cursor to the first element with the same title and artist.
    ///
    /// Identity is ignored, so a track taken from an older snapshot still
    /// finds its counterpart. Leaves the cursor alone when nothing matches.
    pub fn jump_to(&mut self, track: &Track) -> Option<&Track> {
        let slot = self.slot_where(|t| t.title == track.title && t.artist == track.artist)?;
        self.current = Some(slot);
        self.current_track()
    }
}

impl FromIterator<Track> for TrackList {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Track> for TrackList {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        for track in iter {
            self.append(track);
        }
    }
}

/// Front-to-back iterator over a [`TrackList`].
pub struct Iter<'a> {
    list: &'a TrackList,
    slot: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.slot?)?;
        self.slot = node.next;
        Some(&node.track)
    }
}

impl<'a> IntoIterator for &'a TrackList {
    type Item = &'a Track;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
