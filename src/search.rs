//! One-shot keyword search over a snapshot of the catalog.
//!
//! A [`SearchList`] is a forward-only, append-only chain built fresh for
//! each query and dropped afterwards. It never aliases the catalog, so a
//! search cannot disturb the library or its cursor.

use crate::track::Track;

#[derive(Debug)]
struct SearchNode {
    track: Track,
    next: Option<usize>,
}

/// Singly linked snapshot of tracks.
#[derive(Debug, Default)]
pub struct SearchList {
    nodes: Vec<SearchNode>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl SearchList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1); the tail index is kept so appends never walk the chain.
    pub fn append(&mut self, track: Track) {
        let slot = self.nodes.len();
        self.nodes.push(SearchNode { track, next: None });

        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = &Track> + '_ {
        std::iter::successors(self.head.and_then(|h| self.nodes.get(h)), |node| {
            node.next.and_then(|n| self.nodes.get(n))
        })
        .map(|node| &node.track)
    }

    /// Tracks whose title, artist, genre or vibe contains `keyword`,
    /// ignoring case and surrounding whitespace, in snapshot order.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<Track> {
        let needle = keyword.trim().to_lowercase();

        self.iter()
            .filter(|track| matches_keyword(track, &needle))
            .cloned()
            .collect()
    }
}

impl<'a> FromIterator<&'a Track> for SearchList {
    fn from_iter<I: IntoIterator<Item = &'a Track>>(iter: I) -> Self {
        let mut list = Self::new();
        for track in iter {
            list.append(track.clone());
        }
        list
    }
}

/// `needle` must already be lower-cased.
fn matches_keyword(track: &Track, needle: &str) -> bool {
    [&track.title, &track.artist, &track.genre, &track.vibe]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
