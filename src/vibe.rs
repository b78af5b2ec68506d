//! # Vibe Graph
//!
//! A secondary index over the catalog that answers "what should play next
//! if I want the same mood?" without looking at catalog order.
//!
//! ## Structure
//!
//! - One node per distinct normalized identity (lower-cased title + artist)
//! - Nodes are grouped into buckets by their *literal* vibe-tag
//! - Inside a bucket nodes are stable-sorted by [`VibeScore`] ascending and
//!   chained with `mood_up` / `mood_down` links
//! - `energy_up` / `energy_down` currently mirror the mood links
//!
//! Links are slot indices into the node arena, never references.
//!
//! ## Lifecycle
//!
//! The graph is rebuilt from scratch whenever the catalog changes, so it can
//! never point at a deleted or outdated track. [`VibeGraph::register`] adds
//! an unlinked node for callers that defer the rebuild.

use crate::algorithm::{DefaultVibeScorer, VibeScore, VibeScorer};
use crate::track::{NormalizedKey, Track};
use log::debug;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone)]
struct VibeNode {
    track: Track,
    score: VibeScore,
    mood_up: Option<usize>,
    mood_down: Option<usize>,
    energy_up: Option<usize>,
    energy_down: Option<usize>,
}

impl VibeNode {
    fn new(track: Track, score: VibeScore) -> Self {
        Self {
            track,
            score,
            mood_up: None,
            mood_down: None,
            energy_up: None,
            energy_down: None,
        }
    }
}

/// Resolved neighbours of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VibeLinks<'a> {
    pub mood_up: Option<&'a Track>,
    pub mood_down: Option<&'a Track>,
    pub energy_up: Option<&'a Track>,
    pub energy_down: Option<&'a Track>,
}

#[derive(Debug)]
pub struct VibeGraph {
    scorer: Box<dyn VibeScorer>,
    nodes: Vec<VibeNode>,
    index: HashMap<NormalizedKey, usize>,
    buckets: BTreeMap<String, Vec<usize>>,
}

impl Default for VibeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl VibeGraph {
    /// Empty graph using the built-in score table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_scorer(Box::new(DefaultVibeScorer))
    }

    #[must_use]
    pub fn with_scorer(scorer: Box<dyn VibeScorer>) -> Self {
        Self {
            scorer,
            nodes: Vec::new(),
            index: HashMap::new(),
            buckets: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.buckets.clear();
    }

    /// Add an unlinked node for `track` unless its normalized identity is
    /// already present. Returns whether a node was created.
    ///
    /// The node joins its bucket on the next [`VibeGraph::rebuild`].
    pub fn register(&mut self, track: &Track) -> bool {
        self.insert_node(track).is_some()
    }

    fn insert_node(&mut self, track: &Track) -> Option<usize> {
        let key = track.normalized_key();
        if self.index.contains_key(&key) {
            debug!(
                "Vibe graph already has `{}' by `{}'; ignoring duplicate",
                track.title, track.artist
            );
            return None;
        }

        let slot = self.nodes.len();
        let score = self.scorer.score(track);
        self.nodes.push(VibeNode::new(track.clone(), score));
        self.index.insert(key, slot);
        Some(slot)
    }

    /// Throw away all nodes and links and rebuild them from `tracks`.
    pub fn rebuild<'a>(&mut self, tracks: impl IntoIterator<Item = &'a Track>) {
        self.clear();

        for track in tracks {
            if let Some(slot) = self.insert_node(track) {
                self.buckets.entry(track.vibe.clone()).or_default().push(slot);
            }
        }

        let Self { nodes, buckets, .. } = &mut *self;
        for members in buckets.values_mut() {
            members.sort_by_key(|&slot| nodes[slot].score);

            for pair in members.windows(2) {
                if let &[lower, upper] = pair {
                    nodes[lower].mood_up = Some(upper);
                    nodes[upper].mood_down = Some(lower);
                }
            }
        }

        // Single-axis scheme: energy follows mood.
        for node in nodes.iter_mut() {
            node.energy_up = node.mood_up;
            node.energy_down = node.mood_down;
        }

        debug!(
            "Rebuilt vibe graph: {} nodes in {} buckets",
            self.nodes.len(),
            self.buckets.len()
        );
    }

    fn slot_of(&self, track: &Track) -> Option<usize> {
        self.index.get(&track.normalized_key()).copied()
    }

    fn track_at(&self, slot: Option<usize>) -> Option<&Track> {
        slot.and_then(|s| self.nodes.get(s)).map(|n| &n.track)
    }

    fn first_linked(&self, candidates: [Option<usize>; 4]) -> Option<&Track> {
        candidates
            .into_iter()
            .flatten()
            .next()
            .and_then(|slot| self.nodes.get(slot))
            .map(|n| &n.track)
    }

    /// Next track with a related mood.
    ///
    /// Tries `mood_up`, `energy_up`, `mood_down`, `energy_down` in that
    /// order. `None` when the track is unknown or alone in its bucket.
    #[must_use]
    pub fn next_by_vibe(&self, track: &Track) -> Option<&Track> {
        let node = self.nodes.get(self.slot_of(track)?)?;
        self.first_linked([node.mood_up, node.energy_up, node.mood_down, node.energy_down])
    }

    /// Mirror of [`VibeGraph::next_by_vibe`]: down links first.
    #[must_use]
    pub fn prev_by_vibe(&self, track: &Track) -> Option<&Track> {
        let node = self.nodes.get(self.slot_of(track)?)?;
        self.first_linked([node.mood_down, node.energy_down, node.mood_up, node.energy_up])
    }

    #[must_use]
    pub fn links(&self, track: &Track) -> Option<VibeLinks<'_>> {
        let node = self.nodes.get(self.slot_of(track)?)?;
        Some(VibeLinks {
            mood_up: self.track_at(node.mood_up),
            mood_down: self.track_at(node.mood_down),
            energy_up: self.track_at(node.energy_up),
            energy_down: self.track_at(node.energy_down),
        })
    }

    #[must_use]
    pub fn score_of(&self, track: &Track) -> Option<VibeScore> {
        self.slot_of(track)
            .and_then(|s| self.nodes.get(s))
            .map(|n| n.score)
    }

    /// Look a track up by title and artist, ignoring case.
    #[must_use]
    pub fn find(&self, title: &str, artist: &str) -> Option<&Track> {
        let slot = self.index.get(&NormalizedKey::new(title, artist)).copied();
        self.track_at(slot)
    }

    /// Members of the bucket for `vibe` (exact tag) in link order.
    #[must_use]
    pub fn tracks_with_vibe(&self, vibe: &str) -> Vec<&Track> {
        self.buckets
            .get(vibe)
            .map(|members| {
                members
                    .iter()
                    .filter_map(|&slot| self.nodes.get(slot))
                    .map(|n| &n.track)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Bucket tags with their sizes, sorted by tag.
    #[must_use]
    pub fn vibes(&self) -> Vec<(&str, usize)> {
        self.buckets
            .iter()
            .map(|(vibe, members)| (vibe.as_str(), members.len()))
            .collect()
    }
}
