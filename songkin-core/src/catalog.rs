//! Immutable song catalog snapshot
//!
//! The catalog is constructed once by the loader and shared read-only
//! for the rest of the process lifetime. Insertion order is preserved
//! and is load-bearing: it decides which entry counts as "the first
//! match" during resolution and the order of returned recommendations.

use std::collections::HashSet;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Track title; non-empty, not guaranteed unique within the catalog
    pub title: String,
    /// Track artist; may be empty
    pub artist: String,
    /// Offline cluster assignment; songs without one are unmatchable
    pub cluster: Option<i64>,
}

/// Ordered, immutable collection of songs with precomputed cluster labels
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
    distinct_titles: Vec<String>,
}

impl Catalog {
    /// Build a catalog from songs in their persisted order
    ///
    /// Distinct titles are computed here once, in first-occurrence
    /// order, using exact (case-sensitive) string identity.
    pub fn new(songs: Vec<Song>) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(songs.len());
        let mut distinct_titles = Vec::new();
        for song in &songs {
            if seen.insert(song.title.as_str()) {
                distinct_titles.push(song.title.clone());
            }
        }

        Self {
            songs,
            distinct_titles,
        }
    }

    /// Full song sequence in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Distinct titles in first-occurrence order, for selection UIs
    pub fn distinct_titles(&self) -> &[String] {
        &self.distinct_titles
    }

    /// Number of songs in the catalog
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// True when the catalog holds no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of distinct cluster labels present
    pub fn cluster_count(&self) -> usize {
        self.songs
            .iter()
            .filter_map(|song| song.cluster)
            .collect::<HashSet<_>>()
            .len()
    }
}
