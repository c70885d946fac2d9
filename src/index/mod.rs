//! KEG index: the node metadata of a whole keg in one tab-delimited table
//!
//! An [`Index`] owns its nodes in a plain vector whose order is whatever
//! the caller last made it ([`Index::sort_by_id`], [`Index::sort_by_changes`]).
//! Lookup tables by ID, by title, and by include target are derived on
//! demand with the `map_*` functions; see [`maps`] for how they go stale.

pub mod io;
pub mod maps;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::models::Node;

pub use io::{fetch_index, fetch_index_with, index_url, read_index, scan_index, write_index};
pub use maps::{map_ids, map_includes, map_titles, IdMap, IncludeMap, TitleMap};

/// Nodes of a keg plus where they were loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Index {
    /// Index file, when read from disk.
    pub file: Option<PathBuf>,
    /// Index URL, when fetched.
    pub url: Option<String>,
    pub nodes: Vec<Node>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sort by ID compared as strings, so "10" sorts before "9".
    // Callers depend on this order for existing index files; do not make it numeric.
    pub fn sort_by_id(&mut self) {
        self.nodes.sort_by(|a, b| a.id.cmp(&b.id));
    }

    /// Sort most recently changed first.
    pub fn sort_by_changes(&mut self) {
        self.nodes.sort_by(|a, b| b.changed.cmp(&a.changed));
    }

    pub fn map_ids(&self) -> IdMap<'_> {
        map_ids(&self.nodes)
    }

    pub fn map_titles(&self) -> TitleMap<'_> {
        map_titles(&self.nodes)
    }

    pub fn map_includes(&self) -> IncludeMap<'_> {
        map_includes(&self.nodes)
    }

    /// The index file contents: one encoded line per node, each ending in a
    /// newline, in the current node order. Sort first for a canonical file.
    pub fn encode(&self) -> String {
        self.nodes.iter().map(|node| format!("{node}\n")).collect()
    }
}

/// Decode index text line by line. Never fails: every line becomes a node,
/// malformed or not.
pub fn parse_index(text: &str) -> Index {
    Index {
        nodes: text.lines().map(Node::decode).collect(),
        ..Index::default()
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
