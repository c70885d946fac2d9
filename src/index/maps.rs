//! On-demand lookup tables over a node slice
//!
//! Each function makes one pass over the nodes and returns a fresh map that
//! borrows from them. Nothing is cached and nothing is kept in sync: a map
//! describes the nodes as they were when it was built, and after changing
//! the nodes the caller builds it again. The borrow makes the compiler hold
//! callers to that.
//!
//! None of the maps validate anything. When two nodes share a key the later
//! one in slice order wins.

use std::collections::HashMap;

use crate::models::Node;

/// ID -> node.
pub type IdMap<'a> = HashMap<&'a str, &'a Node>;

/// Title -> node.
pub type TitleMap<'a> = HashMap<&'a str, &'a Node>;

/// Included ID -> (including node ID -> including node).
pub type IncludeMap<'a> = HashMap<&'a str, HashMap<&'a str, &'a Node>>;

pub fn map_ids(nodes: &[Node]) -> IdMap<'_> {
    nodes.iter().map(|node| (node.id.as_str(), node)).collect()
}

pub fn map_titles(nodes: &[Node]) -> TitleMap<'_> {
    nodes.iter().map(|node| (node.title.as_str(), node)).collect()
}

/// Reverse include edges, for finding every node that depends on a node.
///
/// Every node's own ID is a key, with an empty map if nothing includes it,
/// so a present key means "this node exists" and a lookup for a known node
/// never needs a fallback. Targets that name no node in the slice get keys
/// too.
pub fn map_includes(nodes: &[Node]) -> IncludeMap<'_> {
    let mut includes: IncludeMap<'_> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        includes.entry(node.id.as_str()).or_default();
        for target in node.include_ids() {
            includes
                .entry(target.as_str())
                .or_default()
                .insert(node.id.as_str(), node);
        }
    }

    includes
}
