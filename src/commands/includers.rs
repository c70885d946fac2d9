//! Includers command - list the nodes that include a given node

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::index::{read_index, Index};
use crate::models::Node;
use crate::validation::assert_id;

/// Nodes whose include list names `id`, ordered by ID. `None` when `id` is
/// neither a node of the index nor included by one.
pub fn includers<'a>(index: &'a Index, id: &str) -> Option<Vec<&'a Node>> {
    let includes = index.map_includes();
    let mut nodes: Vec<&Node> = includes.get(id)?.values().copied().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));
    Some(nodes)
}

pub fn execute(kegpath: &Path, id: &str) -> Result<()> {
    assert_id(id).with_context(|| format!("Invalid node ID: {id}"))?;
    let index = read_index(kegpath)
        .with_context(|| format!("Failed to read index of keg {}", kegpath.display()))?;

    let Some(nodes) = includers(&index, id) else {
        bail!("Node {id} is not in the index of {}", kegpath.display());
    };
    if nodes.is_empty() {
        println!("{} nothing includes node {id}", "─".dimmed());
        return Ok(());
    }
    for node in nodes {
        println!("{}\t{}", node.id.cyan(), node.title);
    }
    Ok(())
}
