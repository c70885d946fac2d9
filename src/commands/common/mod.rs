//! Output helpers shared across command implementations.

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::index::Index;

/// Node order for printed indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// By ID as text
    Id,
    /// Most recently changed first
    Changes,
}

impl SortOrder {
    pub fn apply(self, index: &mut Index) {
        match self {
            SortOrder::Id => index.sort_by_id(),
            SortOrder::Changes => index.sort_by_changes(),
        }
    }
}

/// Index as printed: the index file format, or a JSON array of nodes.
pub fn render_index(index: &Index, json: bool) -> Result<String> {
    if !json {
        return Ok(index.encode());
    }
    let mut out =
        serde_json::to_string_pretty(&index.nodes).context("Failed to serialize index")?;
    out.push('\n');
    Ok(out)
}
