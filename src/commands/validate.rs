//! Validate command - report every problem in a keg's index

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::error::ValidationError;
use crate::index::{read_index, Index};
use crate::models::Node;
use crate::validation::validate_node;

/// Findings for one node, in index order. Nodes without findings are left
/// out.
pub fn findings(index: &Index) -> Vec<(&Node, Vec<ValidationError>)> {
    index
        .nodes
        .iter()
        .map(|node| (node, validate_node(node)))
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}

pub fn execute(kegpath: &Path) -> Result<()> {
    let index = read_index(kegpath)
        .with_context(|| format!("Failed to read index of keg {}", kegpath.display()))?;
    let findings = findings(&index);

    if findings.is_empty() {
        println!("{} {} nodes, no problems", "✓".green().bold(), index.len());
        return Ok(());
    }

    let mut total = 0;
    for (node, errors) in &findings {
        let label = if node.id.is_empty() { "<no id>" } else { node.id.as_str() };
        println!("{} {}", label.bold(), node.title.dimmed());
        for error in errors {
            println!("  {} {error}", "✗".red().bold());
            total += 1;
        }
    }

    bail!(
        "{total} {} in {} of {} nodes",
        plural(total, "problem", "problems"),
        findings.len(),
        index.len()
    )
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
