//! Node command - show the index line one node directory would produce

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::fs::{is_node_dir, read_node};
use crate::validation::validate_node;

pub fn execute(dir: &Path) -> Result<()> {
    let node =
        read_node(dir).with_context(|| format!("Failed to read node in {}", dir.display()))?;
    println!("{node}");

    if !is_node_dir(dir) {
        eprintln!(
            "{} {} is not named by a node ID",
            "!".yellow().bold(),
            dir.display()
        );
    }
    for error in validate_node(&node) {
        eprintln!("{} {error}", "✗".red().bold());
    }
    Ok(())
}
