//! Scan command - rebuild an index from a keg's node directories

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::common::render_index;
use crate::index::{scan_index, write_index, Index};

/// Scan `kegpath` and either print the index or, with `write`, store it as
/// the keg's index file.
pub fn execute(kegpath: &Path, write: bool) -> Result<()> {
    let index = build(kegpath)?;

    if !write {
        print!("{}", render_index(&index, false)?);
        return Ok(());
    }

    let file = write_index(kegpath, &index)
        .with_context(|| format!("Failed to write index of keg {}", kegpath.display()))?;
    eprintln!(
        "{} Wrote {} nodes to {}",
        "✓".green().bold(),
        index.len(),
        file.display()
    );
    Ok(())
}

/// Scanned index in the order index files are kept: newest change first.
pub fn build(kegpath: &Path) -> Result<Index> {
    let mut index = scan_index(kegpath)
        .with_context(|| format!("Failed to scan keg {}", kegpath.display()))?;
    index.sort_by_changes();
    Ok(index)
}
