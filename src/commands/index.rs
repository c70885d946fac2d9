//! Index command - print a keg's index file

use anyhow::{Context, Result};
use std::path::Path;

use super::common::{render_index, SortOrder};
use crate::index::read_index;

pub fn execute(kegpath: &Path, sort: Option<SortOrder>, json: bool) -> Result<()> {
    let mut index = read_index(kegpath)
        .with_context(|| format!("Failed to read index of keg {}", kegpath.display()))?;
    if let Some(sort) = sort {
        sort.apply(&mut index);
    }
    print!("{}", render_index(&index, json)?);
    Ok(())
}
