//! Reading one node from its directory

use chrono::{DateTime, SubsecRound, Utc};
use std::fs;
use std::path::Path;

use crate::error::KegError;
use crate::models::constants::NODE_FILE_NAME;
use crate::models::Node;
use crate::parser::{parse_include_ids, parse_title};

/// Modification time of `path`, to the second.
pub fn last_modified(path: &Path) -> Result<DateTime<Utc>, KegError> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| KegError::from_io(path, e))?;
    Ok(DateTime::<Utc>::from(modified).trunc_subsecs(0))
}

/// Build a node from `<dir>/README.md`.
///
/// The ID is the directory name as is; nothing here checks that it is an
/// integer. A document without a valid title line gives an empty title and
/// one without include blocks gives no include field. Invalid UTF-8 in the
/// document is replaced with U+FFFD.
pub fn read_node(dir: &Path) -> Result<Node, KegError> {
    let file = dir.join(NODE_FILE_NAME);
    let bytes = fs::read(&file).map_err(|e| KegError::from_io(&file, e))?;
    let text = String::from_utf8_lossy(&bytes);

    let id = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let includes = parse_include_ids(&text);

    Ok(Node {
        id,
        title: parse_title(&text).unwrap_or_default(),
        changed: last_modified(&file)?,
        includes: (!includes.is_empty()).then_some(includes),
    })
}
