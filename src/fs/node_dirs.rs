//! Node directory discovery
//!
//! Every node of a keg lives in a child directory of the keg named by its
//! integer ID. Anything else in the keg directory is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::KegError;

/// Node directories found under a keg.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeDirs {
    /// Absolute paths, ordered by numeric ID.
    pub paths: Vec<PathBuf>,
    /// Lowest and highest ID found, or `None` for a keg without nodes.
    pub range: Option<(u64, u64)>,
}

/// The node ID a directory name stands for, if it is a non-negative
/// base-10 integer.
pub fn node_dir_id(name: &str) -> Option<u64> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// True when the last component of `path` names a node.
pub fn is_node_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(node_dir_id)
        .is_some()
}

/// List the node directories directly under `kegpath`.
pub fn node_dirs(kegpath: &Path) -> Result<NodeDirs, KegError> {
    let kegpath = fs::canonicalize(kegpath).map_err(|e| KegError::from_io(kegpath, e))?;
    let entries = fs::read_dir(&kegpath).map_err(|e| KegError::from_io(&kegpath, e))?;

    let mut found: Vec<(u64, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| KegError::from_io(&kegpath, e))?;
        let Some(id) = entry.file_name().to_str().and_then(node_dir_id) else {
            continue;
        };
        // follows symlinks, so a linked node directory counts
        if entry.path().is_dir() {
            found.push((id, entry.path()));
        }
    }
    found.sort();

    let range = match (found.first(), found.last()) {
        (Some((low, _)), Some((high, _))) => Some((*low, *high)),
        _ => None,
    };

    Ok(NodeDirs {
        paths: found.into_iter().map(|(_, path)| path).collect(),
        range,
    })
}
