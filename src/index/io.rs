//! Loading and storing whole indexes
//!
//! Sources are a keg directory's index file, a remote keg's index URL, or a
//! scan of the keg's node directories. All three decode with
//! [`super::parse_index`] or [`crate::fs::read_node`], so they accept
//! whatever the data holds and leave judging it to validation.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{parse_index, Index};
use crate::error::KegError;
use crate::fs::{locked_read, locked_write, node_dirs, read_node};
use crate::models::constants::INDEX_FILE_NAME;
use crate::net::{HttpClient, HttpGet};

/// Read `<kegpath>/kegdex` under a shared lock.
pub fn read_index(kegpath: &Path) -> Result<Index, KegError> {
    let file = kegpath.join(INDEX_FILE_NAME);
    let text = locked_read(&file)?;

    let mut index = parse_index(&text);
    debug!(path = %file.display(), nodes = index.len(), "read index");
    index.file = Some(file);
    Ok(index)
}

/// URL of the index file for a keg URL. A URL already naming the index
/// file is left alone.
pub fn index_url(kegurl: &str) -> String {
    let kegurl = kegurl.trim_end_matches('/');
    if kegurl.ends_with(INDEX_FILE_NAME) {
        return kegurl.to_string();
    }
    format!("{kegurl}/{INDEX_FILE_NAME}")
}

/// Fetch a remote index with a default client.
///
/// The default client sets no timeouts; use [`fetch_index_with`] and an
/// [`HttpClient::from_config`] client to get them.
pub fn fetch_index(kegurl: &str) -> Result<Index, KegError> {
    fetch_index_with(&HttpClient::new()?, kegurl)
}

/// Fetch a remote index through any [`HttpGet`].
///
/// A response outside 200-299 and a failed request are both errors. The
/// body is decoded as UTF-8, replacing invalid sequences.
pub fn fetch_index_with(client: &impl HttpGet, kegurl: &str) -> Result<Index, KegError> {
    let url = index_url(kegurl);
    let body = client.get(&url)?;

    let mut index = parse_index(&String::from_utf8_lossy(&body));
    debug!(url = %url, nodes = index.len(), "fetched index");
    index.url = Some(url);
    Ok(index)
}

/// Build an index from the node directories under `kegpath`, in numeric ID
/// order. A directory whose node document cannot be read is logged and
/// left out.
pub fn scan_index(kegpath: &Path) -> Result<Index, KegError> {
    let dirs = node_dirs(kegpath)?;

    let mut index = Index::new();
    for dir in &dirs.paths {
        match read_node(dir) {
            Ok(node) => index.add([node]),
            Err(e) => warn!(dir = %dir.display(), error = %e, "skipping node directory"),
        }
    }

    debug!(
        path = %kegpath.display(),
        dirs = dirs.paths.len(),
        nodes = index.len(),
        range = ?dirs.range,
        "scanned keg"
    );
    Ok(index)
}

/// Write `index` to `<kegpath>/kegdex` under an exclusive lock, in its
/// current node order. Returns the file written.
pub fn write_index(kegpath: &Path, index: &Index) -> Result<PathBuf, KegError> {
    let file = kegpath.join(INDEX_FILE_NAME);
    locked_write(&file, &index.encode())?;
    debug!(path = %file.display(), nodes = index.len(), "wrote index");
    Ok(file)
}
