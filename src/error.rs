//! Error types for keg operations
//!
//! Two families live here. [`KegError`] is returned by the I/O entry points
//! (reading, fetching, scanning). [`ValidationError`] is never returned as a
//! failure; [`crate::validation::validate_index`] collects them as findings.
//!
//! The third path, [`precondition_violation`], is neither: it aborts the
//! current operation when an unvalidated ID is coerced to an integer.

use std::path::PathBuf;

use thiserror::Error;

/// Recoverable failures of the index and node entry points.
#[derive(Debug, Error)]
pub enum KegError {
    /// An expected index or node document does not exist.
    #[error("not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The server answered outside the 200-299 range.
    #[error("failed to fetch: {status}")]
    FetchFailed { url: String, status: String },

    /// The connection broke while the body was being read.
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The response body passed the client's size cap.
    #[error("{url}: response exceeds maximum allowed size of {limit} bytes")]
    TooLarge { url: String, limit: u64 },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl KegError {
    /// Map an [`std::io::Error`] on `path`, promoting `NotFound` to its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            KegError::NotFound { path }
        } else {
            KegError::Io { path, source }
        }
    }
}

/// Structural findings reported by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Node identifier must be positive integer")]
    InvalidId { id: String },

    #[error("Node title is empty")]
    EmptyTitle,

    #[error("Title is too long: {0}")]
    TitleTooLong(usize),

    #[error("Node date last changed is not set (zero value)")]
    ChangedUnset,
}

/// Abort on a node ID that was never validated.
///
/// Callers of [`crate::models::Node::int_id`] are expected to have run
/// validation first, so reaching this is a programmer error rather than a
/// data error.
#[cold]
#[track_caller]
pub fn precondition_violation(id: &str, cause: std::num::ParseIntError) -> ! {
    panic!("precondition violated: node ID {id:?} is not an integer ({cause})")
}
