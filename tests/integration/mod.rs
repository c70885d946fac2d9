//! Integration tests for keg indexing
//!
//! These tests drive the public API against real keg directories in temp
//! dirs: scanning node documents, storing and re-reading index files, and
//! fetching indexes over a local HTTP socket.

pub mod fetch;
pub mod helpers;
pub mod keg_lifecycle;
pub mod node_documents;
