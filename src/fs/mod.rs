//! Keg directory access: node directories, node documents and the index file

pub mod locking;
pub mod node_dirs;
pub mod node_file;

pub use locking::{locked_read, locked_write};
pub use node_dirs::{is_node_dir, node_dir_id, node_dirs, NodeDirs};
pub use node_file::{last_modified, read_node};
