pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fs;
pub mod index;
pub mod models;
pub mod net;
pub mod parser;
pub mod validation;

pub use error::{KegError, ValidationError};
pub use index::{fetch_index, parse_index, read_index, scan_index, Index};
pub use models::Node;
