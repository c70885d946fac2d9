//! Field extraction from KEGML node documents

pub mod kegml;
pub mod packrat;

pub use kegml::{parse_include_ids, parse_title};
