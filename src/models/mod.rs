pub mod constants;
pub mod node;

pub use node::{zero_time, Node};
