pub mod generator;

pub use generator::{generate_completions, write_completions, Shell};
