pub mod common;
pub mod fetch;
pub mod includers;
pub mod index;
pub mod node;
pub mod scan;
pub mod validate;
