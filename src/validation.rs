//! Structural validation of nodes and indexes.
//!
//! Validation never mutates and never stops early. Every finding is
//! returned so the caller can decide what to repair; decoding and parsing
//! stay total because this is the only place data gets judged.

use crate::error::ValidationError;
use crate::index::Index;
use crate::models::constants::MAX_TITLE_RUNES;
use crate::models::{zero_time, Node};

/// Checks that an ID is a non-negative base-10 integer.
///
/// # Arguments
///
/// * `id` - The ID string to check
///
/// # Returns
///
/// * `Ok(())` if the ID is valid
/// * `Err(ValidationError::InvalidId)` otherwise
///
/// # Examples
///
/// ```
/// use keg::validation::assert_id;
///
/// assert!(assert_id("0").is_ok());
/// assert!(assert_id("42").is_ok());
/// assert!(assert_id("-1").is_err());
/// assert!(assert_id("twenty").is_err());
/// ```
pub fn assert_id(id: &str) -> Result<(), ValidationError> {
    match id.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(()),
        _ => Err(ValidationError::InvalidId { id: id.to_string() }),
    }
}

/// Returns one error for every failed check on a node, in this order:
///
/// - title is empty
/// - title is longer than 70 code points
/// - ID is not a non-negative integer
/// - each include that is not a non-negative integer
/// - `changed` is the zero timestamp
pub fn validate_node(node: &Node) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if node.title.is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }

    let title_len = node.title.chars().count();
    if title_len > MAX_TITLE_RUNES {
        errors.push(ValidationError::TitleTooLong(title_len));
    }

    if let Err(e) = assert_id(&node.id) {
        errors.push(e);
    }

    for include in node.include_ids() {
        if let Err(e) = assert_id(include) {
            errors.push(e);
        }
    }

    if node.changed == zero_time() {
        errors.push(ValidationError::ChangedUnset);
    }

    errors
}

/// Validates every node of an index in order. Returns an empty vector when
/// nothing is wrong.
pub fn validate_index(index: &Index) -> Vec<ValidationError> {
    index.nodes.iter().flat_map(validate_node).collect()
}
