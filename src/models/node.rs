//! A single KEG node and its one-line index codec
//!
//! Index line format (one per node, tab-delimited):
//!
//! ```text
//! <id>\t<changed>\t<title>\t<comma-separated-include-ids>
//! ```
//!
//! Decoding is total. Whatever the line holds ends up in the node verbatim,
//! and [`crate::validation`] is the only place that judges it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::constants::{FIELD_SEP, INCLUDE_SEP, ISO_TIME_LAYOUT, UNDEFINED_ID};
use crate::error::precondition_violation;

/// The zero timestamp, `0001-01-01 00:00:00Z`, meaning "never set".
pub fn zero_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// A node as listed in a knowledge exchange graph index.
///
/// `id` is kept as a string because that is how it is used almost
/// everywhere, but it must always hold a non-negative integer. Zero is a
/// valid ID (the "zero node" used for links to content that does not exist
/// yet).
///
/// `includes` distinguishes "no include field" (`None`) from "an empty
/// include field" (`Some(vec![])`); the two encode differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub title: String,
    pub changed: DateTime<Utc>,
    pub includes: Option<Vec<String>>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            changed: zero_time(),
            includes: None,
        }
    }
}

impl Node {
    /// Create a fresh node: unassigned ID, `changed` set to now, no includes.
    pub fn new() -> Self {
        Self {
            id: UNDEFINED_ID.to_string(),
            changed: Utc::now(),
            includes: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Decode one index line.
    ///
    /// The line is trimmed and split on single tabs. At most four fields are
    /// used, in the order ID, changed, title, includes; anything after the
    /// fourth is dropped. A short line leaves the remaining fields at their
    /// defaults. A timestamp that does not match the layout decodes to
    /// [`zero_time`].
    pub fn decode(line: &str) -> Self {
        let mut node = Self::default();
        let mut fields = line.trim().split(FIELD_SEP).take(4);

        if let Some(id) = fields.next() {
            node.id = id.to_string();
        }
        if let Some(changed) = fields.next() {
            node.changed = parse_changed(changed);
        }
        if let Some(title) = fields.next() {
            node.title = title.to_string();
        }
        if let Some(includes) = fields.next() {
            node.includes = Some(includes.split(INCLUDE_SEP).map(String::from).collect());
        }

        node
    }

    /// Encode as one index line, without the trailing newline.
    pub fn encode(&self) -> String {
        let mut line = format!(
            "{}{FIELD_SEP}{}{FIELD_SEP}{}",
            self.id,
            self.changed.format(ISO_TIME_LAYOUT),
            self.title
        );
        if let Some(includes) = &self.includes {
            line.push(FIELD_SEP);
            line.push_str(&includes.join(INCLUDE_SEP));
        }
        line
    }

    /// The ID as an integer.
    ///
    /// # Panics
    ///
    /// Panics if the ID is not an integer. Run validation before calling
    /// this on data from outside; use [`Node::try_int_id`] otherwise.
    #[track_caller]
    pub fn int_id(&self) -> i64 {
        match self.try_int_id() {
            Ok(id) => id,
            Err(e) => precondition_violation(&self.id, e),
        }
    }

    /// The ID as an integer, or the parse error.
    pub fn try_int_id(&self) -> Result<i64, ParseIntError> {
        self.id.parse()
    }

    /// Include IDs, empty when the field is absent.
    pub fn include_ids(&self) -> &[String] {
        self.includes.as_deref().unwrap_or_default()
    }
}

fn parse_changed(field: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(field, ISO_TIME_LAYOUT)
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| zero_time())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Node {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s))
    }
}
