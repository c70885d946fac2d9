/// Name of the index file stored at the root of a keg directory and
/// served at the root of a keg URL.
pub const INDEX_FILE_NAME: &str = "kegdex";

/// Name of the document inside each node directory.
pub const NODE_FILE_NAME: &str = "README.md";

/// Layout of the `Changed` field in an index line (always UTC).
pub const ISO_TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%SZ";

/// ID of a node that has not been assigned one yet.
pub const UNDEFINED_ID: &str = "-1";

/// Maximum number of code points in a node title.
pub const MAX_TITLE_RUNES: usize = 70;

/// Field delimiter within an index line.
pub const FIELD_SEP: char = '\t';

/// Delimiter between include IDs in the fourth field.
pub const INCLUDE_SEP: &str = ",";
