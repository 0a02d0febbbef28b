//! Front-matter mapping and inheritance merge.
//!
//! Front matter is an open string-keyed map of arbitrary metadata values
//! (title, description, component props tables, ...). The content schema is
//! owned by the authors; this module treats values as opaque JSON.
//!
//! # Inheritance
//!
//! Component sub-pages (props, theming) inherit shared metadata from the
//! component's `usage` page via [`merge_front_matter`]. The merge always
//! produces a fresh map: the index is shared across concurrent page
//! resolutions and must never observe a partially merged record.

use std::collections::HashMap;

/// Front-matter metadata map for a document record.
pub type FrontMatter = HashMap<String, serde_json::Value>;

/// Error type for front-matter operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Parse front matter from YAML content.
///
/// Empty or whitespace-only content yields an empty map.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or not a mapping.
pub fn parse_front_matter(content: &str) -> Result<FrontMatter, FrontMatterError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(FrontMatter::new());
    }

    serde_yaml::from_str(trimmed).map_err(|e| FrontMatterError::Parse(format!("Invalid YAML: {e}")))
}

/// Merge a record's own front matter with its usage companion's.
///
/// Returns the union of both maps. On key conflict the record's `own`
/// value wins. Neither input is mutated.
#[must_use]
pub fn merge_front_matter(own: &FrontMatter, companion: &FrontMatter) -> FrontMatter {
    let mut merged = companion.clone();
    for (key, value) in own {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
