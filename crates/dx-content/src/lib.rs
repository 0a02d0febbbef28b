//! Content records and index for DX documentation.
//!
//! This crate provides:
//! - [`DocRecord`]: a single localized documentation page record
//! - [`ContentIndex`]: the ordered, read-only collection of all records
//! - [`FrontMatter`] helpers: YAML parsing and the inheritance merge rule
//!
//! Records are supplied fully formed by the index populator at process
//! start (or build time) and live for the duration of the process. The
//! index only reads them; resolution layers on top produce owned copies.
//!
//! # Example
//!
//! ```
//! use dx_content::{ContentIndex, DocRecord};
//!
//! let index = ContentIndex::new(vec![
//!     DocRecord::new("button", "/en/docs/components/button/usage")
//!         .with_category("form")
//!         .with_scope("usage"),
//!     DocRecord::new("gradient", "/en/docs/styled-system/gradient"),
//! ]);
//!
//! assert_eq!(index.docs_by_type("components").len(), 1);
//! assert!(index.usage_companion("button").is_some());
//! ```

pub(crate) mod front_matter;
pub(crate) mod index;
pub(crate) mod record;

pub use front_matter::{FrontMatter, FrontMatterError, merge_front_matter, parse_front_matter};
pub use index::ContentIndex;
pub use record::{DocRecord, USAGE_SCOPE};
