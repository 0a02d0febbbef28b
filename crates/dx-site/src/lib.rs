//! Localized document resolution and tab derivation for DX documentation.
//!
//! This crate provides:
//! - [`DocResolver`]: maps a request path and locale pair to the
//!   best-matching [`DocRecord`](dx_content::DocRecord), with default-locale
//!   fallback and usage front-matter inheritance
//! - [`DocTab`] derivation: which usage/props/theming views exist for a
//!   component path and which one is current
//! - [`routes`]: build-target enumeration for static site generation
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use dx_content::{ContentIndex, DocRecord};
//! use dx_site::DocResolver;
//!
//! let index = Arc::new(ContentIndex::new(vec![
//!     DocRecord::new("button", "/en/docs/components/button/usage")
//!         .with_category("form")
//!         .with_scope("usage"),
//!     DocRecord::new("button", "/en/docs/components/button/props")
//!         .with_category("form")
//!         .with_scope("props"),
//! ]));
//! let resolver = DocResolver::new(index);
//!
//! // A bare component path resolves to the usage sub-page
//! let doc = resolver.resolve(vec!["components", "button"], "ru", "en");
//! assert_eq!(doc.unwrap().slug, "/en/docs/components/button/usage");
//!
//! // Tab set for the same path: usage and props exist, usage is current
//! let tabs = resolver.component_tabs(vec!["components", "button"], "ru", "en");
//! assert_eq!(tabs.len(), 2);
//! assert!(tabs[0].matches);
//! ```

pub(crate) mod resolver;
pub mod routes;
pub(crate) mod slug;
pub(crate) mod tabs;

pub use resolver::DocResolver;
pub use slug::{SlugInput, uniq};
pub use tabs::{DocTab, DocView};
