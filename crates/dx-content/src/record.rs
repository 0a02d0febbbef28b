//! Document record type.
//!
//! A [`DocRecord`] is one localized documentation page as supplied by the
//! index populator. Records are immutable once indexed.
//!
//! # Slug Convention
//!
//! Slugs are absolute `/`-delimited paths and always begin with exactly one
//! locale segment:
//! - `/en/docs/components/button/usage` - component usage page
//! - `/en/docs/components/button/props` - component props page
//! - `/ru/docs/styled-system/gradient` - standalone localized page

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::front_matter::FrontMatter;

/// Scope tag carried by a component's dedicated usage sub-page.
///
/// Any other non-empty scope marks a record as a component doc that
/// inherits shared front matter from its usage companion.
pub const USAGE_SCOPE: &str = "usage";

/// A single documentation page record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocRecord {
    /// Opaque unique identifier within the index.
    pub id: String,
    /// Locale-prefixed absolute path (e.g. `/en/docs/components/button/usage`).
    pub slug: String,
    /// Grouping label, set only for component docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// View scope tag (see [`USAGE_SCOPE`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Page metadata.
    #[serde(
        default,
        rename = "frontMatter",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub front_matter: FrontMatter,
    /// Compiled page content, passed through untouched.
    #[serde(default)]
    pub body: String,
}

impl DocRecord {
    /// Create a record with the given identifier and slug.
    #[must_use]
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            category: None,
            scope: None,
            front_matter: FrontMatter::new(),
            body: String::new(),
        }
    }

    /// Attach a category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach a view scope tag.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Attach front matter.
    #[must_use]
    pub fn with_front_matter(mut self, front_matter: FrontMatter) -> Self {
        self.front_matter = front_matter;
        self
    }

    /// Attach compiled body content.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Locale prefix of the slug (the first path segment).
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.slug.split('/').find(|s| !s.is_empty())
    }

    /// Non-empty path segments of the slug, locale included.
    #[must_use]
    pub fn slug_segments(&self) -> Vec<&str> {
        self.slug.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// True when this record is a component's primary/props/theming page
    /// and inherits shared front matter from its usage companion.
    #[must_use]
    pub fn inherits_usage_front_matter(&self) -> bool {
        self.scope
            .as_deref()
            .is_some_and(|scope| !scope.is_empty() && scope != USAGE_SCOPE)
    }
}
