//! Localized document resolution.
//!
//! Maps a request path and locale pair to the best-matching document
//! record, falling back to the default locale when no localized version
//! exists. Component sub-pages come back with their usage companion's
//! front matter merged in.
//!
//! # Thread Safety
//!
//! The resolver shares the [`ContentIndex`] behind an `Arc` and never
//! writes through it: every resolution returns an owned record, and the
//! front-matter merge builds a fresh map. Concurrent resolutions of the
//! same record always observe the index as populated.

use std::sync::Arc;

use dx_content::{ContentIndex, DocRecord, USAGE_SCOPE, merge_front_matter};

use crate::slug::SlugInput;

/// Resolves request paths to document records.
#[derive(Clone, Debug)]
pub struct DocResolver {
    index: Arc<ContentIndex>,
}

impl DocResolver {
    /// Create a resolver over a shared content index.
    #[must_use]
    pub fn new(index: Arc<ContentIndex>) -> Self {
        Self { index }
    }

    /// The underlying content index.
    #[must_use]
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Resolve a request path to a document record.
    ///
    /// The slug input is normalized to segments and joined into a suffix
    /// query. A record matches when its slug starts with `/{locale}` and
    /// ends with the suffix query, or with `{suffix}/usage`; the latter
    /// lets a bare component path resolve to its usage sub-page. When the
    /// requested locale has no match, the default locale is searched
    /// before giving up.
    ///
    /// Among multiple candidates the exact suffix match wins over the
    /// `/usage`-suffixed alternative, then the shortest slug, then the
    /// earliest index position.
    ///
    /// # Arguments
    ///
    /// * `slug` - Request path: a single segment or a segment sequence
    /// * `locale` - Requested locale code (e.g. "en")
    /// * `default_locale` - Locale to fall back to
    ///
    /// # Returns
    ///
    /// An owned record, with front matter merged from the usage companion
    /// for component sub-pages, or `None` when nothing matches in either
    /// locale. Absence is a normal outcome (a not-found page), not an
    /// error.
    #[must_use]
    pub fn resolve(
        &self,
        slug: impl Into<SlugInput>,
        locale: &str,
        default_locale: &str,
    ) -> Option<DocRecord> {
        let suffix = slug.into().into_segments().join("/");

        let localized = self.find_in_locale(locale, &suffix);
        if localized.is_none() {
            tracing::debug!(%suffix, locale, default_locale, "falling back to default locale");
        }

        let Some(record) = localized.or_else(|| self.find_in_locale(default_locale, &suffix))
        else {
            tracing::debug!(%suffix, locale, default_locale, "no doc in either locale");
            return None;
        };

        Some(self.with_inherited_front_matter(record))
    }

    /// Best suffix match within a single locale.
    fn find_in_locale(&self, locale: &str, suffix: &str) -> Option<&DocRecord> {
        let locale_prefix = format!("/{locale}");
        let usage_suffix = format!("{suffix}/usage");

        self.index
            .records()
            .iter()
            .filter(|record| record.slug.starts_with(&locale_prefix))
            .filter_map(|record| {
                let rank = if record.slug.ends_with(suffix) {
                    0
                } else if record.slug.ends_with(&usage_suffix) {
                    1
                } else {
                    return None;
                };
                Some((rank, record))
            })
            // min_by_key keeps the first of equals, so index order is the
            // final tie-break
            .min_by_key(|&(rank, record)| (rank, record.slug.len()))
            .map(|(_, record)| record)
    }

    /// Owned copy of the record, with the usage companion's front matter
    /// merged in for component sub-pages. The indexed record is left
    /// untouched.
    fn with_inherited_front_matter(&self, record: &DocRecord) -> DocRecord {
        let mut resolved = record.clone();
        if record.inherits_usage_front_matter()
            && let Some(companion) = self.index.usage_companion(&record.id)
        {
            resolved.front_matter =
                merge_front_matter(&record.front_matter, &companion.front_matter);
        }
        resolved
    }
}
