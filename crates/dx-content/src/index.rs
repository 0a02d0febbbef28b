//! Content index over document records.
//!
//! The index is an ordered, read-only collection built once at process
//! start (or build time) and shared across all page resolutions. All
//! accessors are pure reads; nothing here mutates a record after
//! construction.

use std::collections::BTreeMap;

use crate::record::{DocRecord, USAGE_SCOPE};

/// Ordered, read-only collection of all document records.
///
/// Record order is the populator's order and is preserved by every
/// accessor. Lookups are linear scans; the collection is a few hundred
/// records at most and is queried per page, not per render.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    records: Vec<DocRecord>,
}

impl ContentIndex {
    /// Create an index from fully formed records.
    #[must_use]
    pub fn new(records: Vec<DocRecord>) -> Self {
        Self { records }
    }

    /// All records, in index order.
    #[must_use]
    pub fn records(&self) -> &[DocRecord] {
        &self.records
    }

    /// Number of records in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the index holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of a logical document type.
    ///
    /// A record belongs to a type when its slug contains `/docs/{type_token}`.
    /// Order-preserving filter; used by the routing collaborator to
    /// enumerate build targets.
    #[must_use]
    pub fn docs_by_type(&self, type_token: &str) -> Vec<&DocRecord> {
        let needle = format!("/docs/{type_token}");
        self.records
            .iter()
            .filter(|record| record.slug.contains(&needle))
            .collect()
    }

    /// The dedicated usage sub-page for a component identifier.
    ///
    /// Returns the first record sharing the `id` whose scope is
    /// [`USAGE_SCOPE`].
    #[must_use]
    pub fn usage_companion(&self, id: &str) -> Option<&DocRecord> {
        self.records
            .iter()
            .find(|record| record.id == id && record.scope.as_deref() == Some(USAGE_SCOPE))
    }

    /// Group records of a type by display label of their category.
    ///
    /// Records without a category are skipped. Labels are ordered; records
    /// within a group keep index order.
    #[must_use]
    pub fn grouped_by_category(&self, type_token: &str) -> BTreeMap<String, Vec<&DocRecord>> {
        let mut groups: BTreeMap<String, Vec<&DocRecord>> = BTreeMap::new();
        for doc in self.docs_by_type(type_token) {
            let Some(category) = doc.category.as_deref().filter(|c| !c.is_empty()) else {
                continue;
            };
            groups.entry(category_label(category)).or_default().push(doc);
        }
        groups
    }
}

/// Display label for a category token: first character uppercased,
/// hyphens replaced by spaces.
fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    capitalized.replace('-', " ")
}
