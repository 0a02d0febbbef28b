//! Build-path enumeration for the routing collaborator.
//!
//! Static site builds need the set of valid (locale, slug) pairs per
//! document type up front. Slug parameters exclude the locale, the
//! `docs` segment, and the type token, since the route template
//! re-supplies those. Paths are enumerated for every locale; the
//! resolver's fallback serves the untranslated ones at request time.

use dx_content::ContentIndex;
use serde::Serialize;

/// One build target: a locale paired with slug parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StaticPath {
    /// Locale code for the generated page.
    pub locale: String,
    /// Slug segments below the type token.
    pub params: Vec<String>,
}

/// Slug parameters for every document of a type, in index order.
///
/// For a slug `/en/docs/components/button/usage` and type token
/// `components` this yields `["button", "usage"]`.
#[must_use]
pub fn route_params(index: &ContentIndex, type_token: &str) -> Vec<Vec<String>> {
    index
        .docs_by_type(type_token)
        .into_iter()
        .map(|doc| {
            doc.slug_segments()
                .into_iter()
                .skip(3)
                .map(str::to_owned)
                .collect()
        })
        .collect()
}

/// Every document of a type paired with every locale.
#[must_use]
pub fn static_paths(index: &ContentIndex, type_token: &str, locales: &[&str]) -> Vec<StaticPath> {
    let all_params = route_params(index, type_token);

    let mut paths = Vec::with_capacity(locales.len() * all_params.len());
    for locale in locales {
        for params in &all_params {
            paths.push(StaticPath {
                locale: (*locale).to_owned(),
                params: params.clone(),
            });
        }
    }
    paths
}
