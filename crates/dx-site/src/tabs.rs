//! Component view tabs.
//!
//! A component page is documented across up to three sibling views:
//! usage, props, and theming. Given a request path, the tab-set builder
//! derives which views exist for the component, which one the request is
//! currently on, and the link target for each. Views that have no
//! document are left out of the set.

use dx_content::DocRecord;
use serde::Serialize;

use crate::resolver::DocResolver;
use crate::slug::{SlugInput, uniq};

/// A documentation view of a single component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocView {
    /// Usage examples and guidance.
    Usage,
    /// Props reference.
    Props,
    /// Theming and style customization.
    Theming,
}

impl DocView {
    /// All views, in tab display order.
    pub const ALL: [Self; 3] = [Self::Usage, Self::Props, Self::Theming];

    /// Path segment token for this view.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Props => "props",
            Self::Theming => "theming",
        }
    }

    /// Display label for the tab.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Usage => "Usage",
            Self::Props => "Props",
            Self::Theming => "Theming",
        }
    }
}

/// Navigation tab for one existing component view.
#[derive(Clone, Debug, Serialize)]
pub struct DocTab {
    /// The view this tab links to.
    pub view: DocView,
    /// True when the request path is currently on this view.
    pub matches: bool,
    /// Link target: the view slug as a URL path without leading slash.
    pub href: String,
    /// Display label.
    pub label: &'static str,
    /// The resolved document for the view.
    pub doc: DocRecord,
}

impl DocResolver {
    /// Derive the tab set for a component request path.
    ///
    /// Each view's slug is built from the request segments, the view
    /// resolved like any other request (locale fallback included), and
    /// views without a document dropped. Order is fixed: usage, props,
    /// theming.
    ///
    /// The usage tab is marked current for a bare two-segment component
    /// path; otherwise a tab is current when the request path ends in its
    /// view token.
    #[must_use]
    pub fn component_tabs(
        &self,
        slug: impl Into<SlugInput>,
        locale: &str,
        default_locale: &str,
    ) -> Vec<DocTab> {
        let params = slug.into().into_segments();
        let suffix = params.join("/");

        DocView::ALL
            .into_iter()
            .filter_map(|view| {
                let segments = view_slug(&params, view);
                let href = segments.join("/");
                let doc = self.resolve(SlugInput::Segments(segments), locale, default_locale)?;
                Some(DocTab {
                    view,
                    matches: is_current(&suffix, params.len(), view),
                    href,
                    label: view.label(),
                    doc,
                })
            })
            .collect()
    }
}

/// Build the slug for a sibling view of the requested path.
///
/// Appends the view token, drops a duplicate if the path already ends in
/// it, and trims to the 3-level `{section}/{component}/{view}` shape by
/// removing the third segment when the result runs longer.
fn view_slug(params: &[String], view: DocView) -> Vec<String> {
    let mut segments = params.to_vec();
    segments.push(view.as_str().to_owned());
    let mut segments = uniq(segments);
    if segments.len() > 3 {
        segments.remove(2);
    }
    segments
}

/// Whether the request path is currently on the given view.
///
/// A bare component path (exactly two segments) counts as the usage view.
fn is_current(suffix: &str, segment_count: usize, view: DocView) -> bool {
    let on_view = suffix.ends_with(&format!("/{}", view.as_str()));
    match view {
        DocView::Usage => on_view || segment_count == 2,
        DocView::Props | DocView::Theming => on_view,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dx_content::{ContentIndex, USAGE_SCOPE};
    use pretty_assertions::assert_eq;

    use super::*;

    fn view_doc(id: &str, component: &str, view: &str) -> DocRecord {
        DocRecord::new(id, format!("/en/docs/components/{component}/{view}"))
            .with_category("form")
            .with_scope(view)
    }

    fn resolver_with(records: Vec<DocRecord>) -> DocResolver {
        DocResolver::new(Arc::new(ContentIndex::new(records)))
    }

    fn button_resolver() -> DocResolver {
        resolver_with(vec![
            view_doc("button", "button", "usage"),
            view_doc("button", "button", "props"),
            view_doc("button", "button", "theming"),
        ])
    }

    // view_slug tests

    #[test]
    fn test_view_slug_appends_view_token() {
        let params = vec!["components".to_owned(), "button".to_owned()];

        let slug = view_slug(&params, DocView::Usage);

        assert_eq!(slug, vec!["components", "button", "usage"]);
    }

    #[test]
    fn test_view_slug_does_not_double_trailing_view() {
        let params = vec![
            "components".to_owned(),
            "button".to_owned(),
            "usage".to_owned(),
        ];

        let slug = view_slug(&params, DocView::Usage);

        assert_eq!(slug, vec!["components", "button", "usage"]);
    }

    #[test]
    fn test_view_slug_truncates_to_three_segments() {
        let params = vec![
            "components".to_owned(),
            "button".to_owned(),
            "props".to_owned(),
        ];

        let slug = view_slug(&params, DocView::Theming);

        assert_eq!(slug, vec!["components", "button", "theming"]);
    }

    // Tab set tests

    #[test]
    fn test_all_views_present_in_fixed_order() {
        let tabs = button_resolver().component_tabs(vec!["components", "button"], "en", "en");

        let views: Vec<DocView> = tabs.iter().map(|tab| tab.view).collect();
        assert_eq!(views, vec![DocView::Usage, DocView::Props, DocView::Theming]);
    }

    #[test]
    fn test_missing_view_filtered_out() {
        let resolver = resolver_with(vec![
            view_doc("button", "button", "usage"),
            view_doc("button", "button", "props"),
        ]);

        let tabs = resolver.component_tabs(vec!["components", "button"], "en", "en");

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].view, DocView::Usage);
        assert_eq!(tabs[1].view, DocView::Props);
    }

    #[test]
    fn test_bare_component_path_marks_usage_current() {
        let tabs = button_resolver().component_tabs(vec!["components", "button"], "en", "en");

        assert!(tabs[0].matches);
        assert!(!tabs[1].matches);
        assert!(!tabs[2].matches);
    }

    #[test]
    fn test_props_path_marks_props_current() {
        let tabs =
            button_resolver().component_tabs(vec!["components", "button", "props"], "en", "en");

        assert!(!tabs[0].matches);
        assert!(tabs[1].matches);
        assert!(!tabs[2].matches);
    }

    #[test]
    fn test_hrefs_are_view_slugs() {
        let tabs =
            button_resolver().component_tabs(vec!["components", "button", "props"], "en", "en");

        let hrefs: Vec<&str> = tabs.iter().map(|tab| tab.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "components/button/usage",
                "components/button/props",
                "components/button/theming"
            ]
        );
    }

    #[test]
    fn test_labels() {
        let tabs = button_resolver().component_tabs(vec!["components", "button"], "en", "en");

        let labels: Vec<&str> = tabs.iter().map(|tab| tab.label).collect();
        assert_eq!(labels, vec!["Usage", "Props", "Theming"]);
    }

    #[test]
    fn test_tabs_resolve_with_locale_fallback() {
        // Only the usage page is translated; props falls back to English
        let resolver = resolver_with(vec![
            view_doc("button", "button", "usage"),
            view_doc("button", "button", "props"),
            DocRecord::new("button", "/ru/docs/components/button/usage").with_scope(USAGE_SCOPE),
        ]);

        let tabs = resolver.component_tabs(vec!["components", "button"], "ru", "en");

        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].doc.slug, "/ru/docs/components/button/usage");
        assert_eq!(tabs[1].doc.slug, "/en/docs/components/button/props");
    }

    #[test]
    fn test_unknown_component_yields_empty_set() {
        let tabs = button_resolver().component_tabs(vec!["components", "menu"], "en", "en");

        assert!(tabs.is_empty());
    }

    #[test]
    fn test_tab_serialization() {
        let tabs = button_resolver().component_tabs(vec!["components", "button"], "en", "en");

        let json = serde_json::to_value(&tabs[0]).unwrap();

        assert_eq!(json["view"], "usage");
        assert_eq!(json["matches"], true);
        assert_eq!(json["href"], "components/button/usage");
        assert_eq!(json["label"], "Usage");
        assert_eq!(json["doc"]["id"], "button");
    }

    // DocView tests

    #[test]
    fn test_view_tokens() {
        assert_eq!(DocView::Usage.as_str(), "usage");
        assert_eq!(DocView::Props.as_str(), "props");
        assert_eq!(DocView::Theming.as_str(), "theming");
    }
}
