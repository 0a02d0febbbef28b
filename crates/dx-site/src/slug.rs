//! Slug input normalization.
//!
//! Request paths arrive either as a single segment or as an ordered
//! sequence of segments, depending on the route shape. [`SlugInput`]
//! normalizes both into one canonical segment sequence.

/// Heterogeneous slug input: one path segment or an ordered sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlugInput {
    /// A single path segment.
    Single(String),
    /// An ordered sequence of path segments.
    Segments(Vec<String>),
}

impl SlugInput {
    /// Normalize into an ordered segment sequence.
    ///
    /// A single segment is wrapped in a one-element sequence; a sequence
    /// is returned by move, unchanged.
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        match self {
            Self::Single(segment) => vec![segment],
            Self::Segments(segments) => segments,
        }
    }
}

impl From<&str> for SlugInput {
    fn from(segment: &str) -> Self {
        Self::Single(segment.to_owned())
    }
}

impl From<String> for SlugInput {
    fn from(segment: String) -> Self {
        Self::Single(segment)
    }
}

impl From<Vec<String>> for SlugInput {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl From<Vec<&str>> for SlugInput {
    fn from(segments: Vec<&str>) -> Self {
        Self::Segments(segments.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for SlugInput {
    fn from(segments: &[&str]) -> Self {
        Self::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// First-occurrence deduplication, order-preserving.
///
/// # Examples
///
/// ```
/// use dx_site::uniq;
///
/// let segments = vec!["button".to_owned(), "usage".to_owned(), "usage".to_owned()];
/// assert_eq!(uniq(segments), vec!["button".to_owned(), "usage".to_owned()]);
/// ```
#[must_use]
pub fn uniq<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
