//! Template segment classification
//!
//! Pure parsing of `/users/:user_id/posts/:id` style templates into typed
//! segments. Same input, same output, no side effects.
use crate::error::{Result, UrlError};

/// Marker that turns a segment into a placeholder
pub const PLACEHOLDER_MARKER: char = ':';

/// A single `/`-separated piece of a template
///
/// # Examples
///
/// ```
/// use rhtmx_url::segment::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("users"), Segment::Literal("users".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Placeholder("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Rendered verbatim
    Literal(String),
    /// Bound to the parameter with this (marker-stripped) name
    Placeholder(String),
}

impl Segment {
    /// Parameter name for placeholders, `None` for literals
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

/// Classifies a raw segment (pure function)
///
/// Any string is a valid segment: a leading `:` makes it a placeholder,
/// everything else is a literal. A lone `:` is a placeholder with an empty
/// name.
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(PLACEHOLDER_MARKER) {
        Some(name) => Segment::Placeholder(name.to_string()),
        None => Segment::Literal(segment.to_string()),
    }
}

/// A parsed, immutable URL template
///
/// The source string is split on `/` and empty segments are dropped, so
/// `/users//:id/` and `users/:id` describe the same path.
///
/// # Examples
///
/// ```
/// use rhtmx_url::Template;
///
/// let template = Template::parse("/users/:user_id/posts/:id").unwrap();
/// assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["user_id", "id"]);
/// assert_eq!(template.as_str(), "/users/:user_id/posts/:id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template, rejecting the empty string
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        if source.is_empty() {
            return Err(UrlError::EmptyTemplate);
        }

        let segments = source
            .split('/')
            .filter(|s| !s.is_empty())
            .map(classify_segment)
            .collect();

        Ok(Self { source, segments })
    }

    /// The template exactly as it was written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in template order (repeats included)
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders().count()
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Template {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self> {
        Template::parse(s)
    }
}
