//! Route templates
//!
//! A [`Template`] is parsed once from its raw string and keeps both forms:
//! the raw pattern for callers that match incoming URLs, and the classified
//! segments the renderer walks.

use std::fmt;

pub mod segment;
pub use segment::{classify_segment, TemplateSegment};

/// A parsed route template such as `/employees/:id?/:tab?`
///
/// The piece before the first `/` is always kept as a static segment, so a
/// template without a leading slash renders that piece verbatim.
///
/// # Examples
///
/// ```
/// use route_api::{Template, TemplateSegment};
///
/// let template = Template::parse("/profiles/:id?/edit?");
/// assert_eq!(template.as_str(), "/profiles/:id?/edit?");
/// assert_eq!(
///     template.segments(),
///     &[
///         TemplateSegment::Static(String::new()),
///         TemplateSegment::Static("profiles".to_string()),
///         TemplateSegment::Optional("id".to_string()),
///         TemplateSegment::OptionalStatic("edit".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    raw: String,
    segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parses a template string into classified segments
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw
            .split('/')
            .enumerate()
            .map(|(index, piece)| match index {
                0 => TemplateSegment::Static(piece.to_string()),
                _ => classify_segment(piece),
            })
            .collect();

        Self { raw, segments }
    }

    /// The raw template string, exactly as it was defined
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The classified `/`-delimited segments, leading piece included
    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Names of the `:name` tokens that must be supplied, in template order
    pub fn required_params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                TemplateSegment::Required(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Names of every input the template accepts, in template order
    ///
    /// Includes required params, optional params and optional static flags.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(TemplateSegment::param_name)
            .collect()
    }

    /// Whether the template contains no tokens or optional segments
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, TemplateSegment::Static(_)))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Template {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl AsRef<str> for Template {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
