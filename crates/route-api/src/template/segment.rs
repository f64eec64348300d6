//! Segment classification for route templates
//!
//! Pure functional parsing of a single `/`-delimited template piece.
//! All functions are **pure**: same input → same output, no side effects.

/// Represents the different kinds of route template segments
///
/// Each dynamic variant carries the parameter (or literal) name without its
/// `:` prefix or `?` suffix.
///
/// # Examples
///
/// ```
/// use route_api::template::segment::{classify_segment, TemplateSegment};
///
/// // Static segment
/// let seg = classify_segment("about");
/// assert!(matches!(seg, TemplateSegment::Static(_)));
///
/// // Optional static segment
/// let seg = classify_segment("edit?");
/// assert!(matches!(seg, TemplateSegment::OptionalStatic(_)));
///
/// // Required parameter
/// let seg = classify_segment(":id");
/// assert!(matches!(seg, TemplateSegment::Required(_)));
///
/// // Optional parameter
/// let seg = classify_segment(":id?");
/// assert!(matches!(seg, TemplateSegment::Optional(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateSegment {
    /// Optional parameter: `:id?`
    Optional(String),
    /// Required parameter: `:id`
    Required(String),
    /// Optional literal, included when its flag is `true`: `edit?`
    OptionalStatic(String),
    /// Literal text segment, emitted verbatim
    Static(String),
}

impl TemplateSegment {
    /// Name of the parameter or flag that fills this segment
    ///
    /// Returns `None` for static segments, which take no input.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            TemplateSegment::Optional(name)
            | TemplateSegment::Required(name)
            | TemplateSegment::OptionalStatic(name) => Some(name),
            TemplateSegment::Static(_) => None,
        }
    }

    /// Whether the segment disappears from the output when left unfilled
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            TemplateSegment::Optional(_) | TemplateSegment::OptionalStatic(_)
        )
    }

    /// Writes the segment back in template syntax
    pub fn as_template(&self) -> String {
        match self {
            TemplateSegment::Optional(name) => format!(":{name}?"),
            TemplateSegment::Required(name) => format!(":{name}"),
            TemplateSegment::OptionalStatic(name) => format!("{name}?"),
            TemplateSegment::Static(text) => text.clone(),
        }
    }
}

/// Classifies a segment into a template segment type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional param**: `:name?`
/// 2. **Required param**: `:name`
/// 3. **Optional static**: `name?`
/// 4. **Static**: any other text, including the empty piece
///
/// Template syntax is not validated: a stray `?` or an empty name is
/// classified like any other piece.
pub fn classify_segment(segment: &str) -> TemplateSegment {
    match segment.strip_prefix(':') {
        Some(param) => match param.strip_suffix('?') {
            Some(name) => TemplateSegment::Optional(name.to_string()),
            None => TemplateSegment::Required(param.to_string()),
        },
        None => match segment.strip_suffix('?') {
            Some(name) => TemplateSegment::OptionalStatic(name.to_string()),
            None => TemplateSegment::Static(segment.to_string()),
        },
    }
}
