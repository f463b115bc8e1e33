//! Fragment builders for the consuming application's markup schema.
//!
//! Every element the pipeline emits goes through these helpers so the tag
//! structure lives in one place instead of format strings at call sites.

/// The value-type annotation the consuming application expects on each
/// field element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    String,
    FormattedText,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::String => "string",
            FieldKind::FormattedText => "formattedtext",
        }
    }
}

/// A field element with its type annotation:
/// `<name type="string">value</name>`.
///
/// The value is emitted as given: escaping is the sanitizer's concern and
/// happens before the value reaches the builder.
pub fn typed_element(name: &str, kind: FieldKind, value: &str) -> String {
    format!("<{name} type=\"{}\">{value}</{name}>", kind.as_str())
}

/// A plain wrapper element: `<name>inner</name>`.
pub fn wrap(name: &str, inner: &str) -> String {
    format!("<{name}>{inner}</{name}>")
}

/// Element name for the n-th rendered node (1-based, depth-first order):
/// `id-00001`, `id-00002`, ...
pub fn node_tag(index: u32) -> String {
    format!("id-{index:05}")
}

/// Render a numeric field value the way the consuming application expects:
/// integral values without a decimal point, fractions as given (`30`,
/// `0.02`, `2.5`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}
