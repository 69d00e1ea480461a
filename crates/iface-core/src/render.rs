//! Renderer input types.

use serde::{Deserialize, Serialize};

/// One line of an interface body, tagged with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RenderLine {
    /// A documentation line. Rendered as a comment; the `//` marker is
    /// added when the text does not already carry one.
    Doc(String),
    /// A finished method signature such as `Name() (string)`.
    Signature(String),
}

/// Everything the interface renderer needs for one output file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSpec {
    /// Header comment text, without the leading `//`.
    pub header: String,
    pub package: String,
    pub interface_name: String,
    /// Interface documentation; may be empty or span several lines.
    #[serde(default)]
    pub interface_doc: String,
    #[serde(default)]
    pub lines: Vec<RenderLine>,
    #[serde(default)]
    pub imports: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_line_serializes_tagged() {
        let line = RenderLine::Signature("Close() (error)".to_string());
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"kind":"signature","text":"Close() (error)"}"#);
    }

    #[test]
    fn render_spec_defaults_optional_fields() {
        let spec: RenderSpec = serde_json::from_str(
            r#"{"header":"h","package":"pkg","interface_name":"Doer"}"#,
        )
        .unwrap();
        assert!(spec.lines.is_empty());
        assert!(spec.imports.is_empty());
        assert!(spec.interface_doc.is_empty());
    }
}
