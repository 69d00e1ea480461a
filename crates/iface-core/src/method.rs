//! Extracted receiver methods.

use serde::{Deserialize, Serialize};

use crate::render::RenderLine;
use crate::visibility::Visibility;

/// One method attached to the analyzed struct.
///
/// `code` is the normalized interface signature (`Name(params) (results)`)
/// and never contains a newline. `docs` holds the raw comment lines that
/// preceded the declaration, markers included, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub docs: Vec<String>,
    pub code: String,
}

impl Method {
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        Visibility::of(&self.name)
    }

    /// Expand into render lines: every doc line, then the signature.
    #[must_use]
    pub fn render_lines(&self) -> Vec<RenderLine> {
        self.docs
            .iter()
            .map(|doc| RenderLine::Doc(doc.clone()))
            .chain(std::iter::once(RenderLine::Signature(self.code.clone())))
            .collect()
    }

    /// Same as [`Method::render_lines`] without the documentation.
    #[must_use]
    pub fn signature_line(&self) -> RenderLine {
        RenderLine::Signature(self.code.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_lines_put_docs_before_code() {
        let method = Method {
            name: "TestMethod".to_string(),
            docs: vec!["// TestMethod is great".to_string()],
            code: "TestMethod() (string)".to_string(),
        };

        assert_eq!(
            method.render_lines(),
            vec![
                RenderLine::Doc("// TestMethod is great".to_string()),
                RenderLine::Signature("TestMethod() (string)".to_string()),
            ]
        );
    }

    #[test]
    fn undocumented_method_is_one_line() {
        let method = Method {
            name: "close".to_string(),
            docs: Vec::new(),
            code: "close()".to_string(),
        };

        assert_eq!(method.render_lines(), vec![method.signature_line()]);
        assert!(method.visibility().is_private());
    }
}
