//! ast-grep wrapper: parsed Go source units and their top-level declarations.

use std::fmt;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_core::{AstGrep, Node};
use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;

/// The concrete AST tree type for Go sources.
pub type AstTree = AstGrep<StrDoc<SupportLang>>;

/// A node borrowed from an [`AstTree`].
pub type GoNode<'r> = Node<'r, StrDoc<SupportLang>>;

/// Parse Go source into an ast-grep tree.
///
/// tree-sitter always produces a tree; use [`first_syntax_error`] to find
/// out whether the source was actually valid.
#[must_use]
pub fn parse_go(source: &str) -> AstTree {
    SupportLang::Go.ast_grep(source)
}

/// Location and description of the first syntax error in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxDiagnostic {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

impl fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Walk the tree in pre-order and report the first `ERROR` or missing node.
#[must_use]
pub fn first_syntax_error(tree: &AstTree) -> Option<SyntaxDiagnostic> {
    let root = tree.root();
    let bad = root.dfs().find(|n| n.is_error() || n.is_missing())?;
    let line = bad.start_pos().line() + 1;
    let message = if bad.is_missing() {
        format!("missing `{}`", bad.kind())
    } else {
        let text = bad.text();
        let snippet: String = text.lines().next().unwrap_or_default().chars().take(40).collect();
        format!("unexpected `{}`", snippet.trim())
    };
    Some(SyntaxDiagnostic { line, message })
}

/// One parsed Go file.
///
/// Owns both the source text and its tree. Built per analysis call and
/// dropped afterwards.
pub struct SourceUnit {
    source: String,
    tree: AstTree,
}

impl SourceUnit {
    /// Parse raw bytes.
    ///
    /// # Errors
    /// Returns `ParserError::InvalidUtf8` for non-UTF-8 input and
    /// `ParserError::ParseFailed` when the tree contains a syntax error.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParserError> {
        let source = std::str::from_utf8(bytes)
            .map_err(|e| ParserError::InvalidUtf8 {
                offset: e.valid_up_to(),
            })?
            .to_owned();
        let tree = parse_go(&source);
        if let Some(diagnostic) = first_syntax_error(&tree) {
            return Err(ParserError::ParseFailed {
                line: diagnostic.line,
                message: diagnostic.message,
            });
        }
        Ok(Self { source, tree })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The name from the `package` clause, if present.
    #[must_use]
    pub fn package_name(&self) -> Option<String> {
        self.tree
            .root()
            .children()
            .find(|c| c.kind().as_ref() == "package_clause")?
            .children()
            .find(|c| c.kind().as_ref() == "package_identifier")
            .map(|n| n.text().to_string())
    }

    /// Top-level declarations in source order. Comments are not declarations.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration<'_>> {
        let root = self.tree.root();
        root.children()
            .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
            .map(Declaration::from_node)
            .collect()
    }
}

/// A top-level item of a source unit.
#[derive(Clone)]
pub enum Declaration<'r> {
    /// `func` declarations, with or without a receiver.
    Function(FunctionDecl<'r>),
    Type(TypeDecl<'r>),
    Import(ImportDecl<'r>),
    /// Package clause, `const`, `var`, and anything else.
    Other(GoNode<'r>),
}

impl<'r> Declaration<'r> {
    #[must_use]
    pub fn from_node(node: GoNode<'r>) -> Self {
        let kind = node.kind().to_string();
        match kind.as_str() {
            "function_declaration" | "method_declaration" => Self::Function(FunctionDecl { node }),
            "type_declaration" => Self::Type(TypeDecl { node }),
            "import_declaration" => Self::Import(ImportDecl { node }),
            _ => Self::Other(node),
        }
    }

    #[must_use]
    pub const fn node(&self) -> &GoNode<'r> {
        match self {
            Self::Function(FunctionDecl { node })
            | Self::Type(TypeDecl { node })
            | Self::Import(ImportDecl { node })
            | Self::Other(node) => node,
        }
    }
}

/// A `func` declaration.
#[derive(Clone)]
pub struct FunctionDecl<'r> {
    node: GoNode<'r>,
}

impl<'r> FunctionDecl<'r> {
    #[must_use]
    pub const fn node(&self) -> &GoNode<'r> {
        &self.node
    }

    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.node.field("name").map(|n| n.text().to_string())
    }

    /// The receiver parameter list; `None` for plain functions.
    #[must_use]
    pub fn receiver(&self) -> Option<GoNode<'r>> {
        self.node.field("receiver")
    }

    #[must_use]
    pub fn parameters(&self) -> Option<GoNode<'r>> {
        self.node.field("parameters")
    }

    /// Either a `parameter_list` or a bare type node.
    #[must_use]
    pub fn result(&self) -> Option<GoNode<'r>> {
        self.node.field("result")
    }
}

/// A `type` declaration, possibly grouped.
#[derive(Clone)]
pub struct TypeDecl<'r> {
    node: GoNode<'r>,
}

impl<'r> TypeDecl<'r> {
    #[must_use]
    pub const fn node(&self) -> &GoNode<'r> {
        &self.node
    }

    /// `type_spec` and `type_alias` children.
    #[must_use]
    pub fn specs(&self) -> Vec<GoNode<'r>> {
        self.node
            .children()
            .filter(|c| {
                let k = c.kind();
                k.as_ref() == "type_spec" || k.as_ref() == "type_alias"
            })
            .collect()
    }

    #[must_use]
    pub fn spec_named(&self, name: &str) -> Option<GoNode<'r>> {
        self.specs().into_iter().find(|spec| {
            spec.field("name")
                .is_some_and(|n| n.text().as_ref() == name)
        })
    }
}

/// An `import` declaration, single or grouped.
#[derive(Clone)]
pub struct ImportDecl<'r> {
    node: GoNode<'r>,
}

impl ImportDecl<'_> {
    /// Import strings in source order: the quoted path, prefixed by
    /// `<alias> ` when the import is named.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut specs = Vec::new();
        for child in self.node.children() {
            let kind = child.kind().to_string();
            match kind.as_str() {
                "import_spec" => specs.push(child),
                "import_spec_list" => specs.extend(
                    child
                        .children()
                        .filter(|c| c.kind().as_ref() == "import_spec"),
                ),
                _ => {}
            }
        }
        specs
            .iter()
            .filter_map(|spec| {
                let path = spec.field("path")?.text().to_string();
                Some(match spec.field("name") {
                    Some(alias) => format!("{} {path}", alias.text()),
                    None => path,
                })
            })
            .collect()
    }
}
