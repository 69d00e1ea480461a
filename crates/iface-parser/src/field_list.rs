//! Parameter and result list formatting.
//!
//! Type spellings are sliced from the original source by byte range rather
//! than re-serialized from the tree, so qualified names, pointer markers,
//! variadic dots and bracket syntax come through exactly as written.
//! Comments inside a type are cut out of the slice.

use std::ops::Range;

use crate::error::ParserError;
use crate::source::GoNode;

/// One parameter/result entry: zero or more names sharing one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub names: Vec<String>,
    /// Byte range of the type text in the source, `...` included.
    pub type_range: Range<usize>,
    /// Byte ranges of comments nested in the type, left out of the text.
    pub comments: Vec<Range<usize>>,
}

impl FieldGroup {
    /// Build the groups of a signature part.
    ///
    /// `node` is either a `parameter_list` or, for results written without
    /// parentheses, a bare type which becomes one unnamed group.
    ///
    /// # Errors
    /// Returns `ParserError::MissingType` for an entry with no type node.
    pub fn collect(node: &GoNode<'_>) -> Result<Vec<Self>, ParserError> {
        if node.kind().as_ref() != "parameter_list" {
            return Ok(vec![Self {
                names: Vec::new(),
                type_range: node.range(),
                comments: nested_comments(node),
            }]);
        }

        node.children()
            .filter(|c| {
                let k = c.kind();
                k.as_ref() == "parameter_declaration"
                    || k.as_ref() == "variadic_parameter_declaration"
            })
            .map(|decl| Self::from_declaration(&decl))
            .collect()
    }

    fn from_declaration(decl: &GoNode<'_>) -> Result<Self, ParserError> {
        let ty = decl.field("type").ok_or_else(|| ParserError::MissingType {
            line: decl.start_pos().line() + 1,
        })?;
        let names = decl
            .children()
            .filter(|c| c.kind().as_ref() == "identifier")
            .map(|n| n.text().to_string())
            .collect();
        let start = decl
            .children()
            .find(|c| c.kind().as_ref() == "...")
            .map_or(ty.range().start, |dots| dots.range().start);
        Ok(Self {
            names,
            type_range: start..ty.range().end,
            comments: nested_comments(&ty),
        })
    }

    /// `"a, b T"` for named groups, `"T"` for unnamed ones.
    #[must_use]
    pub fn format(&self, source: &str) -> String {
        let ty = single_line(&self.type_text(source));
        if self.names.is_empty() {
            ty
        } else {
            format!("{} {ty}", self.names.join(", "))
        }
    }

    fn type_text(&self, source: &str) -> String {
        let mut text = String::with_capacity(self.type_range.len());
        let mut cursor = self.type_range.start;
        for comment in &self.comments {
            text.push_str(&source[cursor..comment.start]);
            cursor = comment.end;
        }
        text.push_str(&source[cursor..self.type_range.end]);
        text
    }
}

fn nested_comments(node: &GoNode<'_>) -> Vec<Range<usize>> {
    node.dfs()
        .filter(|n| n.kind().as_ref() == "comment")
        .map(|n| n.range())
        .collect()
}

/// Format every group in order. Zero groups give an empty vector.
#[must_use]
pub fn format_field_list(source: &str, groups: &[FieldGroup]) -> Vec<String> {
    groups.iter().map(|g| g.format(source)).collect()
}

/// Collect and format a signature part; an absent part yields nothing.
///
/// # Errors
/// Propagates `ParserError::MissingType` from [`FieldGroup::collect`].
pub fn format_node(source: &str, node: Option<&GoNode<'_>>) -> Result<Vec<String>, ParserError> {
    let Some(node) = node else {
        return Ok(Vec::new());
    };
    let groups = FieldGroup::collect(node)?;
    Ok(format_field_list(source, &groups))
}

/// Type text may span lines (inline structs, func types). Whitespace runs
/// containing a newline are folded so signatures stay on one line, and a
/// trailing comma before a folded closer is dropped.
fn single_line(text: &str) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut gap = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            gap.push(ch);
            continue;
        }
        if gap.contains('\n') {
            if matches!(ch, ')' | '}') && out.ends_with(',') {
                out.pop();
            }
            out.push_str(fold_newline(out.chars().last(), ch));
        } else {
            out.push_str(&gap);
        }
        gap.clear();
        out.push(ch);
    }
    out
}

const fn fold_newline(before: Option<char>, after: char) -> &'static str {
    match (before, after) {
        (None | Some('{' | '('), _) | (_, '}' | ')') => "",
        (Some(','), _) => " ",
        _ => "; ",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::{Declaration, SourceUnit};

    fn formatted(source: &str) -> Vec<(Vec<String>, Vec<String>)> {
        let unit = SourceUnit::parse(source.as_bytes()).unwrap();
        unit.declarations()
            .iter()
            .filter_map(|d| match d {
                Declaration::Function(f) => Some(f.clone()),
                _ => None,
            })
            .map(|f| {
                let params = format_node(unit.source(), f.parameters().as_ref()).unwrap();
                let results = format_node(unit.source(), f.result().as_ref()).unwrap();
                (params, results)
            })
            .collect()
    }

    #[test]
    fn empty_lists_yield_no_fragments() {
        let out = formatted("package p\n\nfunc A() {}\n");
        assert_eq!(out[0], (Vec::<String>::new(), Vec::<String>::new()));
    }

    #[test]
    fn shared_type_names_are_rejoined() {
        let out = formatted("package p\n\nfunc A(name, telephone string) (x, y, z int) { return }\n");
        assert_eq!(out[0].0, vec!["name, telephone string"]);
        assert_eq!(out[0].1, vec!["x, y, z int"]);
    }

    #[test]
    fn separate_groups_stay_separate() {
        let out = formatted("package p\n\nfunc A(name string, age int) (int, string) { return 0, \"\" }\n");
        assert_eq!(out[0].0, vec!["name string", "age int"]);
        assert_eq!(out[0].1, vec!["int", "string"]);
    }

    #[test]
    fn bare_result_is_one_unnamed_group() {
        let out = formatted("package p\n\nfunc A() *bytes.Buffer { return nil }\n");
        assert_eq!(out[0].1, vec!["*bytes.Buffer"]);
    }

    #[test]
    fn type_spellings_are_verbatim() {
        let out = formatted(
            "package p\n\nfunc A(m map[string][]*http.Request, ch <-chan struct{}, f func(int) error, opts ...Option) {}\n",
        );
        assert_eq!(
            out[0].0,
            vec![
                "m map[string][]*http.Request",
                "ch <-chan struct{}",
                "f func(int) error",
                "opts ...Option",
            ]
        );
    }

    #[test]
    fn unnamed_variadic_keeps_dots() {
        let out = formatted("package p\n\nfunc A(string, ...int) {}\n");
        assert_eq!(out[0].0, vec!["string", "...int"]);
    }

    #[test]
    fn format_of_hand_built_groups() {
        let source = "xx string";
        let groups = vec![
            FieldGroup {
                names: vec!["a".into(), "b".into()],
                type_range: 3..9,
                comments: Vec::new(),
            },
            FieldGroup {
                names: Vec::new(),
                type_range: 3..9,
                comments: Vec::new(),
            },
        ];
        assert_eq!(
            format_field_list(source, &groups),
            vec!["a, b string".to_string(), "string".to_string()]
        );
    }

    #[test]
    fn multi_line_types_collapse_to_one_line() {
        assert_eq!(single_line("struct {\n\tA int\n\tB string\n}"), "struct {A int; B string}");
        assert_eq!(single_line("func(\n\ta int,\n\tb int,\n) error"), "func(a int, b int) error");
        assert_eq!(single_line("map[string]  int"), "map[string]  int");
    }

    #[test]
    fn comments_inside_types_are_dropped() {
        let out = formatted(
            "package p\n\nfunc A(opts struct {\n\tA int // the a\n\t// about b\n\tB int\n}) (struct {\n\tN int /* n */\n}) { return }\n",
        );
        assert_eq!(out[0].0, vec!["opts struct {A int; B int}"]);
        assert_eq!(out[0].1, vec!["struct {N int}"]);
    }
}
