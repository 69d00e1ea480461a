//! Doc comment extraction.
//!
//! Go convention: a doc comment is the run of comments immediately
//! preceding a declaration, with no blank line in between. A comment that
//! trails the previous declaration on its last line is not part of it.

use crate::source::GoNode;

/// Comment nodes forming the doc block of `node`, in source order.
pub(crate) fn preceding_comments<'r>(node: &GoNode<'r>) -> Vec<GoNode<'r>> {
    let mut comments = Vec::new();
    let mut next_line = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if !sibling.is_named() {
            current = sibling.prev();
            continue;
        }
        if sibling.kind().as_ref() != "comment" || sibling.end_pos().line() + 1 < next_line {
            break;
        }
        let start = sibling.start_pos().line();
        let trailing = previous_named(&sibling)
            .is_some_and(|p| p.kind().as_ref() != "comment" && p.end_pos().line() == start);
        if trailing {
            break;
        }
        next_line = start;
        current = sibling.prev();
        comments.push(sibling);
    }
    comments.reverse();
    comments
}

fn previous_named<'r>(node: &GoNode<'r>) -> Option<GoNode<'r>> {
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.is_named() {
            return Some(sibling);
        }
        current = sibling.prev();
    }
    None
}

/// Raw doc lines with comment markers kept verbatim.
///
/// A block comment spanning several lines contributes one entry per line.
pub(crate) fn raw_doc_lines(node: &GoNode<'_>) -> Vec<String> {
    preceding_comments(node)
        .iter()
        .flat_map(|comment| {
            comment
                .text()
                .lines()
                .map(|line| line.trim_end().to_string())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Doc text with markers stripped, one line per source line.
///
/// Tool directives (`//go:generate`, `//nolint`) are dropped, and leading
/// and trailing blank lines are removed.
pub(crate) fn doc_text(node: &GoNode<'_>) -> String {
    let mut lines = Vec::new();
    for comment in preceding_comments(node) {
        let text = comment.text();
        if let Some(body) = text.strip_prefix("//") {
            if is_directive(body) {
                continue;
            }
            lines.push(strip_one_space(body).trim_end().to_string());
        } else {
            let body = text
                .strip_prefix("/*")
                .and_then(|t| t.strip_suffix("*/"))
                .unwrap_or(text.as_ref());
            lines.extend(body.lines().map(|line| line.trim().to_string()));
        }
    }

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn strip_one_space(body: &str) -> &str {
    body.strip_prefix(' ').unwrap_or(body)
}

fn is_directive(body: &str) -> bool {
    body.starts_with("go:") || body.starts_with("nolint") || body.starts_with("line ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::source::{Declaration, SourceUnit};

    use super::*;

    fn docs_of(source: &str) -> Vec<(Vec<String>, String)> {
        let unit = SourceUnit::parse(source.as_bytes()).unwrap();
        unit.declarations()
            .iter()
            .filter(|d| !matches!(d, Declaration::Other(_)))
            .map(|d| (raw_doc_lines(d.node()), doc_text(d.node())))
            .collect()
    }

    #[test]
    fn adjacent_line_comments_form_the_doc() {
        let docs = docs_of("package p\n\n// First line.\n//  Indented.\nfunc A() {}\n");
        assert_eq!(
            docs[0].0,
            vec!["// First line.".to_string(), "//  Indented.".to_string()]
        );
        assert_eq!(docs[0].1, "First line.\n Indented.");
    }

    #[test]
    fn blank_line_detaches_comment() {
        let docs = docs_of("package p\n\n// Detached.\n\nfunc A() {}\n");
        assert!(docs[0].0.is_empty());
        assert_eq!(docs[0].1, "");
    }

    #[test]
    fn only_the_adjacent_group_counts() {
        let docs = docs_of("package p\n\n// Old.\n\n// New.\nfunc A() {}\n");
        assert_eq!(docs[0].0, vec!["// New.".to_string()]);
    }

    #[test]
    fn trailing_comment_of_previous_declaration_is_ignored() {
        let docs = docs_of("package p\n\nfunc A() {} // about A\nfunc B() {}\n");
        assert!(docs[1].0.is_empty(), "docs: {:?}", docs[1].0);
    }

    #[test]
    fn block_comment_is_split_into_lines() {
        let docs = docs_of("package p\n\n/* Top\n   second */\nfunc A() {}\n");
        assert_eq!(
            docs[0].0,
            vec!["/* Top".to_string(), "   second */".to_string()]
        );
        assert_eq!(docs[0].1, "Top\nsecond");
    }

    #[test]
    fn directives_are_not_documentation() {
        let docs = docs_of("package p\n\n// A does things.\n//go:noinline\nfunc A() {}\n");
        assert_eq!(docs[0].1, "A does things.");
        assert_eq!(docs[0].0.len(), 2);
    }
}
