//! Canonical formatting for generated Go files.
//!
//! The text is first parsed with the Go grammar; any syntax error aborts
//! formatting. Valid text is then normalized line by line:
//! - indentation is one tab per open `{`, `(` or `[`
//! - whitespace runs outside literals and comments collapse to one space,
//!   with none after `(`/`[` or before `)`/`]`/`,` and one after `,`
//! - trailing whitespace is trimmed
//! - blank line runs collapse to one, and blank lines directly inside an
//!   opener or before a closer are dropped
//! - the file ends with exactly one newline

use iface_parser::{first_syntax_error, parse_go};

use crate::error::RenderError;

/// Check `text` parses as Go and return it in canonical form.
///
/// # Errors
/// Returns `RenderError::Format` with the first syntax diagnostic.
pub fn canonicalize(text: &str) -> Result<String, RenderError> {
    let tree = parse_go(text);
    if let Some(diagnostic) = first_syntax_error(&tree) {
        return Err(RenderError::Format {
            line: diagnostic.line,
            message: diagnostic.message,
        });
    }
    Ok(reformat(text))
}

fn reformat(text: &str) -> String {
    let mut lines = Vec::new();
    let mut depth: usize = 0;
    let mut in_block_comment = false;

    for raw in text.lines() {
        let trimmed = raw.trim();
        if in_block_comment {
            in_block_comment = !trimmed.contains("*/");
            lines.push(indented(depth, trimmed));
            continue;
        }
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }

        let line = normalize_line(trimmed);
        let closers = line
            .text
            .chars()
            .take_while(|c| matches!(c, '}' | ')' | ']'))
            .count();
        lines.push(indented(depth.saturating_sub(closers), &line.text));
        depth = (depth + line.opens).saturating_sub(line.closes);
        in_block_comment = line.opens_block_comment;
    }

    collapse_blank_lines(lines)
}

fn indented(depth: usize, text: &str) -> String {
    format!("{}{text}", "\t".repeat(depth))
}

struct Normalized {
    text: String,
    opens: usize,
    closes: usize,
    opens_block_comment: bool,
}

fn normalize_line(line: &str) -> Normalized {
    let mut norm = Normalized {
        text: String::with_capacity(line.len()),
        opens: 0,
        closes: 0,
        opens_block_comment: false,
    };
    let mut pending_space = false;
    let mut i = 0;

    while let Some(ch) = line[i..].chars().next() {
        let rest = &line[i..];
        if rest.starts_with("//") {
            push_comment(&mut norm.text, rest);
            break;
        }
        if rest.starts_with("/*") {
            let len = rest[2..].find("*/").map(|end| end + 4);
            push_comment(&mut norm.text, &rest[..len.unwrap_or(rest.len())]);
            norm.opens_block_comment = len.is_none();
            pending_space = false;
            i += len.unwrap_or(rest.len());
            continue;
        }
        if matches!(ch, '"' | '\'' | '`') {
            let len = literal_len(rest, ch);
            push_token(&mut norm.text, &mut pending_space, &rest[..len]);
            i += len;
            continue;
        }
        if ch.is_whitespace() {
            pending_space = true;
        } else {
            match ch {
                '{' | '(' | '[' => norm.opens += 1,
                '}' | ')' | ']' => norm.closes += 1,
                _ => {}
            }
            push_token(&mut norm.text, &mut pending_space, &rest[..ch.len_utf8()]);
        }
        i += ch.len_utf8();
    }

    norm
}

/// Byte length of the literal opening `rest`, delimiters included. An
/// unterminated literal runs to the end of the line.
fn literal_len(rest: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, ch) in rest.char_indices().skip(1) {
        if quote != '`' && escaped {
            escaped = false;
        } else if quote != '`' && ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return i + ch.len_utf8();
        }
    }
    rest.len()
}

fn push_token(out: &mut String, pending_space: &mut bool, token: &str) {
    if let Some(prev) = out.chars().last() {
        let glued = matches!(prev, '(' | '[') || token.starts_with([')', ']', ',']);
        if !glued && (*pending_space || prev == ',') {
            out.push(' ');
        }
    }
    *pending_space = false;
    out.push_str(token);
}

fn push_comment(out: &mut String, comment: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(comment.trim_end());
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*")
}

fn opens_block(line: &str) -> bool {
    !is_comment(line) && line.trim_end().ends_with(['{', '('])
}

fn closes_block(line: &str) -> bool {
    line.trim_start().starts_with(['}', ')'])
}

fn collapse_blank_lines(lines: Vec<String>) -> String {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_empty() {
            let redundant = out
                .last()
                .is_none_or(|prev| prev.is_empty() || opens_block(prev));
            if redundant {
                continue;
            }
        } else if closes_block(&line) {
            while out.last().is_some_and(String::is_empty) {
                out.pop();
            }
        }
        out.push(line);
    }
    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}
