//! Interface assembly.

use iface_core::{RenderLine, RenderSpec};
use tracing::debug;

use crate::error::RenderError;
use crate::format::canonicalize;

/// Render `spec` into a canonically formatted Go source file.
///
/// # Errors
/// Returns `RenderError::Format` when the assembled text does not parse.
pub fn make_interface(spec: &RenderSpec) -> Result<Vec<u8>, RenderError> {
    let assembled = assemble(spec);
    let formatted = canonicalize(&assembled)?;
    debug!(
        interface = %spec.interface_name,
        package = %spec.package,
        lines = spec.lines.len(),
        imports = spec.imports.len(),
        "rendered interface"
    );
    Ok(formatted.into_bytes())
}

/// Lay out the interface file without canonicalizing it.
#[must_use]
pub fn assemble(spec: &RenderSpec) -> String {
    let mut out: Vec<String> = spec.header.split('\n').map(comment_line).collect();
    out.push(String::new());
    out.push(format!("package {}", spec.package));
    out.push(String::new());

    if !spec.imports.is_empty() {
        out.push("import (".to_string());
        out.extend(spec.imports.iter().map(|import| format!("\t{import}")));
        out.push(")".to_string());
        out.push(String::new());
    }

    if !spec.interface_doc.is_empty() {
        out.extend(spec.interface_doc.split('\n').map(comment_line));
    }

    out.push(format!("type {} interface {{", spec.interface_name));
    let mut in_block_comment = false;
    for line in &spec.lines {
        match line {
            RenderLine::Doc(text) => {
                out.push(format!("\t{}", doc_line(text, &mut in_block_comment)));
            }
            RenderLine::Signature(code) => out.push(format!("\t{code}")),
        }
    }
    out.push("}".to_string());

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn comment_line(text: &str) -> String {
    if text.is_empty() {
        "//".to_string()
    } else {
        format!("// {text}")
    }
}

/// Doc lines keep an existing comment marker; bare text gets `// `.
/// Continuation lines of a block comment pass through untouched.
fn doc_line(text: &str, in_block_comment: &mut bool) -> String {
    let trimmed = text.trim_start();
    if *in_block_comment {
        if trimmed.contains("*/") {
            *in_block_comment = false;
        }
        return text.to_string();
    }
    if trimmed.starts_with("//") {
        return trimmed.to_string();
    }
    if trimmed.starts_with("/*") {
        *in_block_comment = !trimmed.contains("*/");
        return trimmed.to_string();
    }
    comment_line(trimmed)
}
