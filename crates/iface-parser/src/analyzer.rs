//! Struct analysis: methods, imports and type documentation of one source unit.

use iface_core::AnalysisResult;
use tracing::{debug, trace};

use crate::docs::doc_text;
use crate::error::ParserError;
use crate::method::extract_method;
use crate::source::{Declaration, SourceUnit, TypeDecl};

/// Independent inclusion flags for [`parse_struct`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Keep methods whose name does not start with an upper-case letter.
    pub include_private_methods: bool,
    /// Capture the struct's own doc comment into `type_doc`.
    pub copy_type_doc: bool,
}

/// Analyze one Go source unit for the methods of `type_name`.
///
/// Methods are returned in declaration order. Imports come from every
/// import declaration in source order. `type_doc` stays empty unless
/// `copy_type_doc` is set and the type has a doc comment.
///
/// # Errors
/// Returns `ParserError` when the source is not valid UTF-8 or does not
/// parse, or when a method signature is malformed.
pub fn parse_struct(
    src: &[u8],
    type_name: &str,
    options: AnalyzeOptions,
) -> Result<AnalysisResult, ParserError> {
    let unit = SourceUnit::parse(src)?;
    let mut result = AnalysisResult {
        package: unit.package_name().unwrap_or_default(),
        ..AnalysisResult::default()
    };

    for decl in unit.declarations() {
        trace!(kind = %decl.node().kind(), line = decl.node().start_pos().line() + 1, "declaration");
        match &decl {
            Declaration::Import(import) => result.imports.extend(import.paths()),
            Declaration::Type(ty) if options.copy_type_doc && result.type_doc.is_empty() => {
                if let Some(doc) = type_doc(ty, type_name) {
                    result.type_doc = doc;
                }
            }
            Declaration::Function(_) => {
                let Some(method) = extract_method(&decl, unit.source(), type_name)? else {
                    continue;
                };
                if !options.include_private_methods && method.visibility().is_private() {
                    debug!(method = %method.name, "skipping private method");
                    continue;
                }
                debug!(method = %method.name, code = %method.code, "collected method");
                result.methods.push(method);
            }
            _ => {}
        }
    }

    debug!(
        type_name,
        methods = result.methods.len(),
        imports = result.imports.len(),
        "struct analysis complete"
    );
    Ok(result)
}

/// Doc text of `type_name` inside `decl`.
///
/// In a grouped `type ( ... )` declaration the type spec's own comment wins;
/// the declaration's comment is the fallback.
fn type_doc(decl: &TypeDecl<'_>, type_name: &str) -> Option<String> {
    let spec = decl.spec_named(type_name)?;
    let own = doc_text(&spec);
    if own.is_empty() {
        Some(doc_text(decl.node()))
    } else {
        Some(own)
    }
}
