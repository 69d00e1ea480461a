//! Receiver method extraction.

use iface_core::Method;

use crate::docs::raw_doc_lines;
use crate::error::ParserError;
use crate::field_list::format_node;
use crate::source::{Declaration, FunctionDecl};

/// Resolve the receiver type name of a method declaration.
///
/// One level of pointer is unwrapped, so `func (p *Person)` and
/// `func (p Person)` both name `Person`. Plain functions and generic
/// receivers (`*List[T]`) give `None`.
#[must_use]
pub fn receiver_type_name<'a, 'r>(
    decl: &'a Declaration<'r>,
) -> Option<(String, &'a FunctionDecl<'r>)> {
    let Declaration::Function(func) = decl else {
        return None;
    };
    let receiver = func.receiver()?;
    let param = receiver
        .children()
        .find(|c| c.kind().as_ref() == "parameter_declaration")?;
    let ty = param.field("type")?;
    let named = if ty.kind().as_ref() == "pointer_type" {
        ty.children().find(|c| c.is_named())?
    } else {
        ty
    };
    if named.kind().as_ref() != "type_identifier" {
        return None;
    }
    Some((named.text().to_string(), func))
}

/// Extract the interface method for `decl` when its receiver is `type_name`.
///
/// The signature is normalized to `Name(params) (results)`: results are
/// always parenthesized, and dropped together with the separating space
/// when there are none. Doc lines are returned verbatim.
///
/// # Errors
/// Returns `ParserError::MissingType` when a parameter has no type node.
pub fn extract_method(
    decl: &Declaration<'_>,
    source: &str,
    type_name: &str,
) -> Result<Option<Method>, ParserError> {
    let Some((receiver, func)) = receiver_type_name(decl) else {
        return Ok(None);
    };
    if receiver != type_name {
        return Ok(None);
    }
    let Some(name) = func.name() else {
        return Ok(None);
    };

    let params = format_node(source, func.parameters().as_ref())?;
    let results = format_node(source, func.result().as_ref())?;
    let code = if results.is_empty() {
        format!("{name}({})", params.join(", "))
    } else {
        format!("{name}({}) ({})", params.join(", "), results.join(", "))
    };

    Ok(Some(Method {
        name,
        docs: raw_doc_lines(func.node()),
        code,
    }))
}

/// Private unless the first character is an upper-case letter.
#[must_use]
pub fn is_method_private(name: &str) -> bool {
    iface_core::Visibility::of(name).is_private()
}
