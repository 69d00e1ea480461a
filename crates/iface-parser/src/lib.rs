//! # iface-parser
//!
//! ast-grep-based Go source analysis for ifacemaker.
//!
//! Given the bytes of one Go file and the name of a struct, the analyzer
//! collects every method whose receiver names that struct, the file's
//! imports, and optionally the struct's own documentation.
//!
//! Layers, leaves first:
//! - [`field_list`]: parameter/result lists to normalized text fragments
//! - [`method`]: one declaration to an optional [`iface_core::Method`]
//! - [`analyzer`]: a whole source unit to an [`iface_core::AnalysisResult`]
//!
//! [`source`] owns the parsed tree and exposes its top-level items as the
//! [`Declaration`] sum type.

pub mod analyzer;
pub mod error;
pub mod field_list;
pub mod method;
pub mod source;

mod docs;

pub use analyzer::{AnalyzeOptions, parse_struct};
pub use error::ParserError;
pub use field_list::{FieldGroup, format_field_list};
pub use method::{extract_method, receiver_type_name};
pub use source::{
    AstTree, Declaration, FunctionDecl, GoNode, ImportDecl, SourceUnit, SyntaxDiagnostic, TypeDecl,
    first_syntax_error, parse_go,
};
