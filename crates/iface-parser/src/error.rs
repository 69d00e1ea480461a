//! Parser error types for iface-parser.

/// Errors that can occur while analyzing a Go source unit.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Source is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("Parse failed at line {line}: {message}")]
    ParseFailed { line: usize, message: String },

    /// A parameter or result entry had no type node to slice.
    #[error("Field at line {line} has no type")]
    MissingType { line: usize },
}
