//! Render error types.

/// Errors produced while rendering an interface.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The assembled text is not valid Go, usually because a signature
    /// handed to the renderer was malformed.
    #[error("Generated code is not valid Go at line {line}: {message}")]
    Format { line: usize, message: String },
}
