//! # iface-render
//!
//! Renders a Go interface declaration from a [`iface_core::RenderSpec`] and
//! canonicalizes the result.
//!
//! Rendering is two steps: [`assemble`] lays out the header comment, package
//! clause, import block, interface documentation and method lines; then
//! [`canonicalize`] checks the text parses as Go and normalizes indentation,
//! spacing and blank lines.

pub mod error;
pub mod format;
pub mod render;

pub use error::RenderError;
pub use format::canonicalize;
pub use render::{assemble, make_interface};
