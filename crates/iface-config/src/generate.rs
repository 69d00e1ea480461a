//! Generator defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Header written above every generated file.
pub const DEFAULT_HEADER: &str = "Code generated by ifacemaker; DO NOT EDIT.";

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

const fn default_true() -> bool {
    true
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateConfig {
    /// Header comment text, without the leading `//`.
    #[serde(default = "default_header")]
    pub header_comment: String,

    /// Copy each method's doc comment above its interface signature.
    #[serde(default = "default_true")]
    pub copy_docs: bool,

    /// Use the struct's doc comment as the interface doc when none is given.
    #[serde(default)]
    pub copy_type_doc: bool,

    /// Include methods whose names are not exported.
    #[serde(default)]
    pub include_private: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            header_comment: default_header(),
            copy_docs: true,
            copy_type_doc: false,
            include_private: false,
        }
    }
}

impl GenerateConfig {
    /// Reject values the renderer cannot use.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for an empty header comment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_comment.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "generate.header_comment".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
