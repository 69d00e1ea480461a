//! Output of one struct analysis.

use serde::{Deserialize, Serialize};

use crate::method::Method;

/// Everything collected from one source unit for one target type.
///
/// `methods` keep the textual order of their declarations. `type_doc` is
/// empty when type documentation was not requested or does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Package clause of the analyzed source (empty if it had none).
    #[serde(default)]
    pub package: String,
    pub methods: Vec<Method>,
    pub imports: Vec<String>,
    #[serde(default)]
    pub type_doc: String,
}

impl AnalysisResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}
