//! GreeterConfig - TemplateGreeter の設定

use serde::{Deserialize, Serialize};

use super::capability::TemplateGreeter;
use crate::error::ToteError;

/// Describes a [`TemplateGreeter`].
///
/// Missing fields fall back to `"Hello, "` / `""`, which greets the same way
/// as `HelloGreeter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreeterConfig {
    pub prefix: String,
    pub suffix: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            prefix: "Hello, ".to_string(),
            suffix: String::new(),
        }
    }
}

impl GreeterConfig {
    pub fn from_json(json: &str) -> Result<Self, ToteError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> TemplateGreeter {
        TemplateGreeter::new(self.prefix.clone(), self.suffix.clone())
    }
}
