//! Application-facing orchestration configuration.
//!
//! These types carry user-supplied per-tool overrides and scope
//! applicability lists into the use cases. The infrastructure layer's config
//! loader produces them from TOML files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-tool overrides from user configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolOverride {
    /// Working directory for this tool, relative to the project root
    pub working_dir: Option<String>,
    /// Extra arguments always appended (still subject to filtering)
    pub args: Vec<String>,
    /// Action → literal command string, taking precedence over resolution
    pub commands: HashMap<String, String>,
    /// Timeout override in milliseconds
    pub timeout_ms: Option<u64>,
}

/// Top-level orchestration configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestrationConfig {
    /// Tool name → overrides
    pub tools: HashMap<String, ToolOverride>,
    /// Scope name → applicable tool names
    pub scopes: HashMap<String, Vec<String>>,
}

impl OrchestrationConfig {
    pub fn tool(&self, name: &str) -> Option<&ToolOverride> {
        self.tools.get(name)
    }

    pub fn scope_tools(&self, scope: &str) -> Option<&[String]> {
        self.scopes.get(scope).map(|v| v.as_slice())
    }
}
