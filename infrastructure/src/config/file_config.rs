//! On-disk configuration schema.
//!
//! Mirrors the TOML file layout and converts into the application layer's
//! [`OrchestrationConfig`]. Example:
//!
//! ```toml
//! [tools.tsc]
//! working_dir = "frontend"
//! timeout_ms = 120000
//!
//! [tools.tsc.commands]
//! check = "tsc --noEmit --strict"
//!
//! [scopes]
//! frontend = ["tsc", "vite"]
//! ```

use polycheck_application::{OrchestrationConfig, ToolOverride};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-tool section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    pub working_dir: Option<String>,
    pub args: Vec<String>,
    pub commands: HashMap<String, String>,
    pub timeout_ms: Option<u64>,
}

/// Root of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub tools: HashMap<String, FileToolConfig>,
    pub scopes: HashMap<String, Vec<String>>,
}

impl From<FileToolConfig> for ToolOverride {
    fn from(file: FileToolConfig) -> Self {
        Self {
            working_dir: file.working_dir,
            args: file.args,
            commands: file.commands,
            timeout_ms: file.timeout_ms,
        }
    }
}

impl From<FileConfig> for OrchestrationConfig {
    fn from(file: FileConfig) -> Self {
        Self {
            tools: file
                .tools
                .into_iter()
                .map(|(name, tool)| (name, tool.into()))
                .collect(),
            scopes: file.scopes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_layout() {
        let config: FileConfig = toml::from_str(
            r#"
            [tools.tsc]
            working_dir = "frontend"
            timeout_ms = 120000

            [tools.tsc.commands]
            check = "tsc --noEmit --strict"

            [scopes]
            frontend = ["tsc", "vite"]
            "#,
        )
        .unwrap();

        let orchestration: OrchestrationConfig = config.into();
        let tsc = orchestration.tool("tsc").unwrap();
        assert_eq!(tsc.working_dir.as_deref(), Some("frontend"));
        assert_eq!(tsc.timeout_ms, Some(120_000));
        assert_eq!(tsc.commands["check"], "tsc --noEmit --strict");
        assert_eq!(
            orchestration.scope_tools("frontend").unwrap(),
            &["tsc".to_string(), "vite".to_string()]
        );
    }

    #[test]
    fn empty_file_is_a_valid_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        let orchestration: OrchestrationConfig = config.into();
        assert!(orchestration.tools.is_empty());
        assert!(orchestration.scopes.is_empty());
    }
}
