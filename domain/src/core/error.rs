//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown tool '{name}'. Available tools: {}", available.join(", "))]
    UnknownTool { name: String, available: Vec<String> },

    #[error("Tool '{tool}' has no command for action '{action}'")]
    UnknownAction { tool: String, action: String },
}

impl DomainError {
    pub fn unknown_tool(name: impl Into<String>, available: Vec<String>) -> Self {
        DomainError::UnknownTool {
            name: name.into(),
            available,
        }
    }

    pub fn unknown_action(tool: impl Into<String>, action: impl Into<String>) -> Self {
        DomainError::UnknownAction {
            tool: tool.into(),
            action: action.into(),
        }
    }
}
