//! Tool domain value objects: execution, validation, and status types.
//!
//! These form the output side of the orchestration pipeline. Every subprocess
//! run yields an [`ExecutionResult`]; environment checks yield an
//! [`EnvironmentValidation`]; both are data, not errors, so the aggregation
//! layer can reason about failures uniformly.

use super::entities::ToolDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reserved sentinel exit code reported for timed-out executions
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Status of a processed execution.
///
/// The ordering is the fixed severity ranking used to reduce multiple
/// statuses to one overall status: `failed > error > warning > passed >
/// pending`. `Error` and `Pending` are reserved values in that ordering;
/// the reporter itself only produces `Passed`, `Warning`, and `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Pending,
    Passed,
    Warning,
    Error,
    Failed,
}

impl ExecutionStatus {
    /// Position in the fixed severity ordering
    pub fn severity(&self) -> u8 {
        match self {
            ExecutionStatus::Pending => 0,
            ExecutionStatus::Passed => 1,
            ExecutionStatus::Warning => 2,
            ExecutionStatus::Error => 3,
            ExecutionStatus::Failed => 4,
        }
    }

    /// Overall success covers passed and warning outcomes
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionStatus::Passed | ExecutionStatus::Warning)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExecutionStatus::Pending => "pending",
            ExecutionStatus::Passed => "passed",
            ExecutionStatus::Warning => "warning",
            ExecutionStatus::Error => "error",
            ExecutionStatus::Failed => "failed",
        }
    }

    /// The more severe of two statuses
    pub fn max(self, other: ExecutionStatus) -> ExecutionStatus {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of running one tool/action pair as a subprocess
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Tool identifier
    pub tool: String,
    /// Action identifier
    pub action: String,
    /// True iff the process exited 0 and did not time out
    pub success: bool,
    /// The exact argument vector executed, for diagnostics
    pub command: Vec<String>,
    /// Process exit code; [`TIMEOUT_EXIT_CODE`] denotes a timeout
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall-clock execution time in milliseconds
    pub execution_time_ms: u64,
    /// Whether the timeout fired before the process exited
    pub timed_out: bool,
}

impl ExecutionResult {
    /// Result for a process that ran to completion
    pub fn completed(
        tool: impl Into<String>,
        action: impl Into<String>,
        command: Vec<String>,
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        execution_time_ms: u64,
    ) -> Self {
        Self {
            tool: tool.into(),
            action: action.into(),
            success: exit_code == 0,
            command,
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            execution_time_ms,
            timed_out: false,
        }
    }

    /// Result for a process that was force-terminated on timeout
    pub fn timed_out(
        tool: impl Into<String>,
        action: impl Into<String>,
        command: Vec<String>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        execution_time_ms: u64,
    ) -> Self {
        Self {
            tool: tool.into(),
            action: action.into(),
            success: false,
            command,
            exit_code: TIMEOUT_EXIT_CODE,
            stdout: stdout.into(),
            stderr: stderr.into(),
            execution_time_ms,
            timed_out: false,
        }
        .mark_timed_out()
    }

    fn mark_timed_out(mut self) -> Self {
        self.timed_out = true;
        self
    }

    /// Result for a tool that was never executed (invalid environment,
    /// configuration error, spawn failure). Carries the reason in stderr so
    /// downstream extraction surfaces it.
    pub fn refused(
        tool: impl Into<String>,
        action: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            action: action.into(),
            success: false,
            command: Vec::new(),
            exit_code: -1,
            stdout: String::new(),
            stderr: reason.into(),
            execution_time_ms: 0,
            timed_out: false,
        }
    }
}

/// Existence record for a single prerequisite path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCheck {
    pub path: String,
    pub exists: bool,
}

impl FileCheck {
    pub fn new(path: impl Into<String>, exists: bool) -> Self {
        Self {
            path: path.into(),
            exists,
        }
    }
}

/// Outcome of checking a tool's file prerequisites.
///
/// `is_valid` is a pure function of the filesystem state at validation time:
/// true iff every required file exists and every alternative group has at
/// least one existing member. A definition with no required files and no
/// alternative groups is trivially valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub required_files: Vec<FileCheck>,
    pub alternative_files: Vec<Vec<FileCheck>>,
    pub optional_files: Vec<FileCheck>,
}

impl EnvironmentValidation {
    pub fn valid() -> Self {
        Self::default()
    }
}

impl Default for EnvironmentValidation {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            required_files: Vec::new(),
            alternative_files: Vec::new(),
            optional_files: Vec::new(),
        }
    }
}

/// A [`ToolDefinition`] merged with resolved commands and a computed
/// environment validation. Built lazily per tool and cached by the
/// configuration manager.
#[derive(Debug, Clone)]
pub struct ResolvedToolConfig {
    pub definition: ToolDefinition,
    /// Action → concrete argument vector
    pub commands: HashMap<String, Vec<String>>,
    pub validation: EnvironmentValidation,
}

impl ResolvedToolConfig {
    pub fn command(&self, action: &str) -> Option<&Vec<String>> {
        self.commands.get(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(ExecutionStatus::Failed.severity() > ExecutionStatus::Error.severity());
        assert!(ExecutionStatus::Error.severity() > ExecutionStatus::Warning.severity());
        assert!(ExecutionStatus::Warning.severity() > ExecutionStatus::Passed.severity());
        assert!(ExecutionStatus::Passed.severity() > ExecutionStatus::Pending.severity());
    }

    #[test]
    fn success_covers_passed_and_warning() {
        assert!(ExecutionStatus::Passed.is_success());
        assert!(ExecutionStatus::Warning.is_success());
        assert!(!ExecutionStatus::Failed.is_success());
        assert!(!ExecutionStatus::Error.is_success());
        assert!(!ExecutionStatus::Pending.is_success());
    }

    #[test]
    fn max_picks_higher_severity() {
        assert_eq!(
            ExecutionStatus::Passed.max(ExecutionStatus::Failed),
            ExecutionStatus::Failed
        );
        assert_eq!(
            ExecutionStatus::Warning.max(ExecutionStatus::Passed),
            ExecutionStatus::Warning
        );
    }

    #[test]
    fn completed_success_follows_exit_code() {
        let ok = ExecutionResult::completed("tsc", "check", vec!["tsc".into()], 0, "", "", 10);
        assert!(ok.success);
        assert!(!ok.timed_out);

        let bad = ExecutionResult::completed("tsc", "check", vec!["tsc".into()], 2, "", "", 10);
        assert!(!bad.success);
    }

    #[test]
    fn timed_out_uses_sentinel() {
        let result =
            ExecutionResult::timed_out("npm", "install", vec!["npm".into()], "", "", 5_000);
        assert!(!result.success);
        assert!(result.timed_out);
        assert_eq!(result.exit_code, TIMEOUT_EXIT_CODE);
    }

    #[test]
    fn refused_carries_reason() {
        let result = ExecutionResult::refused("tsc", "check", "missing tsconfig.json");
        assert!(!result.success);
        assert!(result.command.is_empty());
        assert_eq!(result.stderr, "missing tsconfig.json");
    }

    #[test]
    fn default_validation_is_valid() {
        let validation = EnvironmentValidation::valid();
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }
}
