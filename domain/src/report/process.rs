//! Result reporter: derives status and diagnostics from raw executions.

use super::patterns::rules_for;
use crate::tool::value_objects::{ExecutionResult, ExecutionStatus};
use serde::{Deserialize, Serialize};

/// An [`ExecutionResult`] enriched with derived status, summary, and
/// extracted diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub execution: ExecutionResult,
    pub status: ExecutionStatus,
    pub summary: String,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ProcessedResult {
    pub fn tool(&self) -> &str {
        &self.execution.tool
    }
}

/// Process a raw execution result into a status, summary, and extracted
/// warning/error lines.
///
/// Status is `failed` if the process did not succeed; otherwise `warning`
/// when the tool family's warning markers match stdout, else `passed`.
/// On failure, raw stderr is always included among the errors when present.
pub fn process(execution: &ExecutionResult) -> ProcessedResult {
    let rules = rules_for(&execution.tool);

    if !execution.success {
        let mut errors = rules.error_lines(&execution.stdout);
        if !execution.stderr.trim().is_empty() {
            errors.push(execution.stderr.trim().to_string());
        }
        let summary = if execution.timed_out {
            format!(
                "{} {} timed out after {}ms",
                execution.tool, execution.action, execution.execution_time_ms
            )
        } else {
            format!(
                "{} {} failed (exit code {})",
                execution.tool, execution.action, execution.exit_code
            )
        };
        return ProcessedResult {
            execution: execution.clone(),
            status: ExecutionStatus::Failed,
            summary,
            warnings: rules.warning_lines(&execution.stdout),
            errors,
        };
    }

    let warnings = rules.warning_lines(&execution.stdout);
    if !warnings.is_empty() {
        return ProcessedResult {
            execution: execution.clone(),
            status: ExecutionStatus::Warning,
            summary: format!(
                "{} {} passed with {} warning(s)",
                execution.tool,
                execution.action,
                warnings.len()
            ),
            warnings,
            errors: Vec::new(),
        };
    }

    ProcessedResult {
        execution: execution.clone(),
        status: ExecutionStatus::Passed,
        summary: format!("{} {} passed", execution.tool, execution.action),
        warnings: Vec::new(),
        errors: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::value_objects::TIMEOUT_EXIT_CODE;

    fn exec(tool: &str, exit_code: i32, stdout: &str, stderr: &str) -> ExecutionResult {
        ExecutionResult::completed(
            tool,
            "check",
            vec![tool.to_string()],
            exit_code,
            stdout,
            stderr,
            42,
        )
    }

    #[test]
    fn zero_exit_clean_output_passes() {
        let result = process(&exec("tsc", 0, "Compiled successfully.", ""));
        assert_eq!(result.status, ExecutionStatus::Passed);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn zero_exit_with_warning_markers_warns() {
        let result = process(&exec("npm", 0, "2 moderate severity vulnerabilities", ""));
        assert_eq!(result.status, ExecutionStatus::Warning);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.summary.contains("warning"));
    }

    #[test]
    fn nonzero_exit_fails_and_extracts_errors() {
        let result = process(&exec(
            "tsc",
            2,
            "src/a.ts(1,1): error TS2304: Cannot find name 'x'.",
            "",
        ));
        assert_eq!(result.status, ExecutionStatus::Failed);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("error TS2304"));
        assert!(result.summary.contains("exit code 2"));
    }

    #[test]
    fn stderr_always_included_on_failure() {
        let result = process(&exec("pip", 1, "", "ERROR: broken metadata"));
        assert_eq!(result.status, ExecutionStatus::Failed);
        assert_eq!(result.errors, vec!["ERROR: broken metadata"]);
    }

    #[test]
    fn timeout_summary() {
        let execution =
            ExecutionResult::timed_out("npm", "install", vec!["npm".into()], "", "", 5_000);
        let result = process(&execution);
        assert_eq!(result.status, ExecutionStatus::Failed);
        assert_eq!(result.execution.exit_code, TIMEOUT_EXIT_CODE);
        assert!(result.summary.contains("timed out"));
    }
}
