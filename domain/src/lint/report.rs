//! Direct-lint report types.

use crate::tool::value_objects::ExecutionStatus;
use serde::{Deserialize, Serialize};

/// Outcome of one linter within a direct-lint run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterRun {
    pub linter: String,
    pub files_processed: usize,
    pub violations: usize,
    pub status: ExecutionStatus,
    /// True when the linter was unavailable and never ran
    pub skipped: bool,
}

impl LinterRun {
    pub fn skipped(linter: impl Into<String>) -> Self {
        Self {
            linter: linter.into(),
            files_processed: 0,
            violations: 0,
            status: ExecutionStatus::Pending,
            skipped: true,
        }
    }
}

/// Aggregated result of a direct-lint run.
///
/// Violations are aggregated across all linters that ran; skipped linters
/// contribute nothing to the severity reduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    pub success: bool,
    pub status: ExecutionStatus,
    pub total_files: usize,
    pub total_violations: usize,
    pub linters: Vec<LinterRun>,
}

impl LintReport {
    /// Reduce linter runs into a report. Only linters that actually ran
    /// participate in the status reduction; a run where nothing executed
    /// reduces to `passed`.
    pub fn from_runs(total_files: usize, linters: Vec<LinterRun>) -> Self {
        let status = linters
            .iter()
            .filter(|run| !run.skipped)
            .fold(ExecutionStatus::Passed, |acc, run| acc.max(run.status));
        let total_violations = linters.iter().map(|run| run.violations).sum();
        Self {
            success: status.is_success(),
            status,
            total_files,
            total_violations,
            linters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(linter: &str, violations: usize, status: ExecutionStatus) -> LinterRun {
        LinterRun {
            linter: linter.to_string(),
            files_processed: 3,
            violations,
            status,
            skipped: false,
        }
    }

    #[test]
    fn reduces_to_worst_status() {
        let report = LintReport::from_runs(
            5,
            vec![
                run("eslint", 0, ExecutionStatus::Passed),
                run("ruff", 4, ExecutionStatus::Failed),
            ],
        );
        assert_eq!(report.status, ExecutionStatus::Failed);
        assert!(!report.success);
        assert_eq!(report.total_violations, 4);
    }

    #[test]
    fn skipped_linters_do_not_fail_the_run() {
        let report = LintReport::from_runs(
            2,
            vec![
                run("eslint", 0, ExecutionStatus::Passed),
                LinterRun::skipped("spectral"),
            ],
        );
        assert_eq!(report.status, ExecutionStatus::Passed);
        assert!(report.success);
    }

    #[test]
    fn empty_run_passes() {
        let report = LintReport::from_runs(0, vec![]);
        assert!(report.success);
        assert_eq!(report.total_violations, 0);
    }
}
