//! Console output formatter for orchestration results

use colored::Colorize;
use polycheck_domain::{AggregatedResponse, ExecutionStatus, LintReport, ProcessedResult};

/// Formats orchestration results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete aggregated response
    pub fn format(response: &AggregatedResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Tool Execution Results"));
        output.push('\n');

        for result in &response.results {
            output.push_str(&Self::format_result(result));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Verdict:".cyan().bold(),
            Self::status_colored(response.status, &response.message)
        ));
        output.push_str(&format!(
            "{} total {}ms, slowest {}ms, average {}ms\n",
            "Timing: ".cyan().bold(),
            response.timing.total_ms,
            response.timing.slowest_ms,
            response.timing.average_ms
        ));

        output
    }

    /// Format only the verdict line and counts (concise output)
    pub fn format_summary(response: &AggregatedResponse) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            Self::status_colored(response.status, &response.message)
        ));
        for (tool, breakdown) in &response.summary.by_tool {
            output.push_str(&format!(
                "  {}: {} passed, {} failed, {} warnings\n",
                tool.bold(),
                breakdown.passed,
                breakdown.failed,
                breakdown.warnings
            ));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(response: &AggregatedResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a direct-lint report
    pub fn format_lint(report: &LintReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Lint Results"));
        output.push('\n');

        for run in &report.linters {
            if run.skipped {
                output.push_str(&format!(
                    "  {} {}\n",
                    run.linter.bold(),
                    "skipped (not installed)".dimmed()
                ));
                continue;
            }
            let line = format!(
                "{} files, {} violation(s)",
                run.files_processed, run.violations
            );
            output.push_str(&format!(
                "  {} [{}] {}\n",
                run.linter.bold(),
                Self::status_colored(run.status, run.status.as_str()),
                line
            ));
        }

        output.push_str(&format!(
            "\n{} {} file(s), {} violation(s), overall {}\n",
            "Verdict:".cyan().bold(),
            report.total_files,
            report.total_violations,
            Self::status_colored(report.status, report.status.as_str())
        ));
        output
    }

    /// Format a direct-lint report as JSON
    pub fn format_lint_json(report: &LintReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_result(result: &ProcessedResult) -> String {
        let mut output = String::new();
        let title = format!("── {}:{} ──", result.execution.tool, result.execution.action);
        output.push_str(&format!(
            "\n{} [{}] {} ({}ms)\n",
            title.yellow().bold(),
            Self::status_colored(result.status, result.status.as_str()),
            result.summary,
            result.execution.execution_time_ms
        ));
        for warning in &result.warnings {
            output.push_str(&format!("  {} {}\n", "warn".yellow(), warning));
        }
        for error in &result.errors {
            output.push_str(&format!("  {} {}\n", "fail".red(), error));
        }
        output
    }

    fn status_colored(status: ExecutionStatus, text: &str) -> String {
        match status {
            ExecutionStatus::Passed => text.green().to_string(),
            ExecutionStatus::Warning => text.yellow().to_string(),
            ExecutionStatus::Failed | ExecutionStatus::Error => text.red().to_string(),
            ExecutionStatus::Pending => text.dimmed().to_string(),
        }
    }

    fn header(title: &str) -> String {
        format!("{}\n", format!("=== {} ===", title).cyan().bold())
    }
}
