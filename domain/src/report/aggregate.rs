//! Result aggregator: reduces processed results into one response.

use super::process::ProcessedResult;
use crate::tool::value_objects::ExecutionStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-tool pass/warn/fail counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolBreakdown {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

/// Summary counts across all contributing results.
///
/// A `Warning` result is counted in both `warnings` and `passed`, here and
/// in the per-tool breakdowns: warnings never fail a run, so `passed` plus
/// `failed` accounts for every settled result and `warnings` says how many
/// of the passing ones carried warnings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    /// Tool name → breakdown
    pub by_tool: HashMap<String, ToolBreakdown>,
}

/// Wall-clock timing metrics over all contributing results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingMetrics {
    pub total_ms: u64,
    pub average_ms: u64,
    pub slowest_ms: u64,
    pub fastest_ms: u64,
}

/// Metadata about which tools contributed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub tools: Vec<String>,
    pub tool_count: usize,
}

/// The top-level report combining one or more processed results.
///
/// Every processed result contributes to the counts and to the overall
/// status; nothing is silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedResponse {
    pub success: bool,
    pub status: ExecutionStatus,
    pub message: String,
    pub summary: SummaryCounts,
    pub timing: TimingMetrics,
    pub metadata: ResponseMetadata,
    pub results: Vec<ProcessedResult>,
}

/// Combine processed results into a single response.
///
/// Overall status is the highest-severity status present; overall success
/// means the reduced status is passed or warning. An empty input reduces to
/// `pending` and is not a success.
pub fn aggregate(results: Vec<ProcessedResult>) -> AggregatedResponse {
    let status = results
        .iter()
        .fold(ExecutionStatus::Pending, |acc, r| acc.max(r.status));

    let mut summary = SummaryCounts {
        total: results.len(),
        ..Default::default()
    };
    let mut tools: Vec<String> = Vec::new();
    for result in &results {
        let breakdown = summary.by_tool.entry(result.tool().to_string()).or_default();
        match result.status {
            ExecutionStatus::Warning => {
                summary.warnings += 1;
                summary.passed += 1;
                breakdown.warnings += 1;
                breakdown.passed += 1;
            }
            ExecutionStatus::Failed | ExecutionStatus::Error => {
                summary.failed += 1;
                breakdown.failed += 1;
            }
            ExecutionStatus::Passed => {
                summary.passed += 1;
                breakdown.passed += 1;
            }
            ExecutionStatus::Pending => {}
        }
        if !tools.contains(&result.tool().to_string()) {
            tools.push(result.tool().to_string());
        }
    }

    let timing = if results.is_empty() {
        TimingMetrics::default()
    } else {
        let times: Vec<u64> = results.iter().map(|r| r.execution.execution_time_ms).collect();
        let total: u64 = times.iter().sum();
        TimingMetrics {
            total_ms: total,
            average_ms: total / times.len() as u64,
            slowest_ms: *times.iter().max().unwrap_or(&0),
            fastest_ms: *times.iter().min().unwrap_or(&0),
        }
    };

    let message = build_message(&summary, tools.len(), status);
    let metadata = ResponseMetadata {
        tool_count: tools.len(),
        tools,
    };

    AggregatedResponse {
        success: status.is_success(),
        status,
        message,
        summary,
        timing,
        metadata,
        results,
    }
}

fn build_message(summary: &SummaryCounts, tool_count: usize, status: ExecutionStatus) -> String {
    if summary.total == 0 {
        return "No tools were executed".to_string();
    }
    if tool_count > 1 {
        format!(
            "{} tools executed: {} passed, {} failed, {} with warnings (overall {})",
            tool_count, summary.passed, summary.failed, summary.warnings, status
        )
    } else {
        format!(
            "{} passed, {} failed, {} with warnings (overall {})",
            summary.passed, summary.failed, summary.warnings, status
        )
    }
}
