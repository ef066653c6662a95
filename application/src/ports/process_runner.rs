//! Process runner port.

use async_trait::async_trait;
use polycheck_domain::ExecutionResult;
use std::path::Path;
use thiserror::Error;

/// Failures that prevented a process from running at all.
///
/// A process that ran and exited non-zero (or timed out) is *not* an error;
/// it resolves to a failed [`ExecutionResult`] so that aggregation can
/// reason about it uniformly. Only spawn-level problems reject.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("cannot execute an empty command")]
    EmptyCommand,

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port for subprocess execution
#[async_trait]
pub trait ProcessRunnerPort: Send + Sync {
    /// Spawn `argv` in `working_dir` with stdio fully captured, enforcing
    /// `timeout_ms`. A timeout force-terminates the process and reports the
    /// reserved sentinel exit code.
    async fn run(
        &self,
        tool: &str,
        action: &str,
        argv: &[String],
        working_dir: &Path,
        timeout_ms: u64,
    ) -> Result<ExecutionResult, ProcessError>;

    /// Terminate all in-flight processes without waiting for their timeouts
    async fn terminate_all(&self);
}
