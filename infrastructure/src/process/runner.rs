//! Tokio-based process runner.
//!
//! Spawns tool processes with fully captured stdio and a hard timeout.
//! Output is drained concurrently with the wait so a chatty process can
//! never fill the pipe buffer and deadlock. Timeouts and cancellation both
//! force-terminate the child and report the reserved sentinel exit code.

use async_trait::async_trait;
use polycheck_application::{ProcessError, ProcessRunnerPort};
use polycheck_domain::ExecutionResult;
use std::path::Path;
use std::process::Stdio;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Process runner backed by `tokio::process`
pub struct TokioProcessRunner {
    // Swapped out wholesale on terminate_all so later runs get a fresh token
    cancel: Mutex<CancellationToken>,
}

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self {
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    fn current_token(&self) -> CancellationToken {
        self.cancel.lock().unwrap().clone()
    }
}

impl Default for TokioProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain a captured stdio stream to completion in the background
fn drain<R>(stream: Option<R>) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut stream) = stream {
            let _ = stream.read_to_end(&mut buf).await;
        }
        buf
    })
}

#[async_trait]
impl ProcessRunnerPort for TokioProcessRunner {
    async fn run(
        &self,
        tool: &str,
        action: &str,
        argv: &[String],
        working_dir: &Path,
        timeout_ms: u64,
    ) -> Result<ExecutionResult, ProcessError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ProcessError::EmptyCommand);
        };
        let command_line = argv.join(" ");
        debug!(tool, action, "spawning '{}'", command_line);

        let mut child = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        let stdout_task = drain(child.stdout.take());
        let stderr_task = drain(child.stderr.take());
        let token = self.current_token();
        let start = Instant::now();

        let status = tokio::select! {
            status = child.wait() => Some(status),
            _ = tokio::time::sleep(Duration::from_millis(timeout_ms)) => {
                warn!(tool, action, "timed out after {}ms; terminating", timeout_ms);
                None
            }
            _ = token.cancelled() => {
                warn!(tool, action, "cancelled; terminating");
                None
            }
        };

        let status = match status {
            Some(status) => Some(status.map_err(|source| ProcessError::Wait {
                command: command_line.clone(),
                source,
            })?),
            None => {
                let _ = child.start_kill();
                let _ = child.wait().await;
                None
            }
        };

        let execution_time_ms = start.elapsed().as_millis() as u64;
        let stdout = String::from_utf8_lossy(&stdout_task.await.unwrap_or_default()).into_owned();
        let stderr = String::from_utf8_lossy(&stderr_task.await.unwrap_or_default()).into_owned();

        Ok(match status {
            Some(status) => ExecutionResult::completed(
                tool,
                action,
                argv.to_vec(),
                status.code().unwrap_or(-1),
                stdout,
                stderr,
                execution_time_ms,
            ),
            None => ExecutionResult::timed_out(
                tool,
                action,
                argv.to_vec(),
                stdout,
                stderr,
                execution_time_ms,
            ),
        })
    }

    async fn terminate_all(&self) {
        let previous = {
            let mut guard = self.cancel.lock().unwrap();
            std::mem::replace(&mut *guard, CancellationToken::new())
        };
        previous.cancel();
    }
}
