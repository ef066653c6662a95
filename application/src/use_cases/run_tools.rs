//! Run Tools use case
//!
//! Orchestrates multi-tool execution: builds each tool's configuration,
//! refuses tools with invalid environments, runs the rest through the
//! process runner (concurrently by default, sequentially with optional
//! stop-on-failure), and always produces a complete aggregated report.
//! One broken tool never aborts its siblings.

use crate::ports::process_runner::ProcessRunnerPort;
use crate::use_cases::build_command::{CommandBuilder, CommandOptions};
use crate::use_cases::tool_config::ToolConfigManager;
use polycheck_domain::{AggregatedResponse, ExecutionResult, ProcessedResult, aggregate, process};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// One requested tool/action execution
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub tool: String,
    pub action: String,
    pub options: CommandOptions,
}

impl ToolRequest {
    pub fn new(tool: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            action: action.into(),
            options: CommandOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CommandOptions) -> Self {
        self.options = options;
        self
    }
}

/// Input for the RunTools use case
#[derive(Debug, Clone, Default)]
pub struct RunToolsInput {
    pub requests: Vec<ToolRequest>,
    /// Run tools one at a time instead of fanning out
    pub sequential: bool,
    /// With sequential execution, skip not-yet-started tools after the
    /// first failure
    pub stop_on_failure: bool,
}

impl RunToolsInput {
    pub fn new(requests: Vec<ToolRequest>) -> Self {
        Self {
            requests,
            sequential: false,
            stop_on_failure: false,
        }
    }

    pub fn sequential(mut self) -> Self {
        self.sequential = true;
        self
    }

    pub fn stop_on_failure(mut self) -> Self {
        self.sequential = true;
        self.stop_on_failure = true;
        self
    }
}

/// Use case for running build tools and aggregating their results
pub struct RunToolsUseCase {
    configs: Arc<ToolConfigManager>,
    builder: Arc<CommandBuilder>,
    runner: Arc<dyn ProcessRunnerPort>,
}

impl RunToolsUseCase {
    pub fn new(
        configs: Arc<ToolConfigManager>,
        builder: Arc<CommandBuilder>,
        runner: Arc<dyn ProcessRunnerPort>,
    ) -> Self {
        Self {
            configs,
            builder,
            runner,
        }
    }

    /// Execute all requested tools and aggregate the outcome.
    pub async fn execute(&self, input: RunToolsInput) -> AggregatedResponse {
        info!("running {} tool(s)", input.requests.len());

        let results = if input.sequential {
            self.run_sequential(input).await
        } else {
            self.run_concurrent(input).await
        };

        aggregate(results)
    }

    async fn run_sequential(&self, input: RunToolsInput) -> Vec<ProcessedResult> {
        let mut results = Vec::with_capacity(input.requests.len());
        for request in input.requests {
            let result = Self::run_one(
                Arc::clone(&self.configs),
                Arc::clone(&self.builder),
                Arc::clone(&self.runner),
                request,
            )
            .await;
            let failed = !result.status.is_success();
            results.push(result);
            if failed && input.stop_on_failure {
                warn!("stopping on first failure; remaining tools were not started");
                break;
            }
        }
        results
    }

    async fn run_concurrent(&self, input: RunToolsInput) -> Vec<ProcessedResult> {
        let mut join_set = JoinSet::new();
        for (index, request) in input.requests.into_iter().enumerate() {
            let configs = Arc::clone(&self.configs);
            let builder = Arc::clone(&self.builder);
            let runner = Arc::clone(&self.runner);
            join_set.spawn(async move {
                (index, Self::run_one(configs, builder, runner, request).await)
            });
        }

        let mut indexed = Vec::new();
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(entry) => indexed.push(entry),
                Err(err) => error!("tool task panicked: {}", err),
            }
        }
        // Report in request order regardless of completion order
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    /// Run a single tool request end to end. Every failure mode becomes a
    /// failed processed result; nothing escapes the aggregate.
    async fn run_one(
        configs: Arc<ToolConfigManager>,
        builder: Arc<CommandBuilder>,
        runner: Arc<dyn ProcessRunnerPort>,
        request: ToolRequest,
    ) -> ProcessedResult {
        let config = match configs.tool_config(&request.tool).await {
            Ok(config) => config,
            Err(err) => {
                error!(tool = request.tool.as_str(), "configuration failed: {}", err);
                return process(&ExecutionResult::refused(
                    &request.tool,
                    &request.action,
                    err.to_string(),
                ));
            }
        };

        if !config.validation.is_valid {
            warn!(
                tool = request.tool.as_str(),
                "refusing to run against an invalid environment"
            );
            return process(&ExecutionResult::refused(
                &request.tool,
                &request.action,
                format!(
                    "environment validation failed: {}",
                    config.validation.errors.join("; ")
                ),
            ));
        }

        let mut options = request.options.clone();
        let mut configured = configs.configured_args(&request.tool);
        configured.extend(options.args);
        options.args = configured;

        let argv = match builder.build(&config, &request.action, &options).await {
            Ok(argv) => argv,
            Err(err) => {
                return process(&ExecutionResult::refused(
                    &request.tool,
                    &request.action,
                    err.to_string(),
                ));
            }
        };

        let working_dir = configs.working_dir(&request.tool);
        match runner
            .run(
                &request.tool,
                &request.action,
                &argv,
                &working_dir,
                config.definition.timeout_ms,
            )
            .await
        {
            Ok(execution) => process(&execution),
            Err(err) => {
                error!(tool = request.tool.as_str(), "spawn failed: {}", err);
                process(&ExecutionResult::refused(
                    &request.tool,
                    &request.action,
                    err.to_string(),
                ))
            }
        }
    }

    /// Terminate all in-flight subprocesses (shutdown or error unwinding)
    pub async fn shutdown(&self) {
        self.runner.terminate_all().await;
    }
}
