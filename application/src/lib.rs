//! Application layer for polycheck
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.
//!
//! The orchestration pipeline: the [`ToolConfigManager`] builds a resolved
//! configuration per tool (consulting the [`CommandResolver`] and the
//! environment validator), the [`CommandBuilder`] turns it into a safe
//! argument vector, and [`RunToolsUseCase`] executes everything through the
//! [`ProcessRunnerPort`] and aggregates the report. [`LintFilesUseCase`] is
//! the lighter direct-lint path that bypasses the registry machinery.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{OrchestrationConfig, ToolOverride};
pub use ports::{
    package_manager::{EmergencyProbePort, PackageManagerError, PackageManagerPort},
    process_runner::{ProcessError, ProcessRunnerPort},
    workspace::WorkspacePort,
};
pub use use_cases::build_command::{CommandBuilder, CommandOptions};
pub use use_cases::lint_files::{LintFilesInput, LintFilesUseCase};
pub use use_cases::resolve_command::{CommandResolver, ResolveError};
pub use use_cases::run_tools::{RunToolsInput, RunToolsUseCase, ToolRequest};
pub use use_cases::tool_config::ToolConfigManager;
pub use use_cases::validate_env::EnvironmentValidator;
