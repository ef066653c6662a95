//! Use cases

pub mod build_command;
pub mod lint_files;
pub mod resolve_command;
pub mod run_tools;
pub mod tool_config;
pub mod validate_env;
