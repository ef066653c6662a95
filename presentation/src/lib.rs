//! Presentation layer for polycheck
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, parse_tool_spec};
pub use output::console::ConsoleFormatter;
