//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use polycheck_domain::LintScope;
use std::path::PathBuf;

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with per-tool details
    Full,
    /// Only the one-line verdict and counts
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for polycheck
#[derive(Parser, Debug)]
#[command(name = "polycheck")]
#[command(author, version, about = "Polyglot QA - orchestrate build tools and linters")]
#[command(long_about = r#"
Polycheck runs build tools (compilers, bundlers, package managers) and
linters across a polyglot repository and aggregates their results into a
single report.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./polycheck.toml    Project-level config
3. ~/.config/polycheck/config.toml   Global config

Example:
  polycheck run tsc npm:audit
  polycheck run npm:install --audit-level high
  polycheck lint --scope frontend
  polycheck tools
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project directory to operate in
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".", global = true)]
    pub directory: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run build tools and aggregate their results
    Run {
        /// Tools to run, as NAME or NAME:ACTION (default action: check)
        #[arg(required = true, value_name = "TOOL[:ACTION]")]
        tools: Vec<String>,

        /// Run tools one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,

        /// Stop at the first failing tool (implies --sequential)
        #[arg(long)]
        stop_on_failure: bool,

        /// Extra argument passed to every tool (can be repeated)
        #[arg(long = "arg", value_name = "ARG")]
        args: Vec<String>,

        /// Minimum severity for package manager audits
        #[arg(long, value_name = "LEVEL")]
        audit_level: Option<String>,

        /// Project file for compiler checks
        #[arg(long, value_name = "PATH")]
        project: Option<String>,

        /// Requirements file for dependency-manager installs
        #[arg(long, value_name = "PATH")]
        requirements: Option<String>,
    },

    /// Lint files directly with the relevant linters
    Lint {
        /// Files to lint; discovered from the scope when omitted
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Discovery scope (frontend, backend, docs, config, tooling, all)
        #[arg(short, long, default_value = "all")]
        scope: LintScope,

        /// Run only this linter
        #[arg(long, value_name = "LINTER")]
        tool: Option<String>,
    },

    /// List available tools and the detected package manager
    Tools,
}

/// Split a `TOOL[:ACTION]` argument, defaulting the action to `check`
pub fn parse_tool_spec(spec: &str) -> (String, String) {
    match spec.split_once(':') {
        Some((tool, action)) if !action.is_empty() => (tool.to_string(), action.to_string()),
        _ => (spec.trim_end_matches(':').to_string(), "check".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_spec_with_action() {
        assert_eq!(
            parse_tool_spec("npm:audit"),
            ("npm".to_string(), "audit".to_string())
        );
    }

    #[test]
    fn tool_spec_defaults_to_check() {
        assert_eq!(
            parse_tool_spec("tsc"),
            ("tsc".to_string(), "check".to_string())
        );
        assert_eq!(
            parse_tool_spec("tsc:"),
            ("tsc".to_string(), "check".to_string())
        );
    }

    #[test]
    fn cli_parses_run_subcommand() {
        let cli = Cli::try_parse_from([
            "polycheck",
            "run",
            "tsc",
            "npm:audit",
            "--audit-level",
            "high",
            "--sequential",
        ])
        .unwrap();
        match cli.command.unwrap() {
            Command::Run {
                tools,
                sequential,
                audit_level,
                ..
            } => {
                assert_eq!(tools, vec!["tsc", "npm:audit"]);
                assert!(sequential);
                assert_eq!(audit_level.as_deref(), Some("high"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn cli_parses_lint_scope() {
        let cli = Cli::try_parse_from(["polycheck", "lint", "--scope", "frontend"]).unwrap();
        match cli.command.unwrap() {
            Command::Lint { scope, files, .. } => {
                assert_eq!(scope, LintScope::Frontend);
                assert!(files.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn invalid_scope_is_rejected() {
        assert!(Cli::try_parse_from(["polycheck", "lint", "--scope", "middleware"]).is_err());
    }
}
