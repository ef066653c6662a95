//! Command builder: turns a resolved configuration, action, and options
//! into a safely filtered argument vector.
//!
//! Caller-supplied flags are checked against two rules before they reach the
//! command line: a flag already present in the base command is dropped
//! (duplicate prevention), and a flag outside the tool/action whitelist is
//! dropped (unknown-flag prevention). Positional arguments always pass.

use crate::ports::package_manager::PackageManagerPort;
use polycheck_domain::{
    DomainError, PackageManager, ResolvedToolConfig, ToolType, classify,
};
use std::sync::Arc;
use tracing::warn;

/// Caller-supplied execution options
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Extra arguments, filtered against the whitelist
    pub args: Vec<String>,
    /// Audit severity level, translated to the manager-appropriate flag
    pub audit_level: Option<String>,
    /// Compiler project file, appended as `--project <path>` on check
    pub project: Option<String>,
    /// Requirements file for dependency-manager installs (`-r <path>`)
    pub requirements: Option<String>,
}

/// Builds final argument vectors with flag filtering and derived arguments.
pub struct CommandBuilder {
    manager: Arc<dyn PackageManagerPort>,
}

impl CommandBuilder {
    pub fn new(manager: Arc<dyn PackageManagerPort>) -> Self {
        Self { manager }
    }

    /// Build the argument vector for one tool/action invocation.
    pub async fn build(
        &self,
        config: &ResolvedToolConfig,
        action: &str,
        options: &CommandOptions,
    ) -> Result<Vec<String>, DomainError> {
        let tool = &config.definition.name;
        let mut argv = config
            .command(action)
            .cloned()
            .ok_or_else(|| DomainError::unknown_action(tool, action))?;

        let whitelist = self.valid_flags(tool, action).await;
        for arg in &options.args {
            if !arg.starts_with('-') {
                argv.push(arg.clone());
                continue;
            }
            let flag = flag_name(arg);
            if argv.iter().any(|existing| flag_name(existing) == flag) {
                warn!(tool = tool.as_str(), flag, "dropping duplicate flag");
                continue;
            }
            if !whitelist.iter().any(|allowed| flag == allowed) {
                warn!(tool = tool.as_str(), flag, "dropping unrecognized flag");
                continue;
            }
            argv.push(arg.clone());
        }

        self.append_derived(&mut argv, tool, action, options).await;
        Ok(argv)
    }

    /// Tool-specific arguments derived from options rather than passed
    /// verbatim.
    async fn append_derived(
        &self,
        argv: &mut Vec<String>,
        tool: &str,
        action: &str,
        options: &CommandOptions,
    ) {
        match classify(tool) {
            ToolType::PackageManager => {
                if action == "audit"
                    && let Some(level) = &options.audit_level
                {
                    // The flag name follows the manager actually invoked,
                    // which after fallback resolution may differ from the
                    // requested tool name.
                    let manager = argv
                        .first()
                        .and_then(|bin| bin.parse::<PackageManager>().ok())
                        .unwrap_or(PackageManager::Npm);
                    let flag = manager.audit_level_flag();
                    if !argv.iter().any(|existing| flag_name(existing) == flag) {
                        argv.push(format!("{}={}", flag, level));
                    }
                }
            }
            ToolType::Compiler => {
                if action == "check"
                    && let Some(project) = &options.project
                    && !argv.iter().any(|existing| flag_name(existing) == "--project")
                {
                    argv.push("--project".to_string());
                    argv.push(project.clone());
                }
            }
            ToolType::DependencyManager => {
                if action == "install"
                    && let Some(requirements) = &options.requirements
                    && !argv.iter().any(|existing| existing == "-r")
                {
                    argv.push("-r".to_string());
                    argv.push(requirements.clone());
                }
            }
            ToolType::Bundler | ToolType::Unknown => {}
        }
    }

    /// Whitelist of recognized flag names for a tool/action pair. Package
    /// manager actions ask the detection collaborator; everything else uses
    /// the static family tables.
    async fn valid_flags(&self, tool: &str, action: &str) -> Vec<String> {
        if classify(tool) == ToolType::PackageManager
            && let Ok(args) = self.manager.valid_args(action).await
            && !args.is_empty()
        {
            return args;
        }
        static_flags(tool, action)
            .iter()
            .map(|flag| flag.to_string())
            .collect()
    }
}

/// The flag name portion of an argument (`--audit-level=high` → `--audit-level`)
fn flag_name(arg: &str) -> &str {
    arg.split('=').next().unwrap_or(arg)
}

fn static_flags(tool: &str, action: &str) -> &'static [&'static str] {
    match (classify(tool), action) {
        (ToolType::PackageManager, "install") => &[
            "--save-dev",
            "--frozen-lockfile",
            "--no-audit",
            "--legacy-peer-deps",
            "--production",
        ],
        (ToolType::PackageManager, "audit") => {
            &["--audit-level", "--level", "--json", "--production"]
        }
        (ToolType::PackageManager, "outdated") => &["--json", "--depth"],
        (ToolType::Compiler, _) => {
            &["--project", "--noEmit", "--strict", "--pretty", "--incremental"]
        }
        (ToolType::Bundler, _) => &["--mode", "--config", "--outDir", "--base"],
        (ToolType::DependencyManager, "install") => {
            &["-r", "--requirement", "--upgrade", "--user", "--quiet"]
        }
        (ToolType::DependencyManager, _) => &["--quiet"],
        _ => &["--help", "--version"],
    }
}
