//! Tool domain entities

use super::template::{CommandTemplate, PackageManagerAction};
use std::collections::HashMap;

/// Default per-execution timeout when a definition does not override it
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Static description of an invocable tool.
///
/// Definitions come from the built-in registry (or are synthesized by the
/// classifier for unregistered names) and are immutable once registered.
/// File prerequisites use OR semantics within an alternative group and AND
/// semantics across groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "tsc")
    pub name: String,
    /// Category tag (e.g., "build")
    pub dimension: String,
    /// Action name → command template
    pub command_templates: HashMap<String, CommandTemplate>,
    /// Paths that must all exist for the tool to be usable
    pub required_files: Vec<String>,
    /// Groups of paths; at least one member of each group must exist
    pub alternative_files: Vec<Vec<String>>,
    /// Paths whose presence is recorded but never required
    pub optional_files: Vec<String>,
    /// Maximum execution duration in milliseconds
    pub timeout_ms: u64,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, dimension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimension: dimension.into(),
            command_templates: HashMap::new(),
            required_files: Vec::new(),
            alternative_files: Vec::new(),
            optional_files: Vec::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_command(mut self, action: impl Into<String>, template: CommandTemplate) -> Self {
        self.command_templates.insert(action.into(), template);
        self
    }

    pub fn with_required_file(mut self, path: impl Into<String>) -> Self {
        self.required_files.push(path.into());
        self
    }

    pub fn with_alternative_group(
        mut self,
        group: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.alternative_files
            .push(group.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_optional_file(mut self, path: impl Into<String>) -> Self {
        self.optional_files.push(path.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn template(&self, action: &str) -> Option<&CommandTemplate> {
        self.command_templates.get(action)
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.command_templates.keys().map(|s| s.as_str())
    }
}

/// Registry of known build tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    /// Sorted tool names, used for listings and error messages
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Build the static registry of known build tools.
///
/// Package-manager actions are symbolic and resolved against the detected
/// manager; everything else is literal.
pub fn default_registry() -> ToolRegistry {
    ToolRegistry::new()
        .register(
            ToolDefinition::new("npm", "build")
                .with_command(
                    "install",
                    CommandTemplate::PackageManager(PackageManagerAction::Install),
                )
                .with_command(
                    "audit",
                    CommandTemplate::PackageManager(PackageManagerAction::Audit),
                )
                .with_command(
                    "outdated",
                    CommandTemplate::PackageManager(PackageManagerAction::Outdated),
                )
                .with_required_file("package.json")
                .with_optional_file("package-lock.json")
                .with_optional_file("yarn.lock")
                .with_optional_file("pnpm-lock.yaml")
                .with_timeout_ms(300_000),
        )
        .register(
            ToolDefinition::new("tsc", "build")
                .with_command("check", CommandTemplate::Literal("tsc --noEmit".into()))
                .with_command("build", CommandTemplate::Literal("tsc".into()))
                .with_required_file("tsconfig.json")
                .with_timeout_ms(120_000),
        )
        .register(
            ToolDefinition::new("vite", "build")
                .with_command("build", CommandTemplate::Literal("vite build".into()))
                .with_alternative_group([
                    "vite.config.js",
                    "vite.config.ts",
                    "vite.config.mjs",
                ])
                .with_optional_file("index.html")
                .with_timeout_ms(180_000),
        )
        .register(
            ToolDefinition::new("pip", "build")
                .with_command(
                    "install",
                    CommandTemplate::Literal("pip install -r requirements.txt".into()),
                )
                .with_command("check", CommandTemplate::Literal("pip check".into()))
                .with_alternative_group(["requirements.txt", "pyproject.toml", "setup.py"])
                .with_timeout_ms(300_000),
        )
}
