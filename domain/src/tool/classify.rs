//! Tool type classification.
//!
//! When a tool name is not present in the static registry, the classifier
//! picks a semantic type for it and synthesizes a definition, so new tools
//! of a known shape work without a registry change. Classification is
//! deterministic and side-effect free.

use super::entities::ToolDefinition;
use super::template::{CommandTemplate, PackageManagerAction};
use thiserror::Error;

/// Semantic type of a tool name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolType {
    PackageManager,
    Compiler,
    Bundler,
    DependencyManager,
    Unknown,
}

impl ToolType {
    pub fn as_str(&self) -> &str {
        match self {
            ToolType::PackageManager => "package-manager",
            ToolType::Compiler => "compiler",
            ToolType::Bundler => "bundler",
            ToolType::DependencyManager => "dependency-manager",
            ToolType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a tool name into its semantic type
pub fn classify(name: &str) -> ToolType {
    match name {
        "npm" | "yarn" | "pnpm" | "bun" => ToolType::PackageManager,
        "tsc" | "typescript" | "babel" | "swc" => ToolType::Compiler,
        "vite" | "webpack" | "rollup" | "esbuild" | "parcel" => ToolType::Bundler,
        "pip" | "pip3" | "poetry" | "uv" | "pipenv" => ToolType::DependencyManager,
        _ => ToolType::Unknown,
    }
}

/// Error raised when a name cannot be classified into a usable template
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("cannot classify tool '{0}' into a known type")]
    Unclassifiable(String),
}

/// Classifier seam. The configuration manager consults this when a tool is
/// missing from the registry; substituting a faulty implementation in tests
/// exercises the degraded-mode fallback.
pub trait ToolClassifier: Send + Sync {
    fn classify(&self, name: &str) -> ToolType;

    /// Synthesize a definition for an unregistered tool name
    fn synthesize(&self, name: &str) -> Result<ToolDefinition, ClassifyError>;
}

/// Name-table based classifier used in production
pub struct DefaultClassifier;

impl ToolClassifier for DefaultClassifier {
    fn classify(&self, name: &str) -> ToolType {
        classify(name)
    }

    fn synthesize(&self, name: &str) -> Result<ToolDefinition, ClassifyError> {
        let definition = match classify(name) {
            ToolType::PackageManager => ToolDefinition::new(name, "build")
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
                .with_timeout_ms(300_000),
            ToolType::Compiler => ToolDefinition::new(name, "build")
                .with_command(
                    "check",
                    CommandTemplate::Literal(format!("{} --noEmit", name)),
                )
                .with_command("build", CommandTemplate::Literal(name.to_string()))
                .with_timeout_ms(120_000),
            ToolType::Bundler => ToolDefinition::new(name, "build")
                .with_command("build", CommandTemplate::Literal(format!("{} build", name)))
                .with_timeout_ms(180_000),
            ToolType::DependencyManager => ToolDefinition::new(name, "build")
                .with_command(
                    "install",
                    CommandTemplate::Literal(format!("{} install", name)),
                )
                .with_command("check", CommandTemplate::Literal(format!("{} check", name)))
                .with_timeout_ms(300_000),
            ToolType::Unknown => return Err(ClassifyError::Unclassifiable(name.to_string())),
        };
        Ok(definition)
    }
}

/// Hardcoded minimal definition used when a classifier fails for a name it
/// claims to recognize. Only install and check are available.
pub fn fallback_definition(name: &str) -> ToolDefinition {
    ToolDefinition::new(name, "build")
        .with_command(
            "install",
            CommandTemplate::Literal(format!("{} install", name)),
        )
        .with_command(
            "check",
            CommandTemplate::Literal(format!("{} --version", name)),
        )
}
