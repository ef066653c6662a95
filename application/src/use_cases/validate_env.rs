//! Environment validator: checks a tool's file prerequisites.

use crate::ports::workspace::WorkspacePort;
use polycheck_domain::{EnvironmentValidation, FileCheck, ToolDefinition};
use std::path::Path;
use std::sync::Arc;

/// Validates tool definitions against the project filesystem.
///
/// Validations for independent tools can run concurrently; within one tool
/// the checks run sequentially since file counts per tool are small.
#[derive(Clone)]
pub struct EnvironmentValidator {
    workspace: Arc<dyn WorkspacePort>,
}

impl EnvironmentValidator {
    pub fn new(workspace: Arc<dyn WorkspacePort>) -> Self {
        Self { workspace }
    }

    /// Check every prerequisite of `definition` relative to `base_dir`.
    ///
    /// A definition with no required files and no alternative groups is
    /// always valid: such tools are scope-gated elsewhere, not file-gated.
    pub async fn validate(
        &self,
        definition: &ToolDefinition,
        base_dir: &Path,
    ) -> EnvironmentValidation {
        let mut validation = EnvironmentValidation::valid();

        for path in &definition.required_files {
            let exists = self.workspace.file_exists(&base_dir.join(path)).await;
            if !exists {
                validation.is_valid = false;
                validation
                    .errors
                    .push(format!("required file missing: {}", path));
            }
            validation.required_files.push(FileCheck::new(path, exists));
        }

        for group in &definition.alternative_files {
            let mut checks = Vec::with_capacity(group.len());
            let mut any_exists = false;
            for path in group {
                let exists = self.workspace.file_exists(&base_dir.join(path)).await;
                any_exists |= exists;
                checks.push(FileCheck::new(path, exists));
            }
            if !any_exists {
                validation.is_valid = false;
                validation.errors.push(format!(
                    "none of the alternative files exist: {}",
                    group.join(", ")
                ));
            }
            validation.alternative_files.push(checks);
        }

        for path in &definition.optional_files {
            let exists = self.workspace.file_exists(&base_dir.join(path)).await;
            validation.optional_files.push(FileCheck::new(path, exists));
        }

        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::path::PathBuf;

    /// Workspace fake scripted with a fixed set of existing paths
    pub(crate) struct FakeWorkspace {
        existing: HashSet<PathBuf>,
    }

    impl FakeWorkspace {
        pub(crate) fn with_files(paths: &[&str]) -> Self {
            Self {
                existing: paths.iter().map(PathBuf::from).collect(),
            }
        }
    }

    #[async_trait]
    impl WorkspacePort for FakeWorkspace {
        async fn file_exists(&self, path: &Path) -> bool {
            self.existing.contains(path)
        }

        async fn discover(
            &self,
            _root: &Path,
            _extensions: &[&str],
            _max_depth: usize,
        ) -> Vec<PathBuf> {
            let mut files: Vec<PathBuf> = self.existing.iter().cloned().collect();
            files.sort();
            files
        }

        async fn binary_available(&self, _name: &str) -> bool {
            true
        }
    }

    fn definition() -> ToolDefinition {
        ToolDefinition::new("tsc", "build").with_required_file("tsconfig.json")
    }

    #[tokio::test]
    async fn all_required_present_is_valid() {
        let validator =
            EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&["tsconfig.json"])));
        let validation = validator.validate(&definition(), Path::new("")).await;
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
        assert!(validation.required_files[0].exists);
    }

    #[tokio::test]
    async fn missing_required_file_invalidates_and_names_it() {
        let validator = EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&[])));
        let validation = validator.validate(&definition(), Path::new("")).await;
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 1);
        assert!(validation.errors[0].contains("tsconfig.json"));
    }

    #[tokio::test]
    async fn alternative_group_needs_one_member() {
        let definition = ToolDefinition::new("pip", "build")
            .with_alternative_group(["requirements.txt", "pyproject.toml"]);

        let validator =
            EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&["pyproject.toml"])));
        let validation = validator.validate(&definition, Path::new("")).await;
        assert!(validation.is_valid);

        let validator = EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&[])));
        let validation = validator.validate(&definition, Path::new("")).await;
        assert!(!validation.is_valid);
        assert!(validation.errors[0].contains("requirements.txt"));
        assert!(validation.errors[0].contains("pyproject.toml"));
    }

    #[tokio::test]
    async fn groups_combine_with_and_semantics() {
        let definition = ToolDefinition::new("demo", "build")
            .with_alternative_group(["a.json", "b.json"])
            .with_alternative_group(["c.json", "d.json"]);

        // First group satisfied, second not
        let validator =
            EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&["a.json"])));
        let validation = validator.validate(&definition, Path::new("")).await;
        assert!(!validation.is_valid);
        assert_eq!(validation.errors.len(), 1);
    }

    #[tokio::test]
    async fn optional_files_never_invalidate() {
        let definition = ToolDefinition::new("vite", "build").with_optional_file("index.html");
        let validator = EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&[])));
        let validation = validator.validate(&definition, Path::new("")).await;
        assert!(validation.is_valid);
        assert!(!validation.optional_files[0].exists);
    }

    #[tokio::test]
    async fn empty_prerequisites_always_valid() {
        let definition = ToolDefinition::new("bare", "build");
        let validator = EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&[])));
        let validation = validator.validate(&definition, Path::new("")).await;
        assert!(validation.is_valid);
    }

    #[tokio::test]
    async fn checks_resolve_against_base_dir() {
        let validator = EnvironmentValidator::new(Arc::new(FakeWorkspace::with_files(&[
            "frontend/tsconfig.json",
        ])));
        let validation = validator
            .validate(&definition(), Path::new("frontend"))
            .await;
        assert!(validation.is_valid);
    }
}
