//! Lint Files use case: the direct-lint path.
//!
//! Bypasses the tool registry entirely: files are gathered (explicit list or
//! scope-bounded discovery), relevant linters are selected by extension scan,
//! each linter runs concurrently over only the files it accepts, and the
//! per-linter outcomes reduce into a single report. A linter whose binary is
//! not on PATH is skipped, never failed.

use crate::ports::process_runner::ProcessRunnerPort;
use crate::ports::workspace::WorkspacePort;
use futures::future::join_all;
use polycheck_domain::{
    DomainError, ExecutionStatus, LintReport, LintScope, LinterRun, LinterSpec, known_linters,
    relevant_linters, rules_for,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

const LINT_TIMEOUT_MS: u64 = 120_000;

/// Input for the LintFiles use case
#[derive(Debug, Clone, Default)]
pub struct LintFilesInput {
    /// Explicit files to lint; when empty, files are discovered by scope
    pub files: Vec<PathBuf>,
    pub scope: LintScope,
    /// Restrict the run to one named linter
    pub tool: Option<String>,
}

impl LintFilesInput {
    pub fn files(files: Vec<PathBuf>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn scope(scope: LintScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }
}

/// Use case for running linters directly over a file set
pub struct LintFilesUseCase {
    workspace: Arc<dyn WorkspacePort>,
    runner: Arc<dyn ProcessRunnerPort>,
    base_dir: PathBuf,
}

impl LintFilesUseCase {
    pub fn new(
        workspace: Arc<dyn WorkspacePort>,
        runner: Arc<dyn ProcessRunnerPort>,
        base_dir: PathBuf,
    ) -> Self {
        Self {
            workspace,
            runner,
            base_dir,
        }
    }

    /// Lint the requested files and reduce the outcomes into one report.
    pub async fn execute(&self, input: LintFilesInput) -> Result<LintReport, DomainError> {
        let files = if input.files.is_empty() {
            self.discover(input.scope).await
        } else {
            input.files
        };
        info!(scope = %input.scope, "linting {} file(s)", files.len());

        let linters = self.select_linters(input.tool.as_deref(), &files)?;
        let mut runs = Vec::with_capacity(linters.len());
        let mut jobs = Vec::new();
        for spec in linters {
            let subset: Vec<PathBuf> = files
                .iter()
                .filter(|file| spec.matches(file))
                .cloned()
                .collect();
            if subset.is_empty() {
                debug!(linter = spec.name, "no matching files; linter not run");
                continue;
            }
            if !self.workspace.binary_available(spec.binary).await {
                warn!(linter = spec.name, "binary not found on PATH; skipping");
                runs.push(LinterRun::skipped(spec.name));
                continue;
            }
            jobs.push(self.run_linter(spec, subset));
        }
        // Linters touch disjoint file subsets, so they all run at once
        runs.extend(join_all(jobs).await);

        Ok(LintReport::from_runs(files.len(), runs))
    }

    /// Scope-bounded file discovery, all roots walked concurrently
    async fn discover(&self, scope: LintScope) -> Vec<PathBuf> {
        let walks = scope.roots().iter().map(|root| {
            let root = self.base_dir.join(root);
            async move {
                self.workspace
                    .discover(&root, scope.extensions(), scope.max_depth())
                    .await
            }
        });
        let mut files: Vec<PathBuf> = join_all(walks).await.into_iter().flatten().collect();
        files.sort();
        files.dedup();
        files
    }

    /// A single named linter, or every linter relevant to the file set
    fn select_linters(
        &self,
        tool: Option<&str>,
        files: &[PathBuf],
    ) -> Result<Vec<&'static LinterSpec>, DomainError> {
        match tool {
            Some(name) => {
                let spec = known_linters()
                    .iter()
                    .find(|spec| spec.name == name)
                    .ok_or_else(|| {
                        DomainError::unknown_tool(
                            name,
                            known_linters().iter().map(|s| s.name.to_string()).collect(),
                        )
                    })?;
                Ok(vec![spec])
            }
            None => Ok(relevant_linters(files)),
        }
    }

    async fn run_linter(&self, spec: &LinterSpec, files: Vec<PathBuf>) -> LinterRun {
        let argv = spec.command(&files);
        let execution = match self
            .runner
            .run(spec.name, "lint", &argv, &self.base_dir, LINT_TIMEOUT_MS)
            .await
        {
            Ok(execution) => execution,
            Err(err) => {
                warn!(linter = spec.name, "failed to launch: {}", err);
                return LinterRun {
                    linter: spec.name.to_string(),
                    files_processed: files.len(),
                    violations: 0,
                    status: ExecutionStatus::Failed,
                    skipped: false,
                };
            }
        };

        // Linters report violations on stdout or stderr depending on the
        // tool; scan both.
        let rules = rules_for(spec.name);
        let combined = format!("{}\n{}", execution.stdout, execution.stderr);
        let warnings = rules.warning_lines(&combined).len();
        let errors = rules.error_lines(&combined).len();
        let status = if !execution.success {
            ExecutionStatus::Failed
        } else if warnings > 0 {
            ExecutionStatus::Warning
        } else {
            ExecutionStatus::Passed
        };

        LinterRun {
            linter: spec.name.to_string(),
            files_processed: files.len(),
            violations: warnings + errors,
            status,
            skipped: false,
        }
    }
}
