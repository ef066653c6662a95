//! Domain layer for polycheck
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools and Actions
//!
//! A *tool* is an external executable (linter, compiler, package manager,
//! bundler) the orchestrator knows how to invoke. An *action* is a named
//! operation of that tool ("install", "check", "build", "audit"). The static
//! [`ToolRegistry`] describes the known tools; unknown tool names are handled
//! by the [`tool::classify`] module, which synthesizes a definition from the
//! tool's semantic type.
//!
//! ## Command Templates
//!
//! Commands are either literal strings or symbolic package-manager templates
//! that must be resolved against the detected manager before execution.
//! [`CommandTemplate`] is a tagged enum, so template dispatch is exhaustive
//! pattern matching rather than string comparison.
//!
//! ## Reports
//!
//! Every execution produces an [`ExecutionResult`], which the reporter turns
//! into a [`ProcessedResult`] with a derived [`ExecutionStatus`]. Multiple
//! processed results reduce into one [`AggregatedResponse`] using the fixed
//! severity ordering `failed > error > warning > passed > pending`.

pub mod core;
pub mod lint;
pub mod report;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use lint::{
    linters::{LinterSpec, known_linters, relevant_linters},
    report::{LintReport, LinterRun},
    scope::LintScope,
};
pub use report::{
    aggregate::{
        AggregatedResponse, ResponseMetadata, SummaryCounts, TimingMetrics, ToolBreakdown,
        aggregate,
    },
    patterns::{ExtractionRules, rules_for},
    process::{ProcessedResult, process},
};
pub use tool::{
    classify::{
        ClassifyError, DefaultClassifier, ToolClassifier, ToolType, classify, fallback_definition,
    },
    entities::{ToolDefinition, ToolRegistry, default_registry},
    manager::PackageManager,
    template::{CommandTemplate, PackageManagerAction},
    value_objects::{
        EnvironmentValidation, ExecutionResult, ExecutionStatus, FileCheck, ResolvedToolConfig,
        TIMEOUT_EXIT_CODE,
    },
};
pub use util::split_command;
