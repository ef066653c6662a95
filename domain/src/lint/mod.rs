//! Direct-lint domain module
//!
//! Scopes group files for discovery; linter specs describe the external
//! linters the direct orchestration path can run and which files each one
//! accepts.

pub mod linters;
pub mod report;
pub mod scope;
