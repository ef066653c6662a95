//! Tool domain module
//!
//! Everything the orchestrator knows about invocable tools: the static
//! registry and its definitions, command templates, the semantic type
//! classifier used for unregistered tools, the package manager enumeration,
//! and the value objects produced by execution and validation.

pub mod classify;
pub mod entities;
pub mod manager;
pub mod template;
pub mod value_objects;
