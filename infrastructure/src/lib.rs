//! Infrastructure layer for polycheck
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: subprocess execution, package manager detection,
//! filesystem access, and configuration file loading.

pub mod config;
pub mod package_manager;
pub mod process;
pub mod workspace;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileToolConfig};
pub use package_manager::{EmergencyDetection, LockfileDetector};
pub use process::TokioProcessRunner;
pub use workspace::FsWorkspace;
