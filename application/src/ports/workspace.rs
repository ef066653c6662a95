//! Workspace (filesystem) port.
//!
//! Read-only existence checks and bounded file discovery. The orchestration
//! subsystem never writes through this port.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Port for project filesystem queries
#[async_trait]
pub trait WorkspacePort: Send + Sync {
    /// Whether the given path exists
    async fn file_exists(&self, path: &Path) -> bool;

    /// Recursively list files under `root` up to `max_depth`, keeping only
    /// files whose extension is in `extensions` (empty slice = any file)
    async fn discover(&self, root: &Path, extensions: &[&str], max_depth: usize) -> Vec<PathBuf>;

    /// Whether an executable with the given name is available on PATH
    async fn binary_available(&self, name: &str) -> bool;
}
