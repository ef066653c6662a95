//! Real filesystem implementation of the workspace port.

use async_trait::async_trait;
use polycheck_application::WorkspacePort;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tracing::debug;

/// Directories never descended into during discovery
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "dist", "build", "__pycache__"];

/// Workspace adapter over `tokio::fs`
pub struct FsWorkspace;

impl FsWorkspace {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || SKIPPED_DIRS.contains(&name)
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|c| c.eq_ignore_ascii_case(ext)))
}

// Async recursion needs boxing
fn walk<'a>(
    dir: PathBuf,
    extensions: &'a [&'a str],
    depth: usize,
    found: &'a mut Vec<PathBuf>,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        let Ok(mut entries) = tokio::fs::read_dir(&dir).await else {
            return;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if is_skipped(name) {
                continue;
            }
            let Ok(file_type) = entry.file_type().await else {
                continue;
            };
            if file_type.is_dir() {
                if depth > 1 {
                    walk(path, extensions, depth - 1, found).await;
                }
            } else if file_type.is_file() && matches_extension(&path, extensions) {
                found.push(path);
            }
        }
    })
}

#[async_trait]
impl WorkspacePort for FsWorkspace {
    async fn file_exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn discover(&self, root: &Path, extensions: &[&str], max_depth: usize) -> Vec<PathBuf> {
        if max_depth == 0 {
            return Vec::new();
        }
        let mut found = Vec::new();
        walk(root.to_path_buf(), extensions, max_depth, &mut found).await;
        found.sort();
        debug!("discovered {} file(s) under {}", found.len(), root.display());
        found
    }

    async fn binary_available(&self, name: &str) -> bool {
        // which scans PATH entries on disk; keep that off the async runtime
        let name = name.to_string();
        tokio::task::spawn_blocking(move || which::which(name).is_ok())
            .await
            .unwrap_or(false)
    }
}
