//! Emergency package manager detection.
//!
//! Used only when the primary detector has already failed twice. Probes the
//! filesystem first, then PATH, and unconditionally falls back to npm. This
//! path never fails and never consults the primary detector.

use async_trait::async_trait;
use polycheck_application::EmergencyProbePort;
use polycheck_domain::PackageManager;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Filesystem probe order for the emergency path. Yarn first: historically
/// the most common manager in repositories where primary detection breaks.
const LOCKFILE_ORDER: &[PackageManager] =
    &[PackageManager::Yarn, PackageManager::Pnpm, PackageManager::Npm];

/// PATH probe order when no lockfile exists at all
const BINARY_ORDER: &[PackageManager] = &[PackageManager::Yarn, PackageManager::Pnpm];

/// Standalone last-resort detection from lockfiles and PATH
pub struct EmergencyDetection {
    base_dir: PathBuf,
    search_path: Option<OsString>,
}

impl EmergencyDetection {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            search_path: None,
        }
    }

    /// Restrict the binary probe to an explicit search path instead of the
    /// process environment's PATH
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// First manager in [`BINARY_ORDER`] whose binary is installed. The
    /// probe walks PATH entries on disk, so it runs off the async runtime.
    async fn binary_on_path(&self) -> Option<PackageManager> {
        let search_path = self.search_path.clone();
        let cwd = self.base_dir.clone();
        tokio::task::spawn_blocking(move || {
            BINARY_ORDER.iter().copied().find(|manager| match &search_path {
                Some(paths) => which::which_in(manager.as_str(), Some(paths), &cwd).is_ok(),
                None => which::which(manager.as_str()).is_ok(),
            })
        })
        .await
        .unwrap_or(None)
    }
}

#[async_trait]
impl EmergencyProbePort for EmergencyDetection {
    async fn detect(&self) -> PackageManager {
        for manager in LOCKFILE_ORDER {
            let lockfile = self.base_dir.join(manager.lockfile());
            if tokio::fs::try_exists(&lockfile).await.unwrap_or(false) {
                warn!(
                    "emergency detection: {} present, using {}",
                    manager.lockfile(),
                    manager
                );
                return *manager;
            }
        }

        if let Some(manager) = self.binary_on_path().await {
            warn!("emergency detection: no lockfile, {} found on PATH", manager);
            return manager;
        }

        debug!("emergency detection exhausted, defaulting to npm");
        PackageManager::Npm
    }
}
