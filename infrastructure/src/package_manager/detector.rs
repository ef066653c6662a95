//! Primary package manager detection from lockfiles.

use async_trait::async_trait;
use polycheck_application::{PackageManagerError, PackageManagerPort};
use polycheck_domain::PackageManager;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Lockfile probe order. pnpm and yarn projects usually also carry a stale
/// package-lock.json, so the more specific lockfiles win.
const PROBE_ORDER: &[PackageManager] =
    &[PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Npm];

/// Detects the project's package manager from its lockfile.
///
/// Detection runs once and is cached for the process lifetime;
/// `reinitialize` drops the cache so the next call probes again.
pub struct LockfileDetector {
    base_dir: PathBuf,
    cache: Mutex<Option<PackageManager>>,
}

impl LockfileDetector {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: Mutex::new(None),
        }
    }

    async fn probe(&self) -> Result<PackageManager, PackageManagerError> {
        for manager in PROBE_ORDER {
            let lockfile = self.base_dir.join(manager.lockfile());
            if tokio::fs::try_exists(&lockfile).await.unwrap_or(false) {
                debug!("found {}", lockfile.display());
                return Ok(*manager);
            }
        }
        Err(PackageManagerError::NoLockfile)
    }
}

#[async_trait]
impl PackageManagerPort for LockfileDetector {
    async fn manager(&self) -> Result<PackageManager, PackageManagerError> {
        let mut cache = self.cache.lock().await;
        if let Some(manager) = *cache {
            return Ok(manager);
        }
        let manager = self.probe().await?;
        info!("detected package manager: {}", manager);
        *cache = Some(manager);
        Ok(manager)
    }

    async fn valid_args(&self, action: &str) -> Result<Vec<String>, PackageManagerError> {
        let manager = self.manager().await?;
        let flags: &[&str] = match (manager, action) {
            (PackageManager::Npm, "install") => {
                &["--save-dev", "--no-audit", "--legacy-peer-deps", "--production", "--omit"]
            }
            (PackageManager::Yarn, "install") => {
                &["--frozen-lockfile", "--production", "--ignore-engines"]
            }
            (PackageManager::Pnpm, "install") => {
                &["--frozen-lockfile", "--prod", "--no-optional"]
            }
            (PackageManager::Yarn, "audit") => &["--level", "--json", "--groups"],
            (_, "audit") => &["--audit-level", "--json", "--production"],
            (_, "outdated") => &["--json", "--depth", "--long"],
            _ => &[],
        };
        Ok(flags.iter().map(|f| f.to_string()).collect())
    }

    async fn info(&self) -> Result<String, PackageManagerError> {
        let manager = self.manager().await?;
        Ok(format!("{} (via {})", manager, manager.lockfile()))
    }

    async fn reinitialize(&self) -> Result<(), PackageManagerError> {
        *self.cache.lock().await = None;
        debug!("detection cache cleared");
        Ok(())
    }
}
