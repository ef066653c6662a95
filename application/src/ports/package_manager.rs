//! Package manager detection ports.
//!
//! [`PackageManagerPort`] is the primary detection collaborator: it reports
//! the concrete manager and the manager-appropriate argument vectors for the
//! symbolic install/audit/outdated templates. It is an external service with
//! its own failure modes, which is why [`EmergencyProbePort`] exists: an
//! infallible, dependency-free fallback that must not share any code path
//! with the primary detector.

use async_trait::async_trait;
use polycheck_domain::{PackageManager, PackageManagerAction};
use thiserror::Error;

/// Failures of the primary detection service
#[derive(Debug, Error)]
pub enum PackageManagerError {
    #[error("package manager detection failed: {0}")]
    DetectionFailed(String),

    #[error("no package manager lockfile found")]
    NoLockfile,
}

/// Primary package manager detection collaborator
#[async_trait]
pub trait PackageManagerPort: Send + Sync {
    /// The detected manager
    async fn manager(&self) -> Result<PackageManager, PackageManagerError>;

    /// Concrete argv for a symbolic action under the detected manager
    async fn command_for(
        &self,
        action: PackageManagerAction,
    ) -> Result<Vec<String>, PackageManagerError> {
        Ok(self.manager().await?.command(action))
    }

    /// Flag prefixes the detected manager accepts for the given action
    async fn valid_args(&self, action: &str) -> Result<Vec<String>, PackageManagerError>;

    /// Human-readable description of the detection outcome
    async fn info(&self) -> Result<String, PackageManagerError>;

    /// Drop any cached detection state and probe again on next use
    async fn reinitialize(&self) -> Result<(), PackageManagerError>;
}

/// Emergency detection: filesystem/PATH probing only, never fails, never
/// calls the primary service.
#[async_trait]
pub trait EmergencyProbePort: Send + Sync {
    async fn detect(&self) -> PackageManager;
}
