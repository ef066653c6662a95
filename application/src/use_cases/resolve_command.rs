//! Command resolver: turns templates into concrete argument vectors.
//!
//! Literal templates are split and returned as-is. Symbolic package-manager
//! templates are resolved through the primary detection collaborator; when
//! that fails, the resolver walks a fixed fallback chain:
//!
//! 1. retry the collaborator after a fresh initialization,
//! 2. emergency detection (lockfile presence, then PATH probing),
//! 3. npm as the universal last resort (inside the emergency probe).
//!
//! Every outcome, success or any fallback branch, is cached under the
//! `(tool, action, template)` triple so repeated resolutions never repeat
//! the probing work.

use crate::ports::package_manager::{EmergencyProbePort, PackageManagerPort};
use polycheck_domain::{CommandTemplate, PackageManagerAction, split_command};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Resolution failures surfaced to the configuration manager
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("template for '{tool}' action '{action}' resolved to an empty command")]
    EmptyCommand { tool: String, action: String },
}

/// Lazily resolves symbolic command templates, with caching and the
/// cascading fallback chain.
pub struct CommandResolver {
    manager: Arc<dyn PackageManagerPort>,
    emergency: Arc<dyn EmergencyProbePort>,
    cache: Mutex<HashMap<String, Vec<String>>>,
}

impl CommandResolver {
    pub fn new(
        manager: Arc<dyn PackageManagerPort>,
        emergency: Arc<dyn EmergencyProbePort>,
    ) -> Self {
        Self {
            manager,
            emergency,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a template into a concrete argument vector.
    pub async fn resolve(
        &self,
        tool: &str,
        action: &str,
        template: &CommandTemplate,
    ) -> Result<Vec<String>, ResolveError> {
        let key = format!("{}::{}::{}", tool, action, template);
        if let Some(cached) = self.cache.lock().unwrap().get(&key) {
            return Ok(cached.clone());
        }

        let argv = match template {
            CommandTemplate::Literal(command) => split_command(command),
            CommandTemplate::PackageManager(pm_action) => {
                self.resolve_manager_command(*pm_action).await
            }
        };

        if argv.is_empty() {
            return Err(ResolveError::EmptyCommand {
                tool: tool.to_string(),
                action: action.to_string(),
            });
        }

        self.cache.lock().unwrap().insert(key, argv.clone());
        Ok(argv)
    }

    /// Resolve a symbolic package-manager action through the fallback chain.
    async fn resolve_manager_command(&self, action: PackageManagerAction) -> Vec<String> {
        match self.manager.command_for(action).await {
            Ok(argv) => return argv,
            Err(err) => {
                warn!("package manager detection failed: {}", err);
            }
        }

        // Level 1: retry after a fresh initialization
        match self.manager.reinitialize().await {
            Ok(()) => match self.manager.command_for(action).await {
                Ok(argv) => {
                    debug!("detection succeeded after reinitialization");
                    return argv;
                }
                Err(err) => {
                    error!(
                        "package manager detection service failed after reinitialization: {}",
                        err
                    );
                }
            },
            Err(err) => {
                error!("package manager reinitialization failed: {}", err);
            }
        }

        // Level 2/3: emergency detection, npm as the last resort
        let manager = self.emergency.detect().await;
        warn!("emergency detection selected '{}'", manager);
        manager.command(action)
    }

    /// Drop every cached resolution, forcing fresh probing on next use
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::package_manager::PackageManagerError;
    use async_trait::async_trait;
    use polycheck_domain::PackageManager;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counting fake for the primary detection collaborator
    struct FakeManagerPort {
        manager: Option<PackageManager>,
        calls: AtomicUsize,
    }

    impl FakeManagerPort {
        fn detecting(manager: PackageManager) -> Self {
            Self {
                manager: Some(manager),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                manager: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PackageManagerPort for FakeManagerPort {
        async fn manager(&self) -> Result<PackageManager, PackageManagerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.manager
                .ok_or_else(|| PackageManagerError::DetectionFailed("unavailable".into()))
        }

        async fn valid_args(&self, _action: &str) -> Result<Vec<String>, PackageManagerError> {
            Ok(vec![])
        }

        async fn info(&self) -> Result<String, PackageManagerError> {
            Ok("fake".to_string())
        }

        async fn reinitialize(&self) -> Result<(), PackageManagerError> {
            Ok(())
        }
    }

    struct FakeEmergency(PackageManager);

    #[async_trait]
    impl EmergencyProbePort for FakeEmergency {
        async fn detect(&self) -> PackageManager {
            self.0
        }
    }

    fn resolver(port: Arc<FakeManagerPort>, emergency: PackageManager) -> CommandResolver {
        CommandResolver::new(port, Arc::new(FakeEmergency(emergency)))
    }

    #[tokio::test]
    async fn literal_templates_pass_through() {
        let port = Arc::new(FakeManagerPort::detecting(PackageManager::Npm));
        let resolver = resolver(port.clone(), PackageManager::Npm);
        let argv = resolver
            .resolve("tsc", "check", &CommandTemplate::Literal("tsc --noEmit".into()))
            .await
            .unwrap();
        assert_eq!(argv, vec!["tsc", "--noEmit"]);
        // No detection call for literals
        assert_eq!(port.call_count(), 0);
    }

    #[tokio::test]
    async fn symbolic_template_uses_detected_manager() {
        let port = Arc::new(FakeManagerPort::detecting(PackageManager::Pnpm));
        let resolver = resolver(port, PackageManager::Npm);
        let argv = resolver
            .resolve(
                "npm",
                "install",
                &CommandTemplate::PackageManager(PackageManagerAction::Install),
            )
            .await
            .unwrap();
        assert_eq!(argv, vec!["pnpm", "install"]);
    }

    #[tokio::test]
    async fn caching_is_idempotent() {
        let port = Arc::new(FakeManagerPort::detecting(PackageManager::Yarn));
        let resolver = resolver(port.clone(), PackageManager::Npm);
        let template = CommandTemplate::PackageManager(PackageManagerAction::Audit);

        let first = resolver.resolve("npm", "audit", &template).await.unwrap();
        let calls_after_first = port.call_count();
        let second = resolver.resolve("npm", "audit", &template).await.unwrap();

        assert_eq!(first, second);
        // Second resolution must not consult the collaborator again
        assert_eq!(port.call_count(), calls_after_first);
    }

    #[tokio::test]
    async fn clear_cache_forces_fresh_resolution() {
        let port = Arc::new(FakeManagerPort::detecting(PackageManager::Yarn));
        let resolver = resolver(port.clone(), PackageManager::Npm);
        let template = CommandTemplate::PackageManager(PackageManagerAction::Outdated);

        resolver.resolve("npm", "outdated", &template).await.unwrap();
        let calls_after_first = port.call_count();
        resolver.clear_cache();
        assert_eq!(resolver.cached_len(), 0);
        resolver.resolve("npm", "outdated", &template).await.unwrap();

        assert!(port.call_count() > calls_after_first);
    }

    #[tokio::test]
    async fn fallback_chain_reaches_emergency_detection() {
        let port = Arc::new(FakeManagerPort::failing());
        let resolver = resolver(port.clone(), PackageManager::Yarn);
        let argv = resolver
            .resolve(
                "npm",
                "audit",
                &CommandTemplate::PackageManager(PackageManagerAction::Audit),
            )
            .await
            .unwrap();
        assert_eq!(argv, vec!["yarn", "audit"]);
        // Primary was consulted twice: initial attempt + post-reinit retry
        assert_eq!(port.call_count(), 2);
    }

    #[tokio::test]
    async fn fallback_outcome_is_cached_too() {
        let port = Arc::new(FakeManagerPort::failing());
        let resolver = resolver(port.clone(), PackageManager::Pnpm);
        let template = CommandTemplate::PackageManager(PackageManagerAction::Install);

        resolver.resolve("npm", "install", &template).await.unwrap();
        let calls_after_first = port.call_count();
        let argv = resolver.resolve("npm", "install", &template).await.unwrap();

        assert_eq!(argv, vec!["pnpm", "install"]);
        assert_eq!(port.call_count(), calls_after_first);
    }

    #[tokio::test]
    async fn empty_literal_is_an_error() {
        let port = Arc::new(FakeManagerPort::detecting(PackageManager::Npm));
        let resolver = resolver(port, PackageManager::Npm);
        let error = resolver
            .resolve("tsc", "check", &CommandTemplate::Literal("  ".into()))
            .await
            .unwrap_err();
        assert!(error.to_string().contains("empty command"));
    }
}
