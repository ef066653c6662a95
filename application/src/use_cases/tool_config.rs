//! Build configuration manager.
//!
//! Owns the registry of known build tools, merges it with user overrides,
//! and produces fully resolved tool configurations (concrete commands plus
//! a fresh environment validation). Configurations are computed lazily per
//! tool name and cached for the process lifetime.

use crate::config::OrchestrationConfig;
use crate::ports::package_manager::PackageManagerPort;
use crate::use_cases::resolve_command::CommandResolver;
use crate::use_cases::validate_env::EnvironmentValidator;
use polycheck_domain::{
    DomainError, ResolvedToolConfig, ToolClassifier, ToolRegistry, ToolType, fallback_definition,
    split_command,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Lazily builds and caches resolved tool configurations.
pub struct ToolConfigManager {
    registry: ToolRegistry,
    classifier: Box<dyn ToolClassifier>,
    resolver: Arc<CommandResolver>,
    validator: EnvironmentValidator,
    manager: Arc<dyn PackageManagerPort>,
    config: OrchestrationConfig,
    base_dir: PathBuf,
    cache: Mutex<HashMap<String, ResolvedToolConfig>>,
}

impl ToolConfigManager {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: ToolRegistry,
        classifier: Box<dyn ToolClassifier>,
        resolver: Arc<CommandResolver>,
        validator: EnvironmentValidator,
        manager: Arc<dyn PackageManagerPort>,
        config: OrchestrationConfig,
        base_dir: PathBuf,
    ) -> Self {
        Self {
            registry,
            classifier,
            resolver,
            validator,
            manager,
            config,
            base_dir,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get (building if necessary) the resolved configuration for a tool.
    ///
    /// Unregistered tool names go through the classifier; an unclassifiable
    /// name is a configuration error naming all known tools. An invalid
    /// environment does not fail the build; invalidity is surfaced in the
    /// returned configuration for the executor to act on.
    pub async fn tool_config(&self, name: &str) -> Result<ResolvedToolConfig, DomainError> {
        if let Some(cached) = self.cache.lock().unwrap().get(name) {
            return Ok(cached.clone());
        }

        let mut definition = match self.registry.get(name) {
            Some(found) => found.clone(),
            None => match self.classifier.synthesize(name) {
                Ok(synthesized) => {
                    debug!(
                        tool = name,
                        kind = %self.classifier.classify(name),
                        "tool not in registry; synthesized definition from classification"
                    );
                    synthesized
                }
                Err(err) => {
                    if self.classifier.classify(name) == ToolType::Unknown {
                        return Err(DomainError::unknown_tool(name, self.registry.names()));
                    }
                    // Degraded mode: the classifier recognized the tool but
                    // could not produce a template.
                    warn!(
                        tool = name,
                        "classification failed ({}); using minimal install/check fallback", err
                    );
                    fallback_definition(name)
                }
            },
        };

        let overrides = self.config.tool(name);
        if let Some(timeout_ms) = overrides.and_then(|o| o.timeout_ms) {
            definition.timeout_ms = timeout_ms;
        }

        let mut commands = HashMap::new();
        for (action, template) in &definition.command_templates {
            match self.resolver.resolve(&definition.name, action, template).await {
                Ok(argv) => {
                    commands.insert(action.clone(), argv);
                }
                Err(err) => {
                    // Partial degradation beats total failure: fall back to
                    // the raw template text for this one action.
                    warn!(
                        tool = name,
                        action = action.as_str(),
                        "resolution failed ({}); falling back to raw template", err
                    );
                    commands.insert(action.clone(), split_command(&template.to_string()));
                }
            }
        }

        // User-supplied command overrides win over resolved commands
        if let Some(overrides) = overrides {
            for (action, command) in &overrides.commands {
                commands.insert(action.clone(), split_command(command));
            }
        }

        let working_dir = overrides
            .and_then(|o| o.working_dir.as_ref())
            .map(|dir| self.base_dir.join(dir))
            .unwrap_or_else(|| self.base_dir.clone());
        let validation = self.validator.validate(&definition, &working_dir).await;

        let resolved = ResolvedToolConfig {
            definition,
            commands,
            validation,
        };
        self.cache
            .lock()
            .unwrap()
            .insert(name.to_string(), resolved.clone());
        Ok(resolved)
    }

    /// Concrete argument vector for one tool/action pair
    pub async fn command(&self, tool: &str, action: &str) -> Result<Vec<String>, DomainError> {
        let config = self.tool_config(tool).await?;
        config
            .command(action)
            .cloned()
            .ok_or_else(|| DomainError::unknown_action(tool, action))
    }

    /// Names of the available tools.
    ///
    /// Reports the actually-detected package manager in place of the generic
    /// "npm" registry entry when detection succeeds; falls back to the plain
    /// registry list otherwise.
    pub async fn available_tools(&self) -> Vec<String> {
        let mut names = self.registry.names();
        if let Ok(manager) = self.manager.manager().await {
            for name in &mut names {
                if name == "npm" {
                    *name = manager.as_str().to_string();
                }
            }
            names.sort();
            names.dedup();
        }
        names
    }

    /// The working directory configured for a tool (project root unless
    /// overridden)
    pub fn working_dir(&self, tool: &str) -> PathBuf {
        self.config
            .tool(tool)
            .and_then(|o| o.working_dir.as_ref())
            .map(|dir| self.base_dir.join(dir))
            .unwrap_or_else(|| self.base_dir.clone())
    }

    /// Extra arguments configured for a tool
    pub fn configured_args(&self, tool: &str) -> Vec<String> {
        self.config
            .tool(tool)
            .map(|o| o.args.clone())
            .unwrap_or_default()
    }

    /// Drop all cached configurations, cascading to the resolver cache and
    /// the detection collaborator's own cache.
    pub async fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
        self.resolver.clear_cache();
        if let Err(err) = self.manager.reinitialize().await {
            warn!("package manager reinitialization failed during cache clear: {}", err);
        }
    }
}
