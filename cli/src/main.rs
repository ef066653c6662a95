//! CLI entrypoint for polycheck
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use polycheck_application::{
    CommandBuilder, CommandOptions, CommandResolver, EnvironmentValidator, LintFilesInput,
    LintFilesUseCase, OrchestrationConfig, PackageManagerPort, ProcessRunnerPort, RunToolsInput,
    RunToolsUseCase, ToolConfigManager, ToolRequest, WorkspacePort,
};
use polycheck_domain::{DefaultClassifier, default_registry};
use polycheck_infrastructure::{
    ConfigLoader, EmergencyDetection, FsWorkspace, LockfileDetector, TokioProcessRunner,
};
use polycheck_presentation::{Cli, Command, ConsoleFormatter, OutputFormat, parse_tool_spec};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("No command given. Try 'polycheck run tsc' or 'polycheck lint'.");
    };

    // Load configuration
    let config: OrchestrationConfig = if cli.no_config {
        ConfigLoader::load_defaults().into()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
            .into()
    };

    let base_dir = cli.directory.clone();
    info!("operating in {}", base_dir.display());

    // === Dependency Injection ===
    let manager: Arc<dyn PackageManagerPort> = Arc::new(LockfileDetector::new(base_dir.clone()));
    let emergency = Arc::new(EmergencyDetection::new(base_dir.clone()));
    let workspace: Arc<dyn WorkspacePort> = Arc::new(FsWorkspace::new());
    let runner: Arc<dyn ProcessRunnerPort> = Arc::new(TokioProcessRunner::new());

    let resolver = Arc::new(CommandResolver::new(manager.clone(), emergency));
    let validator = EnvironmentValidator::new(workspace.clone());
    let configs = Arc::new(ToolConfigManager::new(
        default_registry(),
        Box::new(DefaultClassifier),
        resolver,
        validator,
        manager.clone(),
        config,
        base_dir.clone(),
    ));
    let builder = Arc::new(CommandBuilder::new(manager.clone()));

    match command {
        Command::Run {
            tools,
            sequential,
            stop_on_failure,
            args,
            audit_level,
            project,
            requirements,
        } => {
            let options = CommandOptions {
                args,
                audit_level,
                project,
                requirements,
            };
            let requests: Vec<ToolRequest> = tools
                .iter()
                .map(|spec| {
                    let (tool, action) = parse_tool_spec(spec);
                    ToolRequest::new(tool, action).with_options(options.clone())
                })
                .collect();

            if !cli.quiet {
                let names: Vec<String> = requests
                    .iter()
                    .map(|r| format!("{}:{}", r.tool, r.action))
                    .collect();
                println!("Running: {}", names.join(", "));
            }

            let mut input = RunToolsInput::new(requests);
            if stop_on_failure {
                input = input.stop_on_failure();
            } else if sequential {
                input = input.sequential();
            }

            let use_case = RunToolsUseCase::new(configs, builder, runner);
            let response = use_case.execute(input).await;

            let output = match cli.output {
                OutputFormat::Full => ConsoleFormatter::format(&response),
                OutputFormat::Summary => ConsoleFormatter::format_summary(&response),
                OutputFormat::Json => ConsoleFormatter::format_json(&response),
            };
            println!("{}", output);

            if !response.success {
                std::process::exit(1);
            }
        }

        Command::Lint { files, scope, tool } => {
            let use_case = LintFilesUseCase::new(workspace, runner, base_dir);
            let report = use_case
                .execute(LintFilesInput { files, scope, tool })
                .await?;

            let output = match cli.output {
                OutputFormat::Full | OutputFormat::Summary => ConsoleFormatter::format_lint(&report),
                OutputFormat::Json => ConsoleFormatter::format_lint_json(&report),
            };
            println!("{}", output);

            if !report.success {
                std::process::exit(1);
            }
        }

        Command::Tools => {
            match manager.info().await {
                Ok(info) => println!("Package manager: {}", info),
                Err(e) => println!("Package manager: not detected ({})", e),
            }
            println!("Available tools:");
            for tool in configs.available_tools().await {
                println!("  {}", tool);
            }
        }
    }

    Ok(())
}
