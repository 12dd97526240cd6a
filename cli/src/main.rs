//! CLI entrypoint for toolgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tracing::info;
use tracing_subscriber::EnvFilter;

use toolgate_application::gateway::surface::{ActionSurface, DirectSurface, DiscoverySurface};
use toolgate_application::gateway::DiscoveryGateway;
use toolgate_domain::catalog::index::ActionIndex;
use toolgate_domain::policy::apply::{PolicyOutcome, apply_policy};
use toolgate_infrastructure::config::loader::{load_policy, load_source, load_sources, server_name};
use toolgate_infrastructure::exec::docker::docker_prefix;
use toolgate_infrastructure::exec::local::LocalCommandRunner;
use toolgate_presentation::cli::commands::{Cli, CliAction};
use toolgate_presentation::output::report;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level. Everything goes to
    // stderr: stdout belongs to the MCP stdio transport.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let policy_path = cli.policy.clone();
    let direct = cli.direct;

    match cli.action() {
        CliAction::Validate(configs) => std::process::exit(cmd_validate(&configs)),
        CliAction::List(configs) => std::process::exit(cmd_list(&configs)?),
        CliAction::Run(configs) => run_server(configs, policy_path, direct).await,
    }
}

/// Validate each config file, printing one line per file.
fn cmd_validate(configs: &[PathBuf]) -> i32 {
    let mut valid = 0usize;
    let mut invalid = 0usize;

    for path in configs {
        match load_source(path) {
            Ok(source) => {
                valid += 1;
                println!("{}", report::source_ok_line(path, &source));
            }
            Err(err) => {
                invalid += 1;
                println!("{}", report::source_error_line(path, &err));
            }
        }
    }

    println!();
    println!("{}", report::validate_summary(valid, invalid));
    if invalid == 0 { 0 } else { 1 }
}

/// Print every action across the given configs.
fn cmd_list(configs: &[PathBuf]) -> Result<i32> {
    let sources = match load_sources(configs) {
        Ok(sources) => sources,
        Err(err) => {
            eprintln!("{err}");
            return Ok(1);
        }
    };
    println!("{}", report::action_listing(&sources));
    Ok(0)
}

/// Load everything, build the index once, and serve MCP over stdio.
async fn run_server(configs: Vec<PathBuf>, policy: Option<PathBuf>, direct: bool) -> Result<()> {
    if configs.is_empty() {
        bail!("at least one config file is required; see `toolgate --help`");
    }

    let sources = load_sources(&configs).context("Failed to load source definitions")?;
    let name = server_name(&sources);

    // Policy narrows the sources before the index exists, so every view of
    // the catalog agrees on what is callable.
    let (sources, constraints, executor) = match policy {
        Some(path) => {
            let policy = load_policy(&path).context("Failed to load policy")?;
            let PolicyOutcome { sources, constraints } = apply_policy(sources, &policy);
            (sources, constraints, policy.executor)
        }
        None => (sources, Default::default(), Default::default()),
    };

    let index = Arc::new(ActionIndex::from_sources(&sources));
    info!(server = %name, actions = index.len(), sources = sources.len(), "Index built");

    let prefix = docker_prefix(&executor);
    let runner = Arc::new(if prefix.is_empty() {
        LocalCommandRunner::new()
    } else {
        LocalCommandRunner::with_prefix(prefix)
    });

    let gateway =
        Arc::new(DiscoveryGateway::new(index, runner).with_constraints(constraints));
    let surface: Arc<dyn ActionSurface> = if direct {
        Arc::new(DirectSurface::new(gateway))
    } else {
        Arc::new(DiscoverySurface::new(gateway))
    };

    let handler = toolgate_presentation::server::handler::GatewayServerHandler::new(name, surface);

    info!("Serving on stdio");
    let service = handler.serve(stdio()).await.context("Failed to start MCP service")?;
    service.waiting().await?;
    info!("Server shutdown complete");

    Ok(())
}
