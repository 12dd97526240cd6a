//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for toolgate
#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(author, version, about = "Expose any CLI as agent-callable MCP tools via YAML config")]
#[command(long_about = r#"
toolgate reads YAML descriptions of command-line tools and serves them as
MCP tools over stdio.

By default the server exposes only two operations — toolgate_search and
toolgate_invoke — and the agent discovers actions progressively instead of
receiving every definition up front. Pass --direct to expose each action
as its own tool.

Example:
  toolgate git.yaml
  toolgate run git.yaml docker.yaml --policy policy.yaml
  toolgate validate git.yaml
  toolgate list git.yaml docker.yaml
"#)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// YAML source definition file(s); shorthand for `toolgate run ...`
    #[arg(value_name = "CONFIG")]
    pub configs: Vec<PathBuf>,

    /// Path to a YAML policy file
    #[arg(long, value_name = "PATH", global = true)]
    pub policy: Option<PathBuf>,

    /// Expose every action as its own tool instead of the two discovery
    /// operations
    #[arg(long, global = true)]
    pub direct: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the given sources as MCP tools over stdio
    Run {
        /// YAML source definition file(s)
        #[arg(value_name = "CONFIG", required = true)]
        configs: Vec<PathBuf>,
    },
    /// Check that source definition files parse and are well formed
    Validate {
        /// YAML source definition file(s)
        #[arg(value_name = "CONFIG", required = true)]
        configs: Vec<PathBuf>,
    },
    /// Print every action defined by the given sources
    List {
        /// YAML source definition file(s)
        #[arg(value_name = "CONFIG", required = true)]
        configs: Vec<PathBuf>,
    },
}

/// Normalized command after bare-config shorthand is resolved
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    Run(Vec<PathBuf>),
    Validate(Vec<PathBuf>),
    List(Vec<PathBuf>),
}

impl Cli {
    /// Resolve the invoked command; `toolgate config.yaml` behaves exactly
    /// like `toolgate run config.yaml`.
    pub fn action(self) -> CliAction {
        match self.command {
            Some(Commands::Run { configs }) => CliAction::Run(configs),
            Some(Commands::Validate { configs }) => CliAction::Validate(configs),
            Some(Commands::List { configs }) => CliAction::List(configs),
            None => CliAction::Run(self.configs),
        }
    }
}
