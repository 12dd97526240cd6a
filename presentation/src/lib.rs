//! Presentation layer for toolgate
//!
//! This crate contains the CLI definitions, the MCP server handler that
//! bridges the active registration surface onto the protocol, and console
//! report formatting for the validate/list commands.

pub mod cli;
pub mod output;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, CliAction, Commands};
pub use output::report;
pub use server::handler::GatewayServerHandler;
