//! Application layer for toolgate
//!
//! This crate contains the discovery gateway use cases, the registration
//! surface strategies, and the command-runner port. It depends only on the
//! domain layer.

pub mod gateway;
pub mod ports;

// Re-export commonly used types
pub use gateway::{
    DEFAULT_SEARCH_LIMIT, DEFAULT_TIMEOUT_SECS, DiscoveryGateway, INVOKE_TOOL, SEARCH_TOOL,
    SearchReply, SearchRequest, format_outcome,
    surface::{ActionSurface, DirectSurface, DiscoverySurface, ToolDescriptor},
};
pub use ports::command_runner::{CommandRunnerPort, ExecOutcome, ExecRequest};
