//! MCP server surface for toolgate.
//!
//! Bridges the active registration surface (discovery or direct) onto the
//! MCP protocol. The handler is a thin shim: tool listing and dispatch
//! semantics live in the application layer so both transports and tests
//! exercise the same code path.

pub mod handler;

pub use handler::GatewayServerHandler;
