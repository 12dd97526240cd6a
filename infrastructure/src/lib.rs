//! Infrastructure layer for toolgate
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: YAML source/policy file loading and local subprocess
//! execution.

pub mod config;
pub mod exec;

// Re-export commonly used types
pub use config::loader::{ConfigError, load_policy, load_source, load_sources, server_name};
pub use exec::{docker::docker_prefix, local::LocalCommandRunner};
