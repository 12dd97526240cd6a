//! Configuration file loading for toolgate
//!
//! Source definitions and policies are plain YAML files named on the
//! command line; there is no layered app-config discovery. Validation
//! beyond YAML well-formedness (docker image presence, constraint pattern
//! syntax) happens here at load time so the server never starts on a bad
//! configuration.

pub mod loader;

pub use loader::{ConfigError, load_policy, load_source, load_sources, server_name};
