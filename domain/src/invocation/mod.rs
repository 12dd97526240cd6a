//! Invocation domain module
//!
//! Everything between "the agent supplied these arguments" and "this exact
//! subprocess must run": schema generation for discovery, argument
//! validation and coercion, and command-line assembly. All of it is pure —
//! process spawning lives in the infrastructure layer.

pub mod command;
pub mod schema;
pub mod validation;

pub use command::{CommandInvocation, build_invocation};
pub use schema::parameter_schema;
pub use validation::{ArgMap, ArgumentError, validate_arguments};
