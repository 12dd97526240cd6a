//! Domain layer for toolgate
//!
//! This crate contains the core business logic: declarative source/action
//! definitions, the discovery catalog, argument validation and coercion,
//! command-line assembly, and the policy model. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Sources and Actions
//!
//! A **source** describes one CLI (base command, env, working directory)
//! and the **actions** it contributes — named subcommands with typed
//! parameters. Sources are authored as YAML and loaded by the
//! infrastructure layer.
//!
//! ## Discovery
//!
//! All actions from all sources are folded into a single immutable
//! [`ActionIndex`] at startup. Agents discover actions through the index
//! (keyword/category/source search, per-source summaries) instead of
//! receiving every definition up front.

pub mod catalog;
pub mod invocation;
pub mod policy;
pub mod source;

// Re-export commonly used types
pub use catalog::{
    entities::{CatalogEntry, SourceSummary},
    index::ActionIndex,
};
pub use invocation::{
    command::{CommandInvocation, build_invocation},
    schema::parameter_schema,
    validation::{ArgMap, ArgumentError, validate_arguments},
};
pub use policy::{
    apply::{PolicyOutcome, apply_policy},
    constraints::{ConstraintMap, check_constraints},
    entities::{
        ActionPolicy, ArgConstraint, DefaultPolicy, ExecutorKind, ExecutorSpec, PolicyConfig,
    },
    error::PolicyError,
};
pub use source::entities::{ActionDef, ParamKind, ParamSpec, ResolvedAction, SourceConfig};
