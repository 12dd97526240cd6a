//! Policy domain module
//!
//! A policy file narrows what a set of sources exposes: which actions are
//! callable at all, overridden descriptions, per-argument value
//! constraints, and how subprocesses are executed (locally or behind a
//! docker prefix). Policies are applied to the loaded sources **before**
//! the discovery index is built, so the index, summaries, search results,
//! and both registration surfaces agree by construction.

pub mod apply;
pub mod constraints;
pub mod entities;
pub mod error;

pub use apply::{PolicyOutcome, apply_policy};
pub use constraints::{ConstraintMap, check_constraints};
pub use entities::{
    ActionPolicy, ArgConstraint, DefaultPolicy, ExecutorKind, ExecutorSpec, PolicyConfig,
};
pub use error::PolicyError;
