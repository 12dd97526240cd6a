//! Source domain module
//!
//! A source is a named collection of actions sharing one base command and
//! execution context (env, working directory). [`entities`] holds the
//! declarative model that YAML source files deserialize into, plus the
//! execution-facing [`ResolvedAction`](entities::ResolvedAction) that pairs
//! an action with its source's context.

pub mod entities;

pub use entities::{ActionDef, ParamKind, ParamSpec, ResolvedAction, SourceConfig};
