//! Discovery Gateway
//!
//! The two externally callable operations an agent uses instead of
//! receiving every tool definition up front:
//!
//! 1. [`DiscoveryGateway::search_request`] — browse or filter the action
//!    catalog; with no filters it returns per-source summaries.
//! 2. [`DiscoveryGateway::invoke_request`] — resolve an action by name,
//!    validate and coerce its arguments, and delegate execution to the
//!    injected [`CommandRunnerPort`].
//!
//! Every failure this layer produces is a plain descriptive text the agent
//! can act on — unknown names, validation problems, and execution failures
//! never surface as errors at the protocol boundary.

pub mod surface;

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use toolgate_domain::catalog::entities::{CatalogEntry, SourceSummary};
use toolgate_domain::catalog::index::ActionIndex;
use toolgate_domain::invocation::command::build_invocation;
use toolgate_domain::invocation::validation::{ArgMap, validate_arguments};
use toolgate_domain::policy::constraints::{ConstraintMap, check_constraints};

use crate::ports::command_runner::{CommandRunnerPort, ExecOutcome, ExecRequest};

/// Name of the search meta tool
pub const SEARCH_TOOL: &str = "toolgate_search";
/// Name of the invoke meta tool
pub const INVOKE_TOOL: &str = "toolgate_invoke";
/// Default result cap shared by search and summary mode
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
/// Default per-action execution timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Wire input of the search operation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    /// Negative values are clamped to zero
    pub limit: Option<i64>,
}

impl SearchRequest {
    fn is_browse(&self) -> bool {
        self.query.is_none() && self.category.is_none() && self.source.is_none()
    }

    fn effective_limit(&self) -> usize {
        let limit = self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT as i64);
        usize::try_from(limit).unwrap_or(0)
    }
}

/// Wire output of the search operation
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SearchReply {
    Search { results: Vec<CatalogEntry> },
    Summary { summaries: Vec<SourceSummary> },
}

/// The discovery gateway: one immutable index, one execution delegate
///
/// Constructed once at startup and shared by whichever registration
/// surface is active, so discovery-mode and direct-mode invocations are
/// observably indistinguishable for a given action and arguments.
pub struct DiscoveryGateway {
    index: Arc<ActionIndex>,
    runner: Arc<dyn CommandRunnerPort>,
    constraints: ConstraintMap,
}

impl DiscoveryGateway {
    pub fn new(index: Arc<ActionIndex>, runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self { index, runner, constraints: ConstraintMap::new() }
    }

    /// Attach invoke-time policy constraints.
    pub fn with_constraints(mut self, constraints: ConstraintMap) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn index(&self) -> &ActionIndex {
        &self.index
    }

    /// Search mode when any filter is present, summary mode otherwise.
    pub fn search_request(&self, request: &SearchRequest) -> SearchReply {
        let limit = request.effective_limit();
        if request.is_browse() {
            SearchReply::Summary {
                summaries: self.index.summarize(Some(limit)).into_iter().cloned().collect(),
            }
        } else {
            SearchReply::Search {
                results: self
                    .index
                    .search(
                        request.query.as_deref(),
                        request.category.as_deref(),
                        request.source.as_deref(),
                        limit,
                    )
                    .into_iter()
                    .cloned()
                    .collect(),
            }
        }
    }

    /// Resolve, validate, execute, and format one invocation.
    pub async fn invoke_request(&self, action_name: &str, args: Option<ArgMap>) -> String {
        let Some(resolved) = self.index.get(action_name) else {
            tracing::warn!(action = %action_name, "Unknown action invoked");
            return self.unknown_action_text(action_name);
        };

        let args = args.unwrap_or_default();
        let coerced = match validate_arguments(&args, &resolved.action) {
            Ok(coerced) => coerced,
            Err(errors) => {
                let lines: Vec<String> =
                    errors.iter().map(|error| format!("- {error}")).collect();
                return format!("Argument validation failed:\n{}", lines.join("\n"));
            }
        };

        if let Some(constraints) = self.constraints.get(action_name) {
            let violations = check_constraints(&coerced, constraints);
            if !violations.is_empty() {
                let lines: Vec<String> =
                    violations.iter().map(|violation| format!("- {violation}")).collect();
                return format!("Policy validation failed:\n{}", lines.join("\n"));
            }
        }

        let invocation = build_invocation(resolved, &coerced);
        let request = ExecRequest {
            argv: invocation.argv,
            env: resolved.env.clone(),
            working_dir: invocation.working_dir.or_else(|| resolved.working_dir.clone()),
            stdin_data: invocation.stdin_data,
            timeout_secs: resolved.action.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        tracing::info!(command = %request.argv.join(" "), "executing");
        let started = Instant::now();
        let outcome = self.runner.run(request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if outcome.is_success() {
            tracing::info!(
                action = %action_name,
                elapsed_ms,
                bytes = outcome.stdout.len(),
                "completed"
            );
        } else {
            tracing::warn!(
                action = %action_name,
                exit_code = outcome.exit_code,
                elapsed_ms,
                "failed"
            );
        }

        format_outcome(&outcome)
    }

    /// Failure text for a name the index does not know, listing every
    /// known action so the caller can self-correct without another round
    /// trip.
    pub fn unknown_action_text(&self, action_name: &str) -> String {
        let mut names: Vec<&str> = self.index.action_names().collect();
        names.sort_unstable();
        format!("Unknown action: {action_name}. Available actions: {}", names.join(", "))
    }
}

/// Render an execution outcome as the plain-text response shape shared by
/// both registration surfaces.
pub fn format_outcome(outcome: &ExecOutcome) -> String {
    let mut parts = Vec::new();
    let stdout = outcome.stdout.trim();
    if !stdout.is_empty() {
        parts.push(stdout.to_string());
    }
    let stderr = outcome.stderr.trim();
    if !stderr.is_empty() {
        parts.push(format!("[stderr]\n{stderr}"));
    }
    if outcome.exit_code != 0 {
        parts.push(format!("[exit code: {}]", outcome.exit_code));
    }
    if parts.is_empty() { "(no output)".to_string() } else { parts.join("\n\n") }
}
