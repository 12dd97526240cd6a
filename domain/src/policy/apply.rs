//! Applying a policy to loaded sources

use std::collections::HashMap;

use crate::policy::entities::{ArgConstraint, PolicyConfig};
use crate::source::entities::SourceConfig;

/// Constraints per action, keyed by action name then argument name
pub type ConstraintMap = HashMap<String, HashMap<String, ArgConstraint>>;

/// Result of applying a policy
#[derive(Debug, Clone, Default)]
pub struct PolicyOutcome {
    /// Sources with disallowed actions removed and descriptions overridden
    pub sources: Vec<SourceConfig>,
    /// Invoke-time argument constraints for the surviving actions
    pub constraints: ConstraintMap,
}

/// Filter and rewrite sources according to a policy.
///
/// Policy entries naming unknown actions, and constraints naming unknown
/// arguments, are dropped with a warning rather than treated as errors —
/// a stale policy must not take the whole server down.
pub fn apply_policy(sources: Vec<SourceConfig>, policy: &PolicyConfig) -> PolicyOutcome {
    let known: Vec<String> = sources
        .iter()
        .flat_map(|source| source.actions.iter().map(|action| action.name.clone()))
        .collect();
    for name in policy.actions.keys() {
        if !known.iter().any(|known_name| known_name == name) {
            tracing::warn!(action = %name, "Policy references unknown action, ignoring");
        }
    }

    let mut constraints: ConstraintMap = HashMap::new();
    let sources = sources
        .into_iter()
        .map(|mut source| {
            source.actions.retain(|action| policy.allows(&action.name));
            for action in &mut source.actions {
                let Some(action_policy) = policy.actions.get(&action.name) else {
                    continue;
                };
                if let Some(description) = &action_policy.description {
                    action.description = description.clone();
                }
                let mut kept = HashMap::new();
                for (arg_name, constraint) in &action_policy.args {
                    if action.args.iter().any(|param| param.name == *arg_name) {
                        kept.insert(arg_name.clone(), constraint.clone());
                    } else {
                        tracing::warn!(
                            action = %action.name,
                            arg = %arg_name,
                            "Policy constraint references unknown argument, ignoring"
                        );
                    }
                }
                if !kept.is_empty() {
                    constraints.insert(action.name.clone(), kept);
                }
            }
            source
        })
        .collect();

    PolicyOutcome { sources, constraints }
}
