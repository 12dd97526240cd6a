//! Policy configuration model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::policy::error::PolicyError;

/// What happens to actions the policy does not mention
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPolicy {
    /// Unlisted actions stay callable
    Enabled,
    /// Unlisted actions are removed (allow-list semantics, the default)
    #[default]
    Disabled,
}

/// Constraint on one argument's value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArgConstraint {
    /// Regex the whole value must match (fullmatch, not search)
    #[serde(default)]
    pub pattern: Option<String>,
    /// Inclusive lower bound for numeric values
    #[serde(default)]
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric values
    #[serde(default)]
    pub max: Option<f64>,
}

/// Per-action policy: listing an action enables it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionPolicy {
    /// Replacement description shown to the agent
    #[serde(default)]
    pub description: Option<String>,
    /// Constraints keyed by argument name
    #[serde(default)]
    pub args: HashMap<String, ArgConstraint>,
}

/// How subprocesses are launched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    /// Run directly on the host (the default)
    #[default]
    Local,
    /// Prefix every command with `docker run --rm ... IMAGE`
    Docker,
}

/// Executor section of a policy file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorSpec {
    #[serde(default, rename = "type")]
    pub kind: ExecutorKind,
    /// Container image; required when kind is docker
    #[serde(default)]
    pub image: Option<String>,
    /// Volume mounts, "host:container" form
    #[serde(default)]
    pub volumes: Vec<String>,
    /// Docker network mode (e.g. "none")
    #[serde(default)]
    pub network: Option<String>,
    /// Working directory inside the container
    #[serde(default)]
    pub working_dir: Option<String>,
}

/// Top-level policy file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub default: DefaultPolicy,
    /// Per-action policies keyed by action name
    #[serde(default)]
    pub actions: HashMap<String, ActionPolicy>,
    #[serde(default)]
    pub executor: ExecutorSpec,
}

impl PolicyConfig {
    /// Check internal consistency: docker needs an image, and constraint
    /// patterns must compile.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.executor.kind == ExecutorKind::Docker && self.executor.image.is_none() {
            return Err(PolicyError::DockerRequiresImage);
        }
        for (action_name, action_policy) in &self.actions {
            for (arg_name, constraint) in &action_policy.args {
                if let Some(pattern) = &constraint.pattern {
                    regex::Regex::new(pattern).map_err(|source| PolicyError::InvalidPattern {
                        action: action_name.clone(),
                        arg: arg_name.clone(),
                        source,
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Whether the named action survives this policy.
    pub fn allows(&self, action_name: &str) -> bool {
        self.default == DefaultPolicy::Enabled || self.actions.contains_key(action_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_disabled() {
        let policy: PolicyConfig = serde_json::from_value(serde_json::json!({
            "actions": {"hello": {}},
        }))
        .unwrap();
        assert_eq!(policy.default, DefaultPolicy::Disabled);
        assert_eq!(policy.executor.kind, ExecutorKind::Local);
        assert!(policy.allows("hello"));
        assert!(!policy.allows("other"));
    }

    #[test]
    fn test_enabled_default_allows_unlisted() {
        let policy: PolicyConfig = serde_json::from_value(serde_json::json!({
            "default": "enabled",
        }))
        .unwrap();
        assert!(policy.allows("anything"));
    }

    #[test]
    fn test_full_policy_deserializes() {
        let policy: PolicyConfig = serde_json::from_value(serde_json::json!({
            "default": "disabled",
            "executor": {
                "type": "docker",
                "image": "alpine/git:latest",
                "network": "none",
            },
            "actions": {
                "hello": {
                    "description": "Overridden description",
                    "args": {"name": {"pattern": "^[a-z]+$"}},
                }
            },
        }))
        .unwrap();

        assert_eq!(policy.executor.kind, ExecutorKind::Docker);
        assert_eq!(policy.executor.image.as_deref(), Some("alpine/git:latest"));
        assert_eq!(policy.executor.network.as_deref(), Some("none"));
        let hello = &policy.actions["hello"];
        assert_eq!(hello.description.as_deref(), Some("Overridden description"));
        assert_eq!(hello.args["name"].pattern.as_deref(), Some("^[a-z]+$"));
        policy.validate().unwrap();
    }

    #[test]
    fn test_docker_requires_image() {
        let policy: PolicyConfig = serde_json::from_value(serde_json::json!({
            "executor": {"type": "docker"},
        }))
        .unwrap();
        assert!(matches!(policy.validate(), Err(PolicyError::DockerRequiresImage)));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let policy: PolicyConfig = serde_json::from_value(serde_json::json!({
            "actions": {"hello": {"args": {"name": {"pattern": "(unclosed"}}}},
        }))
        .unwrap();
        assert!(matches!(policy.validate(), Err(PolicyError::InvalidPattern { .. })));
    }
}
