//! Invoke-time constraint checking

use std::collections::HashMap;

use serde_json::Value;

use crate::policy::entities::ArgConstraint;

pub use crate::policy::apply::ConstraintMap;

/// Check coerced arguments against policy constraints.
///
/// Like argument validation, every violation is collected; execution only
/// proceeds when the returned list is empty. Constraints on arguments the
/// caller did not supply are skipped.
pub fn check_constraints(
    args: &serde_json::Map<String, Value>,
    constraints: &HashMap<String, ArgConstraint>,
) -> Vec<String> {
    let mut violations = Vec::new();

    for (name, constraint) in constraints {
        let Some(value) = args.get(name) else {
            continue;
        };

        if let Some(pattern) = &constraint.pattern {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            // Anchored so the whole value must match, not a substring.
            match regex::Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) => {
                    if !re.is_match(&text) {
                        violations.push(format!(
                            "Argument '{name}': value '{text}' does not match pattern '{pattern}'"
                        ));
                    }
                }
                Err(err) => {
                    violations.push(format!("Argument '{name}': invalid pattern: {err}"));
                }
            }
        }

        let numeric = value.as_f64();
        if let (Some(min), Some(number)) = (constraint.min, numeric) {
            if number < min {
                violations.push(format!("Argument '{name}': value {number} is below minimum {min}"));
            }
        }
        if let (Some(max), Some(number)) = (constraint.max, numeric) {
            if number > max {
                violations.push(format!("Argument '{name}': value {number} exceeds maximum {max}"));
            }
        }
    }

    violations.sort();
    violations
}
