//! Argument validation and coercion
//!
//! Supplied arguments are checked against an action's parameter
//! definitions in a fixed order — required presence, per-kind coercion,
//! enum membership — and every problem is collected before returning.
//! A validation failure never aborts the process and never reaches the
//! executor.

use serde_json::Value;
use thiserror::Error;

use crate::source::entities::{ActionDef, ParamKind};

/// Argument mapping as it arrives from the wire
pub type ArgMap = serde_json::Map<String, Value>;

/// One problem found while validating an invocation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("Missing required argument '{name}'")]
    MissingRequired { name: String },

    #[error("Argument '{name}': cannot convert {value} to {expected}")]
    TypeMismatch { name: String, value: String, expected: ParamKind },

    #[error("Argument '{name}': invalid value {value}; allowed values: {}", .allowed.join(", "))]
    NotAllowed { name: String, value: String, allowed: Vec<String> },
}

/// Validate and coerce `args` against an action's parameter definitions.
///
/// Returns the coerced mapping, or every collected problem. Arguments not
/// declared on the action pass through untouched — they are ignored later
/// by command assembly, not rejected here.
pub fn validate_arguments(args: &ArgMap, action: &ActionDef) -> Result<ArgMap, Vec<ArgumentError>> {
    let mut coerced = args.clone();
    let mut errors = Vec::new();

    for param in &action.args {
        if param.required && !args.contains_key(&param.name) {
            errors.push(ArgumentError::MissingRequired { name: param.name.clone() });
        }
    }

    for param in &action.args {
        let Some(value) = args.get(&param.name) else {
            continue;
        };
        match coerce(param.kind, value) {
            Some(converted) => {
                if let Some(allowed) = &param.allowed {
                    let repr = scalar_repr(&converted);
                    if !allowed.contains(&repr) {
                        errors.push(ArgumentError::NotAllowed {
                            name: param.name.clone(),
                            value: repr,
                            allowed: allowed.clone(),
                        });
                        continue;
                    }
                }
                coerced.insert(param.name.clone(), converted);
            }
            None => {
                errors.push(ArgumentError::TypeMismatch {
                    name: param.name.clone(),
                    value: value.to_string(),
                    expected: param.kind,
                });
            }
        }
    }

    if errors.is_empty() { Ok(coerced) } else { Err(errors) }
}

/// Convert a value to the declared kind, if a safe unambiguous conversion
/// exists.
fn coerce(kind: ParamKind, value: &Value) -> Option<Value> {
    match kind {
        ParamKind::String => coerce_string(value),
        ParamKind::Integer => coerce_integer(value),
        ParamKind::Number => coerce_number(value),
        ParamKind::Boolean => coerce_boolean(value),
    }
}

fn coerce_string(value: &Value) -> Option<Value> {
    match value {
        Value::String(_) => Some(value.clone()),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        _ => None,
    }
}

fn coerce_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::from(i))
            } else {
                // Whole-valued floats are safe; anything fractional is not.
                n.as_f64().filter(|f| f.fract() == 0.0).map(|f| Value::from(f as i64))
            }
        }
        Value::String(s) => s.trim().parse::<i64>().ok().map(Value::from),
        Value::Bool(b) => Some(Value::from(i64::from(*b))),
        _ => None,
    }
}

fn coerce_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => n.as_f64().map(Value::from),
        Value::String(s) => s.trim().parse::<f64>().ok().map(Value::from),
        Value::Bool(b) => Some(Value::from(if *b { 1.0 } else { 0.0 })),
        _ => None,
    }
}

fn coerce_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(_) => Some(value.clone()),
        Value::String(s) => match s.as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(Value::Bool(false)),
            Some(1) => Some(Value::Bool(true)),
            _ => None,
        },
        _ => None,
    }
}

/// Scalar rendering used for enum membership and command-line values.
pub(crate) fn scalar_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::entities::ParamSpec;
    use serde_json::json;

    fn action(params: impl IntoIterator<Item = ParamSpec>) -> ActionDef {
        let mut action = ActionDef::new("test", "test");
        for param in params {
            action = action.with_arg(param);
        }
        action
    }

    fn args(value: serde_json::Value) -> ArgMap {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_valid_args_pass_through() {
        let action = action([
            ParamSpec::new("name").required(),
            ParamSpec::new("count").with_kind(ParamKind::Integer).with_flag("-n"),
        ]);
        let coerced =
            validate_arguments(&args(json!({"name": "hello", "count": 5})), &action).unwrap();
        assert_eq!(coerced["name"], json!("hello"));
        assert_eq!(coerced["count"], json!(5));
    }

    #[test]
    fn test_missing_required_names_parameter() {
        let action = action([ParamSpec::new("message").required()]);
        let errors = validate_arguments(&args(json!({})), &action).unwrap_err();
        assert_eq!(errors.len(), 1);
        let text = errors[0].to_string();
        assert!(text.contains("message"));
        assert!(text.contains("Missing required"));
    }

    #[test]
    fn test_two_missing_required_both_reported() {
        let action =
            action([ParamSpec::new("first").required(), ParamSpec::new("second").required()]);
        let errors = validate_arguments(&args(json!({})), &action).unwrap_err();
        assert_eq!(errors.len(), 2);
        let text = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn test_string_to_int_coercion() {
        let action = action([ParamSpec::new("n").with_kind(ParamKind::Integer)]);
        let coerced = validate_arguments(&args(json!({"n": "42"})), &action).unwrap();
        assert_eq!(coerced["n"], json!(42));
    }

    #[test]
    fn test_string_to_float_coercion() {
        let action = action([ParamSpec::new("val").with_kind(ParamKind::Number)]);
        let coerced = validate_arguments(&args(json!({"val": "3.14"})), &action).unwrap();
        assert!((coerced["val"].as_f64().unwrap() - 3.14).abs() < 1e-9);
    }

    #[test]
    fn test_incoercible_int_reports_value_and_kind() {
        let action = action([ParamSpec::new("n").with_kind(ParamKind::Integer)]);
        let errors = validate_arguments(&args(json!({"n": "hello"})), &action).unwrap_err();
        assert_eq!(errors.len(), 1);
        let text = errors[0].to_string();
        assert!(text.contains('n'));
        assert!(text.contains("hello"));
        assert!(text.contains("integer"));
    }

    #[test]
    fn test_incoercible_number() {
        let action = action([ParamSpec::new("val").with_kind(ParamKind::Number)]);
        let errors = validate_arguments(&args(json!({"val": "abc"})), &action).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("val"));
    }

    #[test]
    fn test_boolean_strings() {
        let action = action([ParamSpec::new("verbose").with_kind(ParamKind::Boolean)]);
        let coerced = validate_arguments(&args(json!({"verbose": "true"})), &action).unwrap();
        assert_eq!(coerced["verbose"], json!(true));
        let coerced = validate_arguments(&args(json!({"verbose": "false"})), &action).unwrap();
        assert_eq!(coerced["verbose"], json!(false));
    }

    #[test]
    fn test_boolean_invalid_string() {
        let action = action([ParamSpec::new("verbose").with_kind(ParamKind::Boolean)]);
        let errors = validate_arguments(&args(json!({"verbose": "maybe"})), &action).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("verbose"));
    }

    #[test]
    fn test_bool_to_int_and_back() {
        let action = action([ParamSpec::new("n").with_kind(ParamKind::Integer)]);
        assert_eq!(
            validate_arguments(&args(json!({"n": true})), &action).unwrap()["n"],
            json!(1)
        );
        assert_eq!(
            validate_arguments(&args(json!({"n": false})), &action).unwrap()["n"],
            json!(0)
        );

        let action = action_bool();
        assert_eq!(
            validate_arguments(&args(json!({"verbose": 1})), &action).unwrap()["verbose"],
            json!(true)
        );
        assert_eq!(
            validate_arguments(&args(json!({"verbose": 0})), &action).unwrap()["verbose"],
            json!(false)
        );
    }

    fn action_bool() -> ActionDef {
        action([ParamSpec::new("verbose").with_kind(ParamKind::Boolean)])
    }

    #[test]
    fn test_array_for_boolean_is_error() {
        let errors =
            validate_arguments(&args(json!({"verbose": [1, 2, 3]})), &action_bool()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("verbose"));
    }

    #[test]
    fn test_number_to_string_coercion() {
        let action = action([ParamSpec::new("label")]);
        let coerced = validate_arguments(&args(json!({"label": 42})), &action).unwrap();
        assert_eq!(coerced["label"], json!("42"));
    }

    #[test]
    fn test_enum_valid_value() {
        let action = action([ParamSpec::new("fmt").with_allowed(["json", "csv"])]);
        let coerced = validate_arguments(&args(json!({"fmt": "json"})), &action).unwrap();
        assert_eq!(coerced["fmt"], json!("json"));
    }

    #[test]
    fn test_enum_invalid_lists_allowed() {
        let action = action([ParamSpec::new("fmt").with_allowed(["json", "csv"])]);
        let errors = validate_arguments(&args(json!({"fmt": "xml"})), &action).unwrap_err();
        assert_eq!(errors.len(), 1);
        let text = errors[0].to_string();
        assert!(text.contains("json"));
        assert!(text.contains("csv"));
    }

    #[test]
    fn test_enum_checked_after_coercion() {
        let action = action([ParamSpec::new("n")
            .with_kind(ParamKind::Integer)
            .with_allowed(["42", "43"])]);
        let coerced = validate_arguments(&args(json!({"n": "42"})), &action).unwrap();
        assert_eq!(coerced["n"], json!(42));
    }

    #[test]
    fn test_extra_keys_kept_without_error() {
        let action = action([ParamSpec::new("name")]);
        let coerced =
            validate_arguments(&args(json!({"name": "hello", "bogus": "ignored"})), &action)
                .unwrap();
        assert_eq!(coerced["name"], json!("hello"));
        assert_eq!(coerced["bogus"], json!("ignored"));
    }

    #[test]
    fn test_empty_args_without_required() {
        let action = action([ParamSpec::new("opt")]);
        assert!(validate_arguments(&args(json!({})), &action).is_ok());
    }

    #[test]
    fn test_multiple_error_kinds_all_reported() {
        let action = action([
            ParamSpec::new("a").required(),
            ParamSpec::new("b").with_kind(ParamKind::Integer),
        ]);
        let errors = validate_arguments(&args(json!({"b": "notanumber"})), &action).unwrap_err();
        assert_eq!(errors.len(), 2);
        let text = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        assert!(text.contains('a'));
        assert!(text.contains('b'));
    }

    #[test]
    fn test_whole_float_accepted_for_integer() {
        let action = action([ParamSpec::new("n").with_kind(ParamKind::Integer)]);
        assert_eq!(validate_arguments(&args(json!({"n": 4.0})), &action).unwrap()["n"], json!(4));
        assert!(validate_arguments(&args(json!({"n": 4.5})), &action).is_err());
    }
}
