//! Command-line assembly from coerced arguments
//!
//! No shell is ever involved: the output is an argv list handed to the
//! executor as-is, so values never need quoting or escaping.

use serde_json::Value;

use crate::invocation::validation::{ArgMap, scalar_repr};
use crate::source::entities::{ParamKind, ResolvedAction};

/// Everything the executor needs for one subprocess run
#[derive(Debug, Clone, PartialEq)]
pub struct CommandInvocation {
    /// Full argument vector, program first
    pub argv: Vec<String>,
    /// Working directory supplied via a cwd-routed parameter, if any
    pub working_dir: Option<String>,
    /// Data supplied via a stdin-routed parameter, if any
    pub stdin_data: Option<String>,
}

/// Assemble the argv list for one invocation.
///
/// Layout: base command (split on whitespace, so "python -m myapp" works),
/// then the action's command fragment, then positional values in
/// declaration order, then flag arguments — the action's own first, the
/// source's global ones after. cwd- and stdin-routed parameters are
/// captured separately and never appear in the argv.
pub fn build_invocation(resolved: &ResolvedAction, args: &ArgMap) -> CommandInvocation {
    let mut argv: Vec<String> =
        resolved.base_command.split_whitespace().map(str::to_string).collect();
    argv.extend(resolved.action.command.split_whitespace().map(str::to_string));

    let mut working_dir = None;
    let mut stdin_data = None;

    let all_params =
        || resolved.action.args.iter().chain(resolved.global_args.iter());

    for param in all_params() {
        if param.cwd {
            if let Some(value) = args.get(&param.name) {
                working_dir = Some(scalar_repr(value));
            }
        } else if param.stdin {
            if let Some(value) = args.get(&param.name) {
                stdin_data = Some(scalar_repr(value));
            }
        }
    }

    // First pass: positional values, in declaration order
    for param in all_params() {
        if param.positional && !param.cwd && !param.stdin {
            if let Some(value) = args.get(&param.name) {
                argv.push(scalar_repr(value));
            }
        }
    }

    // Second pass: flag arguments
    for param in all_params() {
        if param.positional || param.cwd || param.stdin {
            continue;
        }

        let value = args.get(&param.name).cloned().or_else(|| param.default.clone());
        let Some(value) = value else {
            continue;
        };

        let flag = param
            .flag
            .clone()
            .unwrap_or_else(|| format!("--{}", param.name.replace('_', "-")));

        if param.kind == ParamKind::Boolean {
            if is_truthy(&value) {
                argv.push(flag);
            }
        } else if flag.ends_with('=') {
            argv.push(format!("{}{}", flag, scalar_repr(&value)));
        } else {
            argv.push(flag);
            argv.push(scalar_repr(&value));
        }
    }

    CommandInvocation { argv, working_dir, stdin_data }
}

fn is_truthy(value: &Value) -> bool {
    matches!(value, Value::Bool(true)) || matches!(value, Value::String(s) if s == "true")
}
