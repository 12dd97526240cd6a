//! Source domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Primitive type of an action parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Free-form text (the default)
    #[default]
    String,
    /// Whole number
    Integer,
    /// Floating-point number
    Number,
    /// True/false flag
    Boolean,
}

impl ParamKind {
    pub fn as_str(&self) -> &str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter specification for an action
///
/// Most parameters become a flag on the assembled command line. A parameter
/// can instead be routed positionally (`positional`), into the process
/// working directory (`cwd`), or onto the process stdin (`stdin`); the two
/// routing flags exclude the value from the command line entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name
    pub name: String,
    /// Parameter description
    #[serde(default)]
    pub description: String,
    /// Primitive type of the accepted value
    #[serde(default, rename = "type")]
    pub kind: ParamKind,
    /// Whether this parameter must be supplied
    #[serde(default)]
    pub required: bool,
    /// Default value used when the parameter is not supplied
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    /// Explicit flag, e.g. "--format" or "-f"; "format=" inlines the value.
    /// When absent, a flag is derived from the name ("my_arg" -> "--my-arg").
    #[serde(default)]
    pub flag: Option<String>,
    /// Place the value positionally instead of behind a flag
    #[serde(default)]
    pub positional: bool,
    /// Restrict the value to this set
    #[serde(default, rename = "enum")]
    pub allowed: Option<Vec<String>>,
    /// Route the value to the process working directory
    #[serde(default)]
    pub cwd: bool,
    /// Route the value to the process stdin
    #[serde(default)]
    pub stdin: bool,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind: ParamKind::String,
            required: false,
            default: None,
            flag: None,
            positional: false,
            allowed: None,
            cwd: false,
            stdin: false,
        }
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    pub fn with_allowed(mut self, allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowed = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    pub fn as_cwd(mut self) -> Self {
        self.cwd = true;
        self
    }

    pub fn as_stdin(mut self) -> Self {
        self.stdin = true;
        self
    }
}

/// Definition of a single action mapped onto a CLI subcommand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    /// Unique name of the action (e.g. "git_status")
    pub name: String,
    /// Human/LLM-facing description
    #[serde(default)]
    pub description: String,
    /// Subcommand fragment appended to the base command, e.g. "users list"
    #[serde(default)]
    pub command: String,
    /// Parameter specifications
    #[serde(default)]
    pub args: Vec<ParamSpec>,
    /// Execution timeout in seconds (falls back to the gateway default)
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl ActionDef {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            command: String::new(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_arg(mut self, arg: ParamSpec) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn default_source_name() -> String {
    "toolgate".to_string()
}

/// Top-level definition of one CLI source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source name, used for grouping and filtering
    #[serde(default = "default_source_name")]
    pub name: String,
    /// What this source's CLI does
    #[serde(default)]
    pub description: String,
    /// Base command, e.g. "docker" or "python -m myapp"
    pub command: String,
    /// Extra environment variables for every subprocess of this source
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// Working directory for every subprocess of this source
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Free-text category inherited by every action
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text tags inherited by every action
    #[serde(default)]
    pub tags: Vec<String>,
    /// Parameters appended to every action's command line but not exposed
    /// in any action's parameter schema
    #[serde(default)]
    pub global_args: Vec<ParamSpec>,
    /// Actions this source contributes
    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

impl SourceConfig {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            command: command.into(),
            env: HashMap::new(),
            working_dir: None,
            category: None,
            tags: Vec::new(),
            global_args: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_global_arg(mut self, arg: ParamSpec) -> Self {
        self.global_args.push(arg);
        self
    }

    pub fn with_action(mut self, action: ActionDef) -> Self {
        self.actions.push(action);
        self
    }
}

/// An action paired with its source's shared execution context
///
/// This is the execution-facing representation: everything needed to build
/// and run the subprocess for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedAction {
    /// The action definition
    pub action: ActionDef,
    /// Base command of the owning source
    pub base_command: String,
    /// Environment variables of the owning source
    #[serde(default)]
    pub env: HashMap<String, String>,
    /// Working directory of the owning source
    #[serde(default)]
    pub working_dir: Option<String>,
    /// Global parameters of the owning source
    #[serde(default)]
    pub global_args: Vec<ParamSpec>,
}

impl ResolvedAction {
    pub fn new(action: ActionDef, source: &SourceConfig) -> Self {
        Self {
            action,
            base_command: source.command.clone(),
            env: source.env.clone(),
            working_dir: source.working_dir.clone(),
            global_args: source.global_args.clone(),
        }
    }
}
