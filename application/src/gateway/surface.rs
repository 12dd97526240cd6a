//! Registration surfaces — what the agent-facing boundary exposes
//!
//! The mode flag chosen at startup decides which strategy is active:
//!
//! - [`DiscoverySurface`] exposes exactly the two meta operations
//!   (`toolgate_search`, `toolgate_invoke`); individual action names are
//!   not callable.
//! - [`DirectSurface`] exposes one callable per catalog entry and no meta
//!   operations.
//!
//! Both are built over the same [`DiscoveryGateway`], so resolution,
//! validation, execution, and response formatting are shared — switching
//! modes changes only what is reachable from the outside.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use toolgate_domain::invocation::validation::ArgMap;

use super::{DiscoveryGateway, INVOKE_TOOL, SEARCH_TOOL, SearchRequest};

/// Protocol-neutral description of one advertised tool
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Strategy for the externally visible tool set
#[async_trait]
pub trait ActionSurface: Send + Sync {
    /// Tools advertised to the agent.
    fn list_tools(&self) -> Vec<ToolDescriptor>;

    /// Handle a call to `name`; always returns response text, never an
    /// error.
    async fn call_tool(&self, name: &str, args: Option<ArgMap>) -> String;
}

/// Discovery mode: two meta operations, nothing else
pub struct DiscoverySurface {
    gateway: Arc<DiscoveryGateway>,
}

impl DiscoverySurface {
    pub fn new(gateway: Arc<DiscoveryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ActionSurface for DiscoverySurface {
    fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![
            ToolDescriptor {
                name: SEARCH_TOOL.to_string(),
                description: "Search the action catalog by keyword, category, or source. \
                              Results include each action's full parameter schema. Call with \
                              no filters to get a per-source summary of everything available."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Case-insensitive keyword matched against name, description, source, category, and tags",
                        },
                        "category": {
                            "type": "string",
                            "description": "Exact category filter",
                        },
                        "source": {
                            "type": "string",
                            "description": "Exact source-name filter",
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results",
                            "default": 10,
                        },
                    },
                }),
            },
            ToolDescriptor {
                name: INVOKE_TOOL.to_string(),
                description: format!(
                    "Invoke an action by name. Use {SEARCH_TOOL} first to find actions and \
                     their parameter schemas."
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "action_name": {
                            "type": "string",
                            "description": "Name of the action to invoke",
                        },
                        "args": {
                            "type": "object",
                            "description": "Arguments for the action",
                        },
                    },
                    "required": ["action_name"],
                }),
            },
        ]
    }

    async fn call_tool(&self, name: &str, args: Option<ArgMap>) -> String {
        match name {
            SEARCH_TOOL => {
                let request: SearchRequest = match args {
                    None => SearchRequest::default(),
                    Some(map) => match serde_json::from_value(Value::Object(map)) {
                        Ok(request) => request,
                        Err(err) => return format!("Invalid search request: {err}"),
                    },
                };
                let reply = self.gateway.search_request(&request);
                serde_json::to_string_pretty(&reply)
                    .unwrap_or_else(|err| format!("Failed to encode search reply: {err}"))
            }
            INVOKE_TOOL => {
                let args = args.unwrap_or_default();
                let Some(action_name) = args.get("action_name").and_then(Value::as_str) else {
                    return "Missing required argument 'action_name'".to_string();
                };
                let inner_args = match args.get("args") {
                    None | Some(Value::Null) => None,
                    Some(Value::Object(map)) => Some(map.clone()),
                    Some(_) => return "Invalid invoke request: 'args' must be an object".to_string(),
                };
                self.gateway.invoke_request(action_name, inner_args).await
            }
            other => self.gateway.unknown_action_text(other),
        }
    }
}

/// Direct mode: every catalog entry is its own callable
pub struct DirectSurface {
    gateway: Arc<DiscoveryGateway>,
}

impl DirectSurface {
    pub fn new(gateway: Arc<DiscoveryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ActionSurface for DirectSurface {
    fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.gateway
            .index()
            .entries()
            .iter()
            .map(|entry| ToolDescriptor {
                name: entry.action_name.clone(),
                description: entry.description.clone(),
                input_schema: entry.parameter_schema.clone(),
            })
            .collect()
    }

    async fn call_tool(&self, name: &str, args: Option<ArgMap>) -> String {
        self.gateway.invoke_request(name, args).await
    }
}
