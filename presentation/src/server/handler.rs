//! MCP server handler implementation.
//!
//! Implements the rmcp::ServerHandler trait over an injected
//! [`ActionSurface`], so the advertised tool set is whatever the selected
//! mode provides while call handling stays identical in both modes.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};

use toolgate_application::gateway::surface::{ActionSurface, ToolDescriptor};
use toolgate_application::gateway::{INVOKE_TOOL, SEARCH_TOOL};

/// The toolgate MCP server handler.
#[derive(Clone)]
pub struct GatewayServerHandler {
    /// Server name advertised to clients.
    name: String,
    /// Active registration surface.
    surface: Arc<dyn ActionSurface>,
}

impl GatewayServerHandler {
    pub fn new(name: impl Into<String>, surface: Arc<dyn ActionSurface>) -> Self {
        Self { name: name.into(), surface }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Convert a protocol-neutral descriptor into an MCP tool.
fn to_mcp_tool(descriptor: ToolDescriptor) -> Tool {
    let schema: JsonObject = match descriptor.input_schema {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    Tool::new(descriptor.name, descriptor.description, Arc::new(schema))
}

impl rmcp::ServerHandler for GatewayServerHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "{} — CLI actions exposed over MCP.\n\n\
                 Call {SEARCH_TOOL} to browse or filter the action catalog \
                 (no filters returns a per-source summary), then {INVOKE_TOOL} \
                 with an action name and arguments to run one. Search results \
                 include each action's full parameter schema.",
                self.name
            )),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.surface.list_tools().into_iter().map(to_mcp_tool).collect();
        Ok(ListToolsResult { tools, next_cursor: None })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.surface.call_tool(&request.name, request.arguments).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
