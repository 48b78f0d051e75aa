pub mod check_naming_convention;
pub mod get_adr;
pub mod get_service_info;
pub mod prompts;
pub mod resources;
pub mod search_docs;
pub mod tools;

use serde::de::DeserializeOwned;

use crate::config::ServerConfig;
use crate::knowledge::KnowledgeBase;
use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, PromptGetParams,
    PromptsListResult, ResourceReadParams, ResourceReadResult, ResourcesListResult,
    ToolCallParams, ToolsListResult,
};
use crate::server::ServerError;
use tools::ToolRegistry;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Everything a request handler may read. Built once, shared immutably.
#[derive(Debug)]
pub struct ServerContext {
    pub config: ServerConfig,
    pub knowledge: KnowledgeBase,
    pub tools: ToolRegistry,
}

impl ServerContext {
    /// Load the reference knowledge base and compile the tool table.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let knowledge = KnowledgeBase::reference(config.search)?;
        let tools = ToolRegistry::new()?;
        Ok(Self {
            config,
            knowledge,
            tools,
        })
    }
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub fn dispatch(req: &JsonRpcRequest, ctx: &ServerContext) -> Option<JsonRpcResponse> {
    tracing::debug!(method = %req.method, "dispatch");

    if req.method.starts_with("notifications/") {
        return None;
    }

    let response = match req.method.as_str() {
        "initialize" => {
            if let Some(Ok(params)) = req
                .params
                .as_ref()
                .map(|v| serde_json::from_value::<InitializeParams>(v.clone()))
            {
                let client = params.client_info.as_ref();
                tracing::info!(
                    client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    protocol = params.protocol_version.as_deref().unwrap_or("unspecified"),
                    "client initializing"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": ctx.config.server_name,
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            JsonRpcResponse::success(req.id.clone(), result)
        }

        "ping" => JsonRpcResponse::success(req.id.clone(), serde_json::json!({})),

        "tools/list" => JsonRpcResponse::success_from(
            req.id.clone(),
            &ToolsListResult {
                tools: ctx.tools.descriptors(),
            },
        ),

        "tools/call" => match parse_params::<ToolCallParams>(req) {
            Ok(params) => {
                let tool_result = ctx.tools.call(&params, &ctx.knowledge);
                JsonRpcResponse::success_from(req.id.clone(), &tool_result)
            }
            Err(err) => JsonRpcResponse::error(req.id.clone(), err),
        },

        "resources/list" => JsonRpcResponse::success_from(
            req.id.clone(),
            &ResourcesListResult {
                resources: resources::list(&ctx.knowledge),
            },
        ),

        "resources/read" => match parse_params::<ResourceReadParams>(req) {
            Ok(params) => match resources::read(&params, &ctx.knowledge) {
                Ok(contents) => JsonRpcResponse::success_from(
                    req.id.clone(),
                    &ResourceReadResult {
                        contents: vec![contents],
                    },
                ),
                Err(mcp_err) => JsonRpcResponse::error(req.id.clone(), mcp_err.into()),
            },
            Err(err) => JsonRpcResponse::error(req.id.clone(), err),
        },

        "prompts/list" => JsonRpcResponse::success_from(
            req.id.clone(),
            &PromptsListResult {
                prompts: prompts::list(),
            },
        ),

        "prompts/get" => match parse_params::<PromptGetParams>(req) {
            Ok(params) => match prompts::get(&params) {
                Ok(result) => JsonRpcResponse::success_from(req.id.clone(), &result),
                Err(mcp_err) => JsonRpcResponse::error(req.id.clone(), mcp_err.into()),
            },
            Err(err) => JsonRpcResponse::error(req.id.clone(), err),
        },

        _ => {
            tracing::warn!(method = %req.method, "method not found");
            JsonRpcResponse::error(req.id.clone(), JsonRpcError::method_not_found(&req.method))
        }
    };

    if req.is_notification() {
        return None;
    }
    Some(response)
}

fn parse_params<T: DeserializeOwned>(req: &JsonRpcRequest) -> Result<T, JsonRpcError> {
    match &req.params {
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            JsonRpcError::invalid_params(format!("Invalid {} params: {e}", req.method))
        }),
        None => Err(JsonRpcError::invalid_params(format!(
            "Missing params for {}",
            req.method
        ))),
    }
}
