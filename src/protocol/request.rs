use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Arguments for the `search_docs` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDocsParams {
    pub query: String,
}

/// Arguments for the `get_adr` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetAdrParams {
    pub adr_id: String,
}

/// Arguments for the `get_service_info` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct GetServiceInfoParams {
    pub service_name: String,
}

/// Arguments for the `check_naming_convention` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckNamingParams {
    pub name: String,
    #[serde(default = "default_naming_context")]
    pub context: String,
}

fn default_naming_context() -> String {
    crate::knowledge::naming::NamingContext::default()
        .as_str()
        .to_string()
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

/// Parameters for `resources/read`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceReadParams {
    pub uri: String,
}

/// Parameters for `prompts/get`. Arguments are accepted and ignored; no
/// published prompt takes any.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptGetParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}
