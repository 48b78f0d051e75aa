pub mod request;
pub mod response;

pub use request::{
    CheckNamingParams, GetAdrParams, GetServiceInfoParams, InitializeParams, JsonRpcRequest,
    PromptGetParams, ResourceReadParams, RpcId, SearchDocsParams, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, McpError, McpErrorCode, McpErrorResponse, PromptDescriptor,
    PromptMessage, PromptResult, PromptsListResult, ResourceContents, ResourceDescriptor,
    ResourceReadResult, ResourcesListResult, TextContent, ToolDescriptor, ToolResult,
    ToolsListResult,
};
