use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

use crate::config::ServerConfig;
use crate::handlers::{self, prompts, resources, ServerContext};
use crate::knowledge::KnowledgeError;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::schema::SchemaValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to load knowledge base: {0}")]
    Knowledge(#[from] KnowledgeError),
    #[error("invalid tool schema: {0}")]
    Schema(#[from] SchemaValidationError),
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("response serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    context: ServerContext,
    initialized: bool,
}

impl McpServer {
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        Ok(Self::with_context(ServerContext::new(config)?))
    }

    pub fn with_context(context: ServerContext) -> Self {
        Self {
            context,
            initialized: false,
        }
    }

    /// Serve on the process's stdin and stdout until EOF.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        log_catalog(&self.context);
        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.serve(reader, &mut stdout).await
    }

    /// Serve one connection: read requests line by line, write responses.
    pub async fn serve<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let max_bytes = self.context.config.max_message_bytes;
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
            let n = (&mut reader).take(limit).read_until(b'\n', &mut raw).await?;
            if n == 0 {
                tracing::info!("stdin closed, shutting down");
                break;
            }

            if n > max_bytes {
                if raw.last() != Some(&b'\n') {
                    skip_line(&mut reader).await?;
                }
                tracing::warn!("Message too large: over {max_bytes} bytes");
                write_response(writer, &JsonRpcResponse::error(None, JsonRpcError::parse_error()))
                    .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    tracing::warn!("Message is not valid UTF-8");
                    write_response(writer, &JsonRpcResponse::error(None, JsonRpcError::parse_error()))
                        .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!("Parse error: {e}");
                    write_response(writer, &JsonRpcResponse::error(None, JsonRpcError::parse_error()))
                        .await?;
                    continue;
                }
            };

            // Validate jsonrpc version
            if req.jsonrpc != "2.0" {
                write_response(
                    writer,
                    &JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request()),
                )
                .await?;
                continue;
            }

            // Initialization gate: only `initialize` is allowed before handshake completes
            if !self.initialized && req.method != "initialize" {
                if req.is_notification() {
                    continue;
                }
                tracing::warn!(method = %req.method, "request before initialize");
                write_response(
                    writer,
                    &JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_request_with("Server not initialized"),
                    ),
                )
                .await?;
                continue;
            }

            if let Some(resp) = handlers::dispatch(&req, &self.context) {
                write_response(writer, &resp).await?;
            }

            if req.method == "initialize" {
                self.initialized = true;
            }
        }

        Ok(())
    }
}

/// Discard input up to and including the next newline without buffering it.
async fn skip_line<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let buf = reader.fill_buf().await?;
        if buf.is_empty() {
            return Ok(());
        }
        match buf.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(());
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

async fn write_response<W>(writer: &mut W, resp: &JsonRpcResponse) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Log what this server publishes.
fn log_catalog(ctx: &ServerContext) {
    tracing::info!(name = %ctx.config.server_name, "starting documentation MCP server");
    for resource in resources::list(&ctx.knowledge) {
        tracing::info!(uri = %resource.uri, "resource");
    }
    for tool in ctx.tools.names() {
        tracing::info!(tool, "tool");
    }
    for prompt in prompts::list() {
        tracing::info!(prompt = %prompt.name, "prompt");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    async fn transcript(input: &str) -> Vec<Value> {
        let mut server = McpServer::new(ServerConfig::default()).unwrap();
        let mut out = Vec::new();
        server
            .serve(BufReader::new(input.as_bytes()), &mut out)
            .await
            .unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    const INIT: &str = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"test","version":"0"}}}"#;

    #[tokio::test]
    async fn rejects_requests_before_initialize() {
        let responses = transcript("{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"tools/list\"}\n").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0]["id"], 7);
        assert_eq!(responses[0]["error"]["code"], -32600);
        assert_eq!(responses[0]["error"]["message"], "Server not initialized");
    }

    #[tokio::test]
    async fn handshake_then_tool_call() {
        let input = format!(
            "{INIT}\n\
             {{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}}\n\
             \n\
             {{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"tools/call\",\"params\":{{\"name\":\"get_adr\",\"arguments\":{{\"adr_id\":\"adr-003\"}}}}}}\n"
        );
        let responses = transcript(&input).await;
        assert_eq!(responses.len(), 2, "notification and blank line get no response");

        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "company-docs");
        let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# ADR-003: Event-Driven Communication Between Services\n"));
    }

    #[tokio::test]
    async fn malformed_lines_get_parse_errors() {
        let input = format!("{INIT}\nnot json\n{{\"jsonrpc\":\"1.0\",\"id\":3,\"method\":\"ping\"}}\n");
        let responses = transcript(&input).await;
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[1]["error"]["code"], -32700);
        assert!(responses[1].get("id").is_none());
        assert_eq!(responses[2]["error"]["code"], -32600);
        assert_eq!(responses[2]["id"], 3);
    }

    #[tokio::test]
    async fn oversized_message_is_rejected() {
        let mut config = ServerConfig::default();
        config.max_message_bytes = 16;
        let mut server = McpServer::new(config).unwrap();
        let mut out = Vec::new();
        let input = "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n";
        server
            .serve(BufReader::new(input.as_bytes()), &mut out)
            .await
            .unwrap();
        let response: Value = serde_json::from_str(String::from_utf8(out).unwrap().trim()).unwrap();
        assert_eq!(response["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn oversized_line_is_skipped_and_next_request_served() {
        let mut config = ServerConfig::default();
        config.max_message_bytes = INIT.len() + 1;
        let mut server = McpServer::new(config).unwrap();
        let mut out = Vec::new();
        let padding = "x".repeat(4 * INIT.len());
        let input = format!(
            "{{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\",\"pad\":\"{padding}\"}}\n{INIT}\n"
        );
        server
            .serve(BufReader::with_capacity(8, input.as_bytes()), &mut out)
            .await
            .unwrap();

        let responses: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["error"]["code"], -32700);
        assert_eq!(responses[1]["id"], 1);
        assert_eq!(responses[1]["result"]["protocolVersion"], "2024-11-05");
    }

    #[tokio::test]
    async fn line_at_exact_limit_is_accepted() {
        let mut config = ServerConfig::default();
        config.max_message_bytes = INIT.len() + 1;
        let mut server = McpServer::new(config).unwrap();
        let mut out = Vec::new();
        let input = format!("{INIT}\n");
        server
            .serve(BufReader::new(input.as_bytes()), &mut out)
            .await
            .unwrap();
        let response: Value = serde_json::from_str(String::from_utf8(out).unwrap().trim()).unwrap();
        assert_eq!(response["result"]["serverInfo"]["name"], "company-docs");
    }
}
