use jsonschema::validator_for;
use serde_json::Value;

use company_docs_server::protocol::{JsonRpcError, McpErrorCode, McpErrorResponse};

const ERROR_SCHEMA_V0: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "title": "MCP Error Response v0",
  "type": "object",
  "required": ["error"],
  "additionalProperties": false,
  "properties": {
    "error": {
      "type": "object",
      "required": ["code", "message"],
      "additionalProperties": false,
      "properties": {
        "code": {
          "type": "string",
          "enum": [
            "resource_not_found",
            "prompt_not_found",
            "unknown_tool",
            "invalid_arguments",
            "internal_error"
          ]
        },
        "message": {
          "type": "string",
          "minLength": 1
        }
      }
    }
  }
}"#;

#[test]
fn golden_mcp_error_schema_validation() {
    // 1. Build a canonical error response
    let response = McpErrorResponse::new(
        McpErrorCode::ResourceNotFound,
        "Resource not found: docs://runbooks",
    );

    let json_str = serde_json::to_string_pretty(&response).unwrap();
    let json_value: Value = serde_json::from_str(&json_str).unwrap();

    // 2. Validate against schema
    let schema_json: Value = serde_json::from_str(ERROR_SCHEMA_V0).unwrap();
    let validator = validator_for(&schema_json).unwrap();
    assert!(validator.is_valid(&json_value), "MCP error JSON must satisfy v0 schema");

    // 3. Golden snapshot (byte-identical, stable)
    let expected = r#"{
  "error": {
    "code": "resource_not_found",
    "message": "Resource not found: docs://runbooks"
  }
}"#;

    assert_eq!(json_str.trim(), expected.trim(), "MCP error JSON snapshot mismatch");
}

#[test]
fn every_canonical_error_satisfies_schema() {
    let schema_json: Value = serde_json::from_str(ERROR_SCHEMA_V0).unwrap();
    let validator = validator_for(&schema_json).unwrap();

    for code in [
        McpErrorCode::ResourceNotFound,
        McpErrorCode::PromptNotFound,
        McpErrorCode::UnknownTool,
        McpErrorCode::InvalidArguments,
        McpErrorCode::InternalError,
    ] {
        let value = serde_json::to_value(McpErrorResponse::canonical(code.clone())).unwrap();
        assert!(validator.is_valid(&value), "{code:?} violates the error schema");
    }
}

#[test]
fn json_rpc_error_carries_structured_data() {
    let rpc: JsonRpcError = McpErrorResponse::canonical(McpErrorCode::PromptNotFound).into();
    assert_eq!(rpc.code, -32602);
    assert_eq!(rpc.message, "Prompt does not exist");
    assert_eq!(rpc.data.unwrap()["error"]["code"], "prompt_not_found");

    let rpc: JsonRpcError = McpErrorResponse::canonical(McpErrorCode::InternalError).into();
    assert_eq!(rpc.code, -32603);
}
