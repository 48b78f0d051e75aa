use company_docs_server::handlers::tools::TOOLS;
use company_docs_server::schema::{validate_json, ArgumentValidator, SchemaValidationError};
use serde_json::json;

#[test]
fn json_schema_harness_validates_instance() {
    let schema = r#"{
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "type": "object",
      "required": ["error"],
      "additionalProperties": false,
      "properties": {
        "error": {
          "type": "object",
          "required": ["code", "message"],
          "additionalProperties": false,
          "properties": {
            "code": { "type": "string" },
            "message": { "type": "string", "minLength": 1 }
          }
        }
      }
    }"#;

    let instance = r#"{
      "error": {
        "code": "resource_not_found",
        "message": "Resource not found: docs://runbooks"
      }
    }"#;

    validate_json(schema, instance).expect("schema validation failed");
}

#[test]
fn every_tool_schema_compiles() {
    for tool in TOOLS {
        let schema = (tool.input_schema)();
        ArgumentValidator::compile(&schema)
            .unwrap_or_else(|e| panic!("{} schema does not compile: {e}", tool.name));
    }
}

#[test]
fn tool_schemas_require_their_arguments() {
    let cases = [
        ("search_docs", json!({ "query": "jwt" })),
        ("get_adr", json!({ "adr_id": "ADR-001" })),
        ("get_service_info", json!({ "service_name": "user-service" })),
        ("check_naming_convention", json!({ "name": "userName" })),
    ];

    for (name, valid) in cases {
        let tool = TOOLS.iter().find(|t| t.name == name).unwrap();
        let validator = ArgumentValidator::compile(&(tool.input_schema)()).unwrap();

        validator
            .validate(&valid)
            .unwrap_or_else(|e| panic!("{name} rejected valid arguments: {e}"));
        assert!(
            matches!(
                validator.validate(&json!({})),
                Err(SchemaValidationError::ValidationFailed(_))
            ),
            "{name} accepted empty arguments"
        );
    }
}

#[test]
fn naming_context_is_free_text() {
    let tool = TOOLS
        .iter()
        .find(|t| t.name == "check_naming_convention")
        .unwrap();
    let validator = ArgumentValidator::compile(&(tool.input_schema)()).unwrap();
    assert!(validator
        .validate(&json!({ "name": "x", "context": "whatever" }))
        .is_ok());
}
