use serde_json::{json, Value};

use crate::knowledge::KnowledgeBase;
use crate::protocol::{GetAdrParams, ToolResult};

use super::tools::parse_arguments;

pub const NAME: &str = "get_adr";

pub const DESCRIPTION: &str = "Retrieves a specific Architecture Decision Record.";

pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "required": ["adr_id"],
        "properties": {
            "adr_id": {
                "type": "string",
                "description": "The ADR identifier (e.g., \"ADR-001\")"
            }
        }
    })
}

pub fn call(arguments: &Value, knowledge: &KnowledgeBase) -> ToolResult {
    match parse_arguments::<GetAdrParams>(NAME, arguments) {
        Ok(params) => handle(params, knowledge),
        Err(err) => err,
    }
}

pub fn handle(params: GetAdrParams, knowledge: &KnowledgeBase) -> ToolResult {
    ToolResult::text(knowledge.get_record(&params.adr_id))
}
