use serde_json::{json, Value};

use crate::knowledge::KnowledgeBase;
use crate::protocol::{GetServiceInfoParams, ToolResult};

use super::tools::parse_arguments;

pub const NAME: &str = "get_service_info";

pub const DESCRIPTION: &str = "Returns information about a specific service in our architecture: \
tech stack, responsibilities, and API endpoints.";

pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "required": ["service_name"],
        "properties": {
            "service_name": {
                "type": "string",
                "description": "Name of the service (e.g., \"user-service\", \"order-service\")"
            }
        }
    })
}

pub fn call(arguments: &Value, knowledge: &KnowledgeBase) -> ToolResult {
    match parse_arguments::<GetServiceInfoParams>(NAME, arguments) {
        Ok(params) => handle(params, knowledge),
        Err(err) => err,
    }
}

pub fn handle(params: GetServiceInfoParams, knowledge: &KnowledgeBase) -> ToolResult {
    ToolResult::text(knowledge.get_service(&params.service_name))
}
