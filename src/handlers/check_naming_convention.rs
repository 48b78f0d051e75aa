use serde_json::{json, Value};

use crate::knowledge::KnowledgeBase;
use crate::protocol::{CheckNamingParams, ToolResult};

use super::tools::parse_arguments;

pub const NAME: &str = "check_naming_convention";

pub const DESCRIPTION: &str = "Validates a name against our coding standards.";

pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {
                "type": "string",
                "description": "The name to validate"
            },
            "context": {
                "type": "string",
                "description": "The naming context - \"variable\", \"function\", \"class\", \"interface\", \"constant\", or \"file\"",
                "default": "variable"
            }
        }
    })
}

pub fn call(arguments: &Value, knowledge: &KnowledgeBase) -> ToolResult {
    match parse_arguments::<CheckNamingParams>(NAME, arguments) {
        Ok(params) => handle(params, knowledge),
        Err(err) => err,
    }
}

/// Handle a `check_naming_convention` tool call.
///
/// A non-conforming name or an unknown context is reported in the text, not
/// flagged as a tool error.
pub fn handle(params: CheckNamingParams, knowledge: &KnowledgeBase) -> ToolResult {
    ToolResult::text(knowledge.check_naming_convention(&params.name, &params.context))
}
