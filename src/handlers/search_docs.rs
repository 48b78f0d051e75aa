use serde_json::{json, Value};

use crate::knowledge::KnowledgeBase;
use crate::protocol::{SearchDocsParams, ToolResult};

use super::tools::parse_arguments;

pub const NAME: &str = "search_docs";

pub const DESCRIPTION: &str = "Searches all documentation for relevant information. \
Returns matching documentation sections with surrounding context.";

pub fn input_schema() -> Value {
    json!({
        "type": "object",
        "required": ["query"],
        "properties": {
            "query": {
                "type": "string",
                "description": "The search query (keywords or natural language)"
            }
        }
    })
}

pub fn call(arguments: &Value, knowledge: &KnowledgeBase) -> ToolResult {
    match parse_arguments::<SearchDocsParams>(NAME, arguments) {
        Ok(params) => handle(params, knowledge),
        Err(err) => err,
    }
}

/// Handle a `search_docs` tool call.
///
/// A query that matches nothing is still a successful call; the text says so.
pub fn handle(params: SearchDocsParams, knowledge: &KnowledgeBase) -> ToolResult {
    ToolResult::text(knowledge.search(&params.query))
}
