use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::knowledge::KnowledgeBase;
use crate::protocol::{McpErrorCode, McpErrorResponse, ToolCallParams, ToolDescriptor, ToolResult};
use crate::schema::{ArgumentValidator, SchemaValidationError};

use super::{check_naming_convention, get_adr, get_service_info, search_docs};

/// Static description of a callable tool.
pub struct ToolEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Value,
    pub call: fn(&Value, &KnowledgeBase) -> ToolResult,
}

/// Every tool the server exposes, in advertised order.
pub const TOOLS: &[ToolEntry] = &[
    ToolEntry {
        name: search_docs::NAME,
        description: search_docs::DESCRIPTION,
        input_schema: search_docs::input_schema,
        call: search_docs::call,
    },
    ToolEntry {
        name: get_adr::NAME,
        description: get_adr::DESCRIPTION,
        input_schema: get_adr::input_schema,
        call: get_adr::call,
    },
    ToolEntry {
        name: get_service_info::NAME,
        description: get_service_info::DESCRIPTION,
        input_schema: get_service_info::input_schema,
        call: get_service_info::call,
    },
    ToolEntry {
        name: check_naming_convention::NAME,
        description: check_naming_convention::DESCRIPTION,
        input_schema: check_naming_convention::input_schema,
        call: check_naming_convention::call,
    },
];

struct RegisteredTool {
    entry: &'static ToolEntry,
    schema: Value,
    validator: ArgumentValidator,
}

/// Tool table with argument schemas compiled once at startup.
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Result<Self, SchemaValidationError> {
        Self::from_entries(TOOLS)
    }

    pub fn from_entries(entries: &'static [ToolEntry]) -> Result<Self, SchemaValidationError> {
        let tools = entries
            .iter()
            .map(|entry| {
                let schema = (entry.input_schema)();
                let validator = ArgumentValidator::compile(&schema)?;
                Ok(RegisteredTool {
                    entry,
                    schema,
                    validator,
                })
            })
            .collect::<Result<Vec<_>, SchemaValidationError>>()?;
        Ok(Self { tools })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|t| t.entry.name)
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| ToolDescriptor {
                name: t.entry.name.to_string(),
                description: t.entry.description.to_string(),
                input_schema: t.schema.clone(),
            })
            .collect()
    }

    /// Resolve a `tools/call` by name, validate its arguments, and run it.
    ///
    /// Every failure is reported as a tool result with `isError: true`.
    pub fn call(&self, params: &ToolCallParams, knowledge: &KnowledgeBase) -> ToolResult {
        let Some(tool) = self.tools.iter().find(|t| t.entry.name == params.name) else {
            tracing::warn!(tool = %params.name, "unknown tool");
            return McpErrorResponse::new(
                McpErrorCode::UnknownTool,
                format!("Unknown tool: {}", params.name),
            )
            .into();
        };

        let arguments = params
            .arguments
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default()));

        if let Err(e) = tool.validator.validate(&arguments) {
            tracing::warn!(tool = tool.entry.name, "argument validation failed: {e}");
            return invalid_arguments(tool.entry.name, e);
        }

        tracing::debug!(tool = tool.entry.name, "tool call");
        (tool.entry.call)(&arguments, knowledge)
    }
}

fn invalid_arguments(tool: &str, err: impl std::fmt::Display) -> ToolResult {
    McpErrorResponse::new(
        McpErrorCode::InvalidArguments,
        format!("Invalid arguments for {tool}: {err}"),
    )
    .into()
}

/// Deserialize tool arguments, turning failures into an error tool result.
pub fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: &Value) -> Result<T, ToolResult> {
    serde_json::from_value(arguments.clone()).map_err(|e| invalid_arguments(tool, e))
}
