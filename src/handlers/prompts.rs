use crate::knowledge::templates::PromptTemplate;
use crate::protocol::{
    McpErrorCode, McpErrorResponse, PromptDescriptor, PromptGetParams, PromptMessage, PromptResult,
};

/// Handle `prompts/list`.
pub fn list() -> Vec<PromptDescriptor> {
    PromptTemplate::ALL
        .iter()
        .map(|t| PromptDescriptor {
            name: t.name().to_string(),
            description: t.description().to_string(),
            arguments: Vec::new(),
        })
        .collect()
}

/// Handle `prompts/get`. The template text is returned as a single user
/// message.
pub fn get(params: &PromptGetParams) -> Result<PromptResult, McpErrorResponse> {
    let template = PromptTemplate::from_name(&params.name).ok_or_else(|| {
        tracing::warn!(prompt = %params.name, "prompt not found");
        McpErrorResponse::new(
            McpErrorCode::PromptNotFound,
            format!("Prompt not found: {}", params.name),
        )
    })?;

    Ok(PromptResult {
        description: template.description().to_string(),
        messages: vec![PromptMessage::user(template.text())],
    })
}
