//! Read-only resources: one per document plus the decision record index.

use crate::knowledge::KnowledgeBase;
use crate::protocol::{
    McpErrorCode, McpErrorResponse, ResourceContents, ResourceDescriptor, ResourceReadParams,
};

const MARKDOWN: &str = "text/markdown";
const DOCS_SCHEME: &str = "docs://";
const ADR_LIST_URI: &str = "adr://list";

/// A parsed resource address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Document(String),
    DecisionList,
}

impl ResourceUri {
    pub fn parse(uri: &str) -> Option<Self> {
        if uri == ADR_LIST_URI {
            return Some(Self::DecisionList);
        }
        uri.strip_prefix(DOCS_SCHEME)
            .filter(|name| !name.is_empty())
            .map(|name| Self::Document(name.to_string()))
    }

    pub fn document(name: &str) -> String {
        format!("{DOCS_SCHEME}{name}")
    }
}

/// Handle `resources/list`. Documents come first, in registry order.
pub fn list(knowledge: &KnowledgeBase) -> Vec<ResourceDescriptor> {
    let mut resources: Vec<ResourceDescriptor> = knowledge
        .documents()
        .map(|doc| ResourceDescriptor {
            uri: ResourceUri::document(&doc.name),
            name: doc.name.clone(),
            description: doc.description.clone(),
            mime_type: MARKDOWN.to_string(),
        })
        .collect();

    resources.push(ResourceDescriptor {
        uri: ADR_LIST_URI.to_string(),
        name: "adr-list".to_string(),
        description: "List of all Architecture Decision Records".to_string(),
        mime_type: MARKDOWN.to_string(),
    });

    resources
}

/// Handle `resources/read`.
pub fn read(
    params: &ResourceReadParams,
    knowledge: &KnowledgeBase,
) -> Result<ResourceContents, McpErrorResponse> {
    let text = match ResourceUri::parse(&params.uri) {
        Some(ResourceUri::DecisionList) => Some(knowledge.list_records()),
        Some(ResourceUri::Document(name)) => knowledge.document(&name).map(str::to_string),
        None => None,
    };

    match text {
        Some(text) => Ok(ResourceContents {
            uri: params.uri.clone(),
            mime_type: MARKDOWN.to_string(),
            text,
        }),
        None => {
            tracing::warn!(uri = %params.uri, "resource not found");
            Err(McpErrorResponse::new(
                McpErrorCode::ResourceNotFound,
                format!("Resource not found: {}", params.uri),
            ))
        }
    }
}
