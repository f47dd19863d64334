//! Tool definitions for MCP tools.
//!
//! Contains the JSON Schema definitions for all docshelf tools. Tool and
//! field names are a compatibility contract with existing clients.

use super::ToolDefinition;

/// Returns every tool definition in advertisement order.
pub fn all() -> Vec<ToolDefinition> {
    vec![
        list_topics_tool(),
        get_document_tool(),
        get_topic_tool(),
        search_tool(),
        get_index_tool(),
    ]
}

/// Defines the topic listing tool.
pub fn list_topics_tool() -> ToolDefinition {
    ToolDefinition {
        name: "list_topics".to_string(),
        description: "List all available information topics and their documents".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        }),
    }
}

/// Defines the document fetch tool.
pub fn get_document_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_document".to_string(),
        description: "Get a specific document from a topic".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic name (folder name)"
                },
                "document": {
                    "type": "string",
                    "description": "The document name (without .md extension)"
                }
            },
            "required": ["topic", "document"]
        }),
    }
}

/// Defines the whole-topic fetch tool.
pub fn get_topic_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_topic".to_string(),
        description: "Get all documents from a specific topic".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The topic name to retrieve all documents from"
                }
            },
            "required": ["topic"]
        }),
    }
}

/// Defines the search tool.
pub fn search_tool() -> ToolDefinition {
    ToolDefinition {
        name: "search".to_string(),
        description: "Search across all documents for a query".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search term to find in document titles and content"
                }
            },
            "required": ["query"]
        }),
    }
}

/// Defines the index tool.
pub fn get_index_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_index".to_string(),
        description: "Get the main index/overview of all available information".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        }),
    }
}
