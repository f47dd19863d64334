//! MCP tool implementations.
//!
//! # Module Structure
//!
//! - [`definitions`]: Tool schema definitions (JSON Schema for input validation)
//! - [`handlers`]: Tool execution and text rendering

mod definitions;
mod handlers;

use crate::Result;
use crate::mcp::tool_types::ToolRequest;
use crate::services::ServiceContainer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registry of MCP tools bound to a set of services.
pub struct ToolRegistry {
    /// Available tools, in advertisement order.
    tools: Vec<ToolDefinition>,
    /// Services the handlers run against.
    services: ServiceContainer,
}

impl ToolRegistry {
    /// Creates a registry with all docshelf tools.
    #[must_use]
    pub fn new(services: ServiceContainer) -> Self {
        Self {
            tools: definitions::all(),
            services,
        }
    }

    /// Returns all tool definitions.
    #[must_use]
    pub fn list_tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Gets a tool definition by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Executes a tool with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is unknown, the arguments are invalid,
    /// or the requested topic or document cannot be found.
    pub fn execute(&self, name: &str, arguments: Value) -> Result<ToolResult> {
        let request = ToolRequest::parse(name, arguments)?;
        self.execute_request(&request)
    }

    /// Executes an already validated request.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested topic or document cannot be found
    /// or the search query is rejected.
    pub fn execute_request(&self, request: &ToolRequest) -> Result<ToolResult> {
        match request {
            ToolRequest::ListTopics => handlers::execute_list_topics(&self.services),
            ToolRequest::GetDocument { topic, document } => {
                handlers::execute_get_document(&self.services, topic, document)
            },
            ToolRequest::GetTopic { topic } => handlers::execute_get_topic(&self.services, topic),
            ToolRequest::Search { query } => handlers::execute_search(&self.services, query),
            ToolRequest::GetIndex => handlers::execute_get_index(&self.services),
        }
    }

    /// Executes a tool, rendering any failure as an error result.
    ///
    /// Never fails: errors become a single `Error: <message>` text block
    /// with `is_error` set.
    #[must_use]
    pub fn call(&self, name: &str, arguments: Value) -> ToolResult {
        self.execute(name, arguments).unwrap_or_else(|e| {
            tracing::debug!(tool = name, error = %e, "Tool call failed");
            ToolResult::error(format!("Error: {e}"))
        })
    }
}

/// Definition of an MCP tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for input validation.
    pub input_schema: Value,
}

/// Result of a tool execution.
///
/// An error result always carries exactly one text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the result represents an error.
    #[serde(default)]
    pub is_error: bool,
}

impl ToolResult {
    /// Creates a successful single-text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error result.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: true,
        }
    }

    /// Returns the text of the first content block.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| match c {
            ToolContent::Text { text } => text.as_str(),
        })
    }
}

/// Content types that can be returned by tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}
