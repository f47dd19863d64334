//! Argument types for MCP tools.
//!
//! Tool calls arrive as a name plus a loosely-typed JSON argument object.
//! [`ToolRequest::parse`] turns that pair into one validated variant per
//! tool, so handlers never see missing or mistyped fields.
//!
//! Argument structs use `#[serde(deny_unknown_fields)]`: a misspelled field
//! is reported instead of silently ignored.

use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Arguments for the `get_document` tool.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetDocumentArgs {
    /// Topic name (folder name).
    pub topic: String,
    /// Document name, without extension.
    pub document: String,
}

/// Arguments for the `get_topic` tool.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetTopicArgs {
    /// Topic to retrieve all documents from.
    pub topic: String,
}

/// Arguments for the `search` tool.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchArgs {
    /// Term to find in document names and bodies.
    pub query: String,
}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    /// List every topic with its documents.
    ListTopics,
    /// Fetch one document.
    GetDocument {
        /// Topic name.
        topic: String,
        /// Document name.
        document: String,
    },
    /// Fetch every document of a topic.
    GetTopic {
        /// Topic name.
        topic: String,
    },
    /// Search all documents.
    Search {
        /// Search query.
        query: String,
    },
    /// Fetch the shelf overview.
    GetIndex,
}

impl ToolRequest {
    /// Parses a tool name and its JSON arguments.
    ///
    /// `null` arguments are treated as an empty object. Tools without
    /// parameters ignore whatever arguments they are given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTool`] for an unregistered name and
    /// [`Error::InvalidInput`] when required arguments are missing, are not
    /// strings, or unexpected fields are present.
    pub fn parse(name: &str, arguments: Value) -> Result<Self> {
        let arguments = if arguments.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            arguments
        };

        match name {
            "list_topics" => Ok(Self::ListTopics),
            "get_document" => {
                let args: GetDocumentArgs = parse_args(arguments)?;
                Ok(Self::GetDocument {
                    topic: args.topic,
                    document: args.document,
                })
            },
            "get_topic" => {
                let args: GetTopicArgs = parse_args(arguments)?;
                Ok(Self::GetTopic { topic: args.topic })
            },
            "search" => {
                let args: SearchArgs = parse_args(arguments)?;
                Ok(Self::Search { query: args.query })
            },
            "get_index" => Ok(Self::GetIndex),
            unknown => Err(Error::UnknownTool(unknown.to_string())),
        }
    }

    /// Returns the tool name of this request.
    #[must_use]
    pub const fn tool_name(&self) -> &'static str {
        match self {
            Self::ListTopics => "list_topics",
            Self::GetDocument { .. } => "get_document",
            Self::GetTopic { .. } => "get_topic",
            Self::Search { .. } => "search",
            Self::GetIndex => "get_index",
        }
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| Error::InvalidInput(e.to_string()))
}
