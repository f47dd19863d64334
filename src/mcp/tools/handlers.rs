//! Tool execution handlers.
//!
//! Each handler calls one service and renders its result as markdown text.
//! The exact rendering is what clients see, so keep it stable.

use crate::Result;
use crate::models::{SearchResult, Topic, TopicDocuments};
use crate::services::ServiceContainer;
use std::fmt::Write as _;

use super::ToolResult;

/// Shown by `list_topics` when the shelf has no topics.
const NO_TOPICS_HINT: &str =
    "No topics found. Add markdown files to content/topics/<topic-name>/ to get started.\n";

/// Shown by `search` when nothing matched.
const NO_RESULTS: &str = "No documents found matching your search.\n";

/// Executes the `list_topics` tool.
pub fn execute_list_topics(services: &ServiceContainer) -> Result<ToolResult> {
    let topics = services.catalog().list_topics();
    Ok(ToolResult::text(render_topics(topics.items())))
}

/// Executes the `get_document` tool.
pub fn execute_get_document(
    services: &ServiceContainer,
    topic: &str,
    document: &str,
) -> Result<ToolResult> {
    let doc = services.catalog().get_document(topic, document)?;
    Ok(ToolResult::text(format!(
        "# {}\n\n**Topic:** {}\n\n---\n\n{}",
        doc.name, doc.topic, doc.content
    )))
}

/// Executes the `get_topic` tool.
pub fn execute_get_topic(services: &ServiceContainer, topic: &str) -> Result<ToolResult> {
    let documents = services.catalog().get_topic(topic)?;
    Ok(ToolResult::text(render_topic(&documents)))
}

/// Executes the `search` tool.
pub fn execute_search(services: &ServiceContainer, query: &str) -> Result<ToolResult> {
    let results = services.search().search(query)?;
    Ok(ToolResult::text(render_search(query, results.items())))
}

/// Executes the `get_index` tool.
pub fn execute_get_index(services: &ServiceContainer) -> Result<ToolResult> {
    Ok(ToolResult::text(services.index().get_index()))
}

fn render_topics(topics: &[Topic]) -> String {
    let mut output = String::from("# Available Topics\n\n");

    if topics.is_empty() {
        output.push_str(NO_TOPICS_HINT);
        return output;
    }

    for topic in topics {
        let _ = writeln!(output, "## {}", topic.name);
        let _ = writeln!(output, "Documents ({}):", topic.document_count());
        for doc in &topic.documents {
            let _ = writeln!(output, "- {doc}");
        }
        output.push('\n');
    }
    output
}

fn render_topic(topic: &TopicDocuments) -> String {
    let mut output = format!("# Topic: {}\n\n", topic.topic);
    for doc in &topic.documents {
        let _ = write!(output, "## {}\n\n{}\n\n---\n\n", doc.name, doc.content);
    }
    output
}

fn render_search(query: &str, results: &[SearchResult]) -> String {
    let mut output = format!("# Search Results for \"{query}\"\n\n");

    if results.is_empty() {
        output.push_str(NO_RESULTS);
        return output;
    }

    let _ = write!(output, "Found {} result(s):\n\n", results.len());
    for result in results {
        let _ = writeln!(output, "## {} ({})", result.document, result.topic);
        let _ = write!(output, "*Matched by: {}*\n\n", result.match_type);
        let _ = write!(output, "> {}...\n\n", result.preview);
    }
    output
}
