//! MCP Server End-to-End Tests
//!
//! Exercises the server against a real content tree on disk:
//! - Tool registration and discovery
//! - Tool execution and exact text rendering
//! - Error handling and error response format
//! - JSON-RPC request/response format compliance

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::uninlined_format_args
)]

use docshelf::config::DocshelfConfig;
use docshelf::mcp::{McpServer, ToolRegistry, ToolResult};
use docshelf::services::ServiceContainer;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_doc(root: &Path, topic: &str, name: &str, content: &str) {
    let dir = root.join("topics").join(topic);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.md")), content).unwrap();
}

/// Content tree with `faq/billing` and `faq/shipping`.
fn faq_shelf() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "faq", "billing", "Billing cycles run monthly.\n");
    write_doc(dir.path(), "faq", "shipping", "\nWe ship worldwide.\n\n");
    dir
}

fn services(root: &Path) -> ServiceContainer {
    ServiceContainer::from_config(&DocshelfConfig::new().with_content_root(root))
}

fn text(result: &ToolResult) -> &str {
    result.first_text().expect("tool result has text")
}

// ============================================================================
// Tool Registry Tests
// ============================================================================

mod tool_registry {
    use super::*;

    #[test]
    fn test_registry_advertises_five_tools_in_order() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let names: Vec<&str> = registry
            .list_tools()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["list_topics", "get_document", "get_topic", "search", "get_index"]
        );

        for tool in registry.list_tools() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
            assert!(tool.input_schema["properties"].is_object(), "{}", tool.name);
            assert!(tool.input_schema["required"].is_array(), "{}", tool.name);
        }
    }

    #[test]
    fn test_list_topics() {
        let shelf = faq_shelf();
        fs::create_dir_all(shelf.path().join("topics/drafts")).unwrap();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("list_topics", json!({}));

        assert!(!result.is_error);
        assert_eq!(
            text(&result),
            "# Available Topics\n\n\
             ## drafts\nDocuments (0):\n\n\
             ## faq\nDocuments (2):\n- billing\n- shipping\n\n"
        );
    }

    #[test]
    fn test_list_topics_without_topics_directory() {
        let empty = TempDir::new().unwrap();
        let registry = ToolRegistry::new(services(empty.path()));

        let result = registry.call("list_topics", Value::Null);

        assert!(!result.is_error);
        assert_eq!(
            text(&result),
            "# Available Topics\n\nNo topics found. Add markdown files to content/topics/<topic-name>/ to get started.\n"
        );
    }

    #[test]
    fn test_get_document_is_trimmed() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call(
            "get_document",
            json!({"topic": "faq", "document": "shipping"}),
        );

        assert!(!result.is_error);
        assert_eq!(
            text(&result),
            "# shipping\n\n**Topic:** faq\n\n---\n\nWe ship worldwide."
        );
    }

    #[test]
    fn test_get_missing_document() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call(
            "get_document",
            json!({"topic": "faq", "document": "missing"}),
        );

        assert!(result.is_error);
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            text(&result),
            "Error: Document 'missing' not found in topic 'faq'"
        );
    }

    #[test]
    fn test_get_topic() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("get_topic", json!({"topic": "faq"}));

        assert!(!result.is_error);
        assert_eq!(
            text(&result),
            "# Topic: faq\n\n\
             ## billing\n\nBilling cycles run monthly.\n\n---\n\n\
             ## shipping\n\nWe ship worldwide.\n\n---\n\n"
        );
    }

    #[test]
    fn test_get_missing_topic() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("get_topic", json!({"topic": "nope"}));

        assert!(result.is_error);
        assert_eq!(text(&result), "Error: Topic 'nope' not found");
    }

    #[test]
    fn test_search_title_match() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("search", json!({"query": "ship"}));

        assert!(!result.is_error);
        assert_eq!(
            text(&result),
            "# Search Results for \"ship\"\n\n\
             Found 1 result(s):\n\n\
             ## shipping (faq)\n*Matched by: title*\n\n> We ship worldwide....\n\n"
        );
    }

    #[test]
    fn test_search_no_results() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("search", json!({"query": "refund"}));

        assert!(!result.is_error);
        assert!(text(&result).ends_with("No documents found matching your search.\n"));
    }

    #[test]
    fn test_get_index_prefers_overview() {
        let shelf = faq_shelf();
        fs::write(shelf.path().join("index.md"), "\n# Handbook\n\nStart here.\n").unwrap();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("get_index", json!({}));

        assert_eq!(text(&result), "# Handbook\n\nStart here.");
    }

    #[test]
    fn test_get_index_synthesized() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("get_index", json!({}));

        assert_eq!(
            text(&result),
            "# Information Index\n\nAvailable topics:\n\n\
             ## faq\n2 document(s): billing, shipping\n\n"
        );
    }

    #[test]
    fn test_get_index_without_content() {
        let empty = TempDir::new().unwrap();
        let registry = ToolRegistry::new(services(empty.path()));

        let index = registry.call("get_index", json!({}));

        assert!(text(&index).contains("Available topics:"));
        assert!(!text(&index).contains("## "));
    }

    #[test]
    fn test_unknown_tool() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call("bogus_tool", json!({}));

        assert!(result.is_error);
        assert!(text(&result).contains("bogus_tool"));
    }

    #[test]
    fn test_path_traversal_is_not_found() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));

        let result = registry.call(
            "get_document",
            json!({"topic": "..", "document": "index"}),
        );

        assert!(result.is_error);
        assert!(text(&result).starts_with("Error: Document 'index' not found"));
    }

    #[test]
    fn test_edits_are_visible_without_restart() {
        let shelf = faq_shelf();
        let registry = ToolRegistry::new(services(shelf.path()));
        let before = registry.call("search", json!({"query": "refund"}));
        assert!(text(&before).contains("No documents found"));

        write_doc(shelf.path(), "faq", "refunds", "Refunds take 5 days.");

        let result = registry.call("search", json!({"query": "refund"}));
        assert!(text(&result).contains("## refunds (faq)"));
    }
}

// ============================================================================
// JSON-RPC Format Tests
// ============================================================================

mod json_rpc {
    use super::*;

    fn roundtrip(server: &McpServer, request: &Value) -> Value {
        let response = server
            .handle_request(&request.to_string())
            .expect("request has an id");
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn test_session_over_stream() {
        let shelf = faq_shelf();
        let server = McpServer::new(services(shelf.path()));

        let input = [
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
                "protocolVersion": "2024-11-05", "capabilities": {},
                "clientInfo": {"name": "test", "version": "0"}
            }}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {
                "name": "get_document", "arguments": {"topic": "faq", "document": "billing"}
            }}),
        ]
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n");

        let mut output = Vec::new();
        server.serve(input.as_bytes(), &mut output).unwrap();

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(responses.len(), 3);
        for response in &responses {
            assert_eq!(response["jsonrpc"], "2.0");
        }
        assert_eq!(responses[0]["result"]["serverInfo"]["name"], "docshelf");
        assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 5);
        assert_eq!(
            responses[2]["result"]["content"][0]["text"],
            "# billing\n\n**Topic:** faq\n\n---\n\nBilling cycles run monthly."
        );
        assert_eq!(responses[2]["result"]["isError"], false);
    }

    #[test]
    fn test_tool_error_format() {
        let shelf = faq_shelf();
        let server = McpServer::new(services(shelf.path()));

        let response = roundtrip(
            &server,
            &json!({"jsonrpc": "2.0", "id": 7, "method": "tools/call", "params": {
                "name": "get_document", "arguments": {"topic": "faq", "document": "missing"}
            }}),
        );

        assert_eq!(response["id"], 7);
        assert_eq!(
            response["result"],
            json!({
                "content": [{"type": "text", "text": "Error: Document 'missing' not found in topic 'faq'"}],
                "isError": true
            })
        );
    }

    #[test]
    fn test_invalid_arguments_are_tool_errors() {
        let shelf = faq_shelf();
        let server = McpServer::new(services(shelf.path()));

        let response = roundtrip(
            &server,
            &json!({"jsonrpc": "2.0", "id": 8, "method": "tools/call", "params": {
                "name": "search", "arguments": {"q": "ship"}
            }}),
        );

        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Error: invalid input:"), "{}", text);
    }

    #[test]
    fn test_error_codes() {
        let shelf = faq_shelf();
        let server = McpServer::new(services(shelf.path()));

        let parse = serde_json::from_str::<Value>(&server.handle_request("not json").unwrap()).unwrap();
        assert_eq!(parse["error"]["code"], -32700);

        let unknown = roundtrip(
            &server,
            &json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"}),
        );
        assert_eq!(unknown["error"]["code"], -32601);

        let missing = roundtrip(
            &server,
            &json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call", "params": {"arguments": {}}}),
        );
        assert_eq!(missing["error"]["code"], -32602);
    }
}
