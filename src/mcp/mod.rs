//! MCP server implementation.
//!
//! Exposes the shelf to AI agents over the Model Context Protocol.
//!
//! ## Tools
//!
//! `list_topics`, `get_document`, `get_topic`, `search`, `get_index`
//!
//! ## Usage
//!
//! ```bash
//! docshelf --content-root ./content serve
//! ```
//!
//! ### Client Configuration
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "docshelf": {
//!       "command": "docshelf",
//!       "args": ["--content-root", "/path/to/content", "serve"]
//!     }
//!   }
//! }
//! ```

mod dispatch;
mod server;
pub mod tool_types;
mod tools;

pub use dispatch::McpMethod;
pub use server::{MAX_REQUEST_BODY_SIZE, McpServer, PROTOCOL_VERSION};
pub use tool_types::ToolRequest;
pub use tools::{ToolContent, ToolDefinition, ToolRegistry, ToolResult};
