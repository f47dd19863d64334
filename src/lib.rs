//! # Docshelf
//!
//! Serves a shelf of topic-organized text documents to AI agents over the
//! Model Context Protocol.
//!
//! Content lives on disk as a two-level hierarchy: one directory per topic,
//! one markdown file per document. Nothing is indexed or cached; every tool
//! call re-reads the shelf so edits show up immediately.
//!
//! ## Features
//!
//! - Topic catalog with per-topic document listings
//! - Direct document and whole-topic retrieval
//! - Case-insensitive substring search with title/content classification
//! - Index overview, either hand-written or synthesized from the catalog
//! - MCP server over stdio
//!
//! ## Example
//!
//! ```rust,ignore
//! use docshelf::services::ServiceContainer;
//!
//! let services = ServiceContainer::from_config(&config);
//! let hits = services.search().search("billing")?;
//! for hit in hits.items() {
//!     println!("{}/{} ({})", hit.topic, hit.document, hit.match_type);
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod mcp;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use config::DocshelfConfig;
pub use models::{Document, MatchType, SearchResult, Topic, TopicDocuments};
pub use services::{BestEffort, IndexBuilder, SearchService, ServiceContainer, TopicCatalog};
pub use storage::{DocumentStore, FilesystemStore, MemoryStore};

/// Error type for docshelf operations.
///
/// The `Display` text of the lookup variants is part of the tool contract:
/// the dispatcher renders it verbatim after an `Error: ` prefix.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `StoreUnavailable` | The topics directory is missing or unreadable |
/// | `TopicNotFound` | A requested topic directory does not exist or cannot be read |
/// | `DocumentNotFound` | A requested document is absent or unreadable |
/// | `UnknownTool` | A tool call names a tool that is not registered |
/// | `InvalidInput` | Tool arguments are missing, mistyped, or too large |
/// | `OperationFailed` | Config, logging, or stdio I/O fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The content store cannot be enumerated.
    ///
    /// Aggregate operations degrade to an empty result when they see this.
    #[error("content store unavailable at {}: {cause}", path.display())]
    StoreUnavailable {
        /// Location that could not be read.
        path: PathBuf,
        /// The underlying cause.
        cause: String,
    },

    /// A topic was requested that does not exist.
    #[error("Topic '{0}' not found")]
    TopicNotFound(String),

    /// A document was requested that does not exist in its topic.
    #[error("Document '{document}' not found in topic '{topic}'")]
    DocumentNotFound {
        /// Topic that was searched.
        topic: String,
        /// Document name, without extension.
        document: String,
    },

    /// A tool call named an unregistered tool.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - Required tool arguments are missing or not strings
    /// - Unexpected tool arguments are supplied
    /// - A search query exceeds the maximum length
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The configuration file cannot be read or parsed
    /// - Logging cannot be initialized
    /// - Reading stdin or writing stdout fails in the server loop
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for docshelf operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::TopicNotFound("faq".to_string());
        assert_eq!(err.to_string(), "Topic 'faq' not found");

        let err = Error::DocumentNotFound {
            topic: "faq".to_string(),
            document: "missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Document 'missing' not found in topic 'faq'"
        );

        let err = Error::UnknownTool("bogus_tool".to_string());
        assert_eq!(err.to_string(), "Unknown tool: bogus_tool");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");
    }

    #[test]
    fn test_store_unavailable_display() {
        let err = Error::StoreUnavailable {
            path: PathBuf::from("content/topics"),
            cause: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "content store unavailable at content/topics: No such file or directory"
        );
    }
}
