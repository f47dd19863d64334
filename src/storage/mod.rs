//! Storage layer abstraction.
//!
//! The shelf is a read-only, two-level hierarchy: topics contain documents.
//! Backends:
//! - **Filesystem**: one directory per topic, one file per document
//! - **Memory**: ordered in-memory topics for tests and embedding
//!
//! No backend caches. Every call touches storage, so edits to the shelf are
//! visible on the next request.

mod filesystem;
mod memory;
pub mod traits;

pub use filesystem::{
    DEFAULT_EXTENSION, DEFAULT_OVERVIEW_FILE, DEFAULT_TOPICS_DIR, FilesystemStore, is_safe_name,
};
pub use memory::MemoryStore;
pub use traits::DocumentStore;
