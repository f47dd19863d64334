//! Data models for docshelf.
//!
//! Everything here is plain value data recomputed on every call; nothing
//! holds a reference back into the store.

mod document;
mod search;
mod topic;

pub use document::{Document, TopicDocuments};
pub use search::{MAX_PREVIEW_CHARS, MatchType, SearchResult};
pub use topic::Topic;
