//! Best-effort aggregation.
//!
//! Aggregate scans (listing every topic, searching every document) must not
//! fail because one item is broken. Instead of `continue`-ing past errors
//! inside a loop, scans collect into a [`BestEffort`], which keeps the
//! successes and records what was skipped and why.

use crate::Error;

/// An item that an aggregate scan skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Identifier of the skipped item, e.g. `faq` or `faq/billing`.
    pub item: String,
    /// Why the item was skipped.
    pub reason: String,
}

/// Outcome of an aggregate scan: the items that succeeded plus the skips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestEffort<T> {
    items: Vec<T>,
    skipped: Vec<Skipped>,
}

impl<T> Default for BestEffort<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> BestEffort<T> {
    /// Creates an empty outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Records a skipped item. Logging is left to the caller.
    pub fn skip(&mut self, item: impl Into<String>, error: &Error) {
        self.skipped.push(Skipped {
            item: item.into(),
            reason: error.to_string(),
        });
    }

    /// Copies the skips of an earlier stage into this outcome.
    pub fn carry_skipped<U>(&mut self, earlier: &BestEffort<U>) {
        self.skipped.extend_from_slice(&earlier.skipped);
    }

    /// Returns the successful items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns what was skipped.
    #[must_use]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Returns the number of successful items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no item succeeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the outcome, returning the successful items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
