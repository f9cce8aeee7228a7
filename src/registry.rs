//! Ordered registry of resolved pages.
//!
//! One registry lives for the duration of a watch session and is owned by
//! the sync engine - never module-level state. Insertion order is the
//! order routes appear in the generated module, and first-listed wins
//! under ambiguous matching in most routers, so order is semantics here.

use indexmap::IndexMap;

use crate::resolver::PageDescriptor;

/// Ordered mapping from component identifier to descriptor.
#[derive(Debug, Default)]
pub struct PageRegistry {
    entries: IndexMap<String, PageDescriptor>,
}

impl PageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry at the descriptor's identifier.
    ///
    /// Replacing an existing identifier keeps its position; the previous
    /// descriptor is returned so the caller can surface a collision when
    /// the source path differs. The later write wins either way.
    pub fn upsert(&mut self, descriptor: PageDescriptor) -> Option<PageDescriptor> {
        self.entries
            .insert(descriptor.component_identifier.clone(), descriptor)
    }

    /// Delete the entry for an identifier, preserving the order of the
    /// rest. Absent identifiers are a no-op, not an error.
    pub fn remove(&mut self, component_identifier: &str) -> Option<PageDescriptor> {
        self.entries.shift_remove(component_identifier)
    }

    /// Point-in-time ordered copy of all descriptors.
    pub fn snapshot(&self) -> Vec<PageDescriptor> {
        self.entries.values().cloned().collect()
    }

    pub fn contains(&self, component_identifier: &str) -> bool {
        self.entries.contains_key(component_identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
