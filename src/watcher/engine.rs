//! Per-event synchronization pipeline.
//!
//! The engine owns the registry for one watch session and runs the
//! resolve -> mutate -> generate -> write sequence for a single event.
//! Callers must run each call to completion before starting the next;
//! the session loop provides that serialization.

use std::path::{Path, PathBuf};

use crate::generate;
use crate::registry::PageRegistry;
use crate::resolver::{self, PAGE_EXTENSIONS, PageDescriptor};
use crate::templates;

use super::error::WatchError;

/// Session-scoped pipeline state: the registry plus the two paths every
/// regeneration needs.
#[derive(Debug)]
pub struct SyncEngine {
    pages_root: PathBuf,
    output_path: PathBuf,
    registry: PageRegistry,
}

impl SyncEngine {
    /// Create an engine with an empty registry.
    ///
    /// `pages_root` and `output_path` must share a base, since the import
    /// prefix of the generated module is computed between them.
    pub fn new(pages_root: PathBuf, output_path: PathBuf) -> Self {
        Self {
            pages_root,
            output_path,
            registry: PageRegistry::new(),
        }
    }

    /// Whether an event path is a page file this engine cares about.
    ///
    /// Anything outside the pages root or without a recognized extension
    /// is ignored without side effects.
    pub fn matches(&self, path: &Path) -> bool {
        path.starts_with(&self.pages_root)
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
    }

    /// Handle a stable file-added fact.
    ///
    /// An empty file is populated with page boilerplate before the
    /// descriptor is registered, so file creation always precedes route
    /// registration. Returns the registered descriptor.
    pub async fn file_added(&mut self, path: &Path) -> Result<PageDescriptor, WatchError> {
        let descriptor = resolver::resolve(path, &self.pages_root)?;

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| WatchError::io("stat", path, e))?;
        if metadata.len() == 0 {
            let boilerplate = templates::page_component(
                &descriptor.component_identifier,
                &descriptor.route_pattern,
            );
            tokio::fs::write(path, boilerplate)
                .await
                .map_err(|e| WatchError::io("write boilerplate to", path, e))?;
        }

        if let Some(previous) = self.registry.upsert(descriptor.clone()) {
            if previous.relative_path != descriptor.relative_path {
                tracing::warn!(
                    "[watch] identifier collision: {} now maps to {} (was {})",
                    descriptor.component_identifier,
                    descriptor.relative_path,
                    previous.relative_path
                );
            }
        }

        self.write_routing_module().await?;
        Ok(descriptor)
    }

    /// Handle a file removal.
    ///
    /// Resolves the identifier from the path alone and regenerates only
    /// when an entry was actually removed. Returns the removed descriptor,
    /// or `None` for paths that were never registered.
    pub async fn file_removed(&mut self, path: &Path) -> Result<Option<PageDescriptor>, WatchError> {
        let descriptor = resolver::resolve(path, &self.pages_root)?;

        match self.registry.remove(&descriptor.component_identifier) {
            Some(removed) => {
                self.write_routing_module().await?;
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }

    /// Serialize the current snapshot and write the routing module.
    async fn write_routing_module(&self) -> Result<(), WatchError> {
        let source = generate::routing_module(
            &self.registry.snapshot(),
            &self.output_path,
            &self.pages_root,
        );
        tokio::fs::write(&self.output_path, source)
            .await
            .map_err(|e| WatchError::io("write", &self.output_path, e))
    }

    pub fn pages_root(&self) -> &Path {
        &self.pages_root
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }
}
