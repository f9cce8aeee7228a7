//! Error types for the watch pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::ResolveError;

/// Errors from watch-session setup and per-event handling.
///
/// Everything except the setup variants is caught per event: the session
/// logs it and keeps observing.
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("no pages directory found (looked for `src/pages` and `pages`)")]
    NoPagesRoot,

    #[error("cannot watch {path}: {source}")]
    Subscription {
        path: PathBuf,
        source: notify::Error,
    },

    #[error("failed to initialize watcher: {0}")]
    Init(#[from] notify::Error),

    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl WatchError {
    /// Wrap an I/O failure with the attempted operation and path, so the
    /// diagnostic identifies both.
    pub fn io(operation: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }
}
