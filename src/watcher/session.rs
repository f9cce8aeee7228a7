//! Watch session lifecycle and event loop.
//!
//! Bridges raw filesystem notifications to the sync engine. The loop is a
//! single consumer: each event's full pipeline runs to completion before
//! the next event is dequeued, which is what keeps registry mutations and
//! module writes from interleaving.

use std::path::Path;

use notify::{Event, EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use crate::config::Settings;
use crate::project;
use crate::{debug_event, log_event};

use super::debouncer::Debouncer;
use super::engine::SyncEngine;
use super::error::WatchError;

/// Lifecycle of a watch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Initializing,
    Ready,
    Watching,
    Stopped,
}

/// One watch session: subscription, debouncer, engine, lifecycle state.
#[derive(Debug)]
pub struct WatchSession {
    engine: SyncEngine,
    debouncer: Debouncer,
    event_rx: mpsc::Receiver<notify::Result<Event>>,
    /// Kept alive for the session; dropping it closes the subscription.
    _watcher: notify::RecommendedWatcher,
    state: SessionState,
}

impl WatchSession {
    /// Start a session in the current directory.
    pub fn start(settings: &Settings) -> Result<Self, WatchError> {
        let project_root = std::env::current_dir()
            .map_err(|e| WatchError::io("resolve", Path::new("."), e))?;
        Self::start_in(&project_root, settings)
    }

    /// Start a session in an explicit project root.
    ///
    /// This is the `Initializing` phase: resolve the pages root (nested
    /// convention preferred) and the routing-module output path, then
    /// subscribe recursively. The returned session is `Ready`: no backlog
    /// of pre-existing files is enumerated, only events observed from now
    /// on are processed.
    pub fn start_in(project_root: &Path, settings: &Settings) -> Result<Self, WatchError> {
        debug_event!("watch", "initializing", "{}", project_root.display());

        let pages_root = match &settings.pages_root {
            Some(root) => project_root.join(root),
            None => project::detect_pages_root(project_root).ok_or(WatchError::NoPagesRoot)?,
        };
        // Canonicalize so event paths (absolute, symlinks resolved) strip
        // cleanly against the root.
        let pages_root = std::fs::canonicalize(&pages_root)
            .map_err(|e| WatchError::io("resolve", &pages_root, e))?;

        let output_path = match &settings.routing_module {
            Some(path) => project_root.join(path),
            None => {
                let extension = project::detect_project_kind(project_root).page_extension();
                project::routing_module_path(&pages_root, extension)
            }
        };
        // Same treatment for the output location, which may not exist yet.
        let output_path = match (output_path.parent(), output_path.file_name()) {
            (Some(parent), Some(name)) => std::fs::canonicalize(parent)
                .map_err(|e| WatchError::io("resolve", parent, e))?
                .join(name),
            _ => output_path,
        };

        let (tx, event_rx) = mpsc::channel(100);
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.blocking_send(res);
        })?;
        watcher
            .watch(&pages_root, RecursiveMode::Recursive)
            .map_err(|e| WatchError::Subscription {
                path: pages_root.clone(),
                source: e,
            })?;

        log_event!("watch", "ready", "{}", pages_root.display());

        Ok(Self {
            engine: SyncEngine::new(pages_root, output_path),
            debouncer: Debouncer::new(settings.watch.debounce_ms),
            event_rx,
            _watcher: watcher,
            state: SessionState::Ready,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn pages_root(&self) -> &Path {
        self.engine.pages_root()
    }

    pub fn output_path(&self) -> &Path {
        self.engine.output_path()
    }

    /// Run the event loop until interrupted.
    ///
    /// Steady state: receive events, debounce adds to write stability,
    /// handle removals immediately, and run each stable path's full
    /// pipeline before the next receive. Ctrl-C stops the session; the
    /// signal is only observed between pipelines, so the in-flight event
    /// has already completed and there is nothing to drain.
    pub async fn run(mut self) -> Result<(), WatchError> {
        self.state = SessionState::Watching;
        log_event!("watch", "watching", "{}", self.engine.pages_root().display());

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            let tick = sleep(Duration::from_millis(100));
            tokio::pin!(tick);

            tokio::select! {
                Some(res) = self.event_rx.recv() => {
                    match res {
                        Ok(event) => self.dispatch(event).await,
                        Err(e) => {
                            tracing::error!("[watch] file watch error: {e}");
                        }
                    }
                }

                _ = &mut tick => {
                    for path in self.debouncer.take_stable() {
                        self.process_stable(&path).await;
                    }
                }

                _ = &mut ctrl_c => {
                    break;
                }
            }
        }

        self.state = SessionState::Stopped;
        log_event!("watch", "stopped");
        Ok(())
    }

    /// Route one notify event to the debouncer or the removal path.
    async fn dispatch(&mut self, event: Event) {
        for path in event.paths {
            if !self.engine.matches(&path) {
                debug_event!("watch", "ignored", "{:?} {}", event.kind, path.display());
                continue;
            }

            match event.kind {
                EventKind::Create(_) | EventKind::Modify(_) => {
                    self.debouncer.note(path);
                }
                EventKind::Remove(_) => {
                    self.debouncer.forget(&path);
                    self.handle_remove(&path).await;
                }
                _ => {}
            }
        }
    }

    /// A path has survived the stability window.
    ///
    /// Renames surface as modify events on some platforms, so a path that
    /// no longer exists is treated as a removal.
    async fn process_stable(&mut self, path: &Path) {
        if path.exists() {
            self.handle_add(path).await;
        } else {
            self.handle_remove(path).await;
        }
    }

    async fn handle_add(&mut self, path: &Path) {
        match self.engine.file_added(path).await {
            Ok(page) => {
                log_event!(
                    "watch",
                    "added route",
                    "{} -> {}",
                    page.route_pattern,
                    page.component_identifier
                );
            }
            Err(e) => {
                tracing::error!("[watch] failed to add {}: {e}", path.display());
            }
        }
    }

    async fn handle_remove(&mut self, path: &Path) {
        match self.engine.file_removed(path).await {
            Ok(Some(page)) => {
                log_event!(
                    "watch",
                    "removed route",
                    "{} -> {}",
                    page.route_pattern,
                    page.component_identifier
                );
            }
            Ok(None) => {
                debug_event!("watch", "not registered", "{}", path.display());
            }
            Err(e) => {
                tracing::error!("[watch] failed to remove {}: {e}", path.display());
            }
        }
    }
}
