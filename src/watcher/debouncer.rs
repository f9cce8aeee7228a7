//! Write-stability debouncing for page file events.
//!
//! An editor saving a file can emit a burst of create/modify events while
//! the content is still mid-write. A path only counts as a stable "file
//! added" fact once it has gone quiet for the stability window.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Tracks paths awaiting write stability.
#[derive(Debug)]
pub struct Debouncer {
    /// Pending paths and the instant of their most recent event.
    pending: HashMap<PathBuf, Instant>,
    /// Quiescence window a path must survive before it is released.
    window: Duration,
}

impl Debouncer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            pending: HashMap::new(),
            window: Duration::from_millis(window_ms),
        }
    }

    /// Record an event for a path, restarting its stability window.
    pub fn note(&mut self, path: PathBuf) {
        self.pending.insert(path, Instant::now());
    }

    /// Drop a pending path, typically because the file was deleted while
    /// still settling.
    pub fn forget(&mut self, path: &Path) {
        self.pending.remove(path);
    }

    /// Release every path whose window has elapsed, removing it from the
    /// pending set.
    pub fn take_stable(&mut self) -> Vec<PathBuf> {
        let now = Instant::now();
        let mut stable = Vec::new();

        self.pending.retain(|path, last_event| {
            if now.duration_since(*last_event) >= self.window {
                stable.push(path.clone());
                false
            } else {
                true
            }
        });

        stable
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn path_is_released_after_the_window() {
        let mut debouncer = Debouncer::new(50);
        let path = PathBuf::from("pages/about.jsx");

        debouncer.note(path.clone());
        assert!(debouncer.take_stable().is_empty());
        assert!(debouncer.has_pending());

        sleep(Duration::from_millis(60));

        assert_eq!(debouncer.take_stable(), vec![path]);
        assert!(!debouncer.has_pending());
    }

    #[test]
    fn new_event_restarts_the_window() {
        let mut debouncer = Debouncer::new(50);
        let path = PathBuf::from("pages/about.jsx");

        debouncer.note(path.clone());
        sleep(Duration::from_millis(30));
        debouncer.note(path.clone());
        sleep(Duration::from_millis(30));

        // 60ms since the first event, but only 30ms since the last one.
        assert!(debouncer.take_stable().is_empty());

        sleep(Duration::from_millis(30));
        assert_eq!(debouncer.take_stable().len(), 1);
    }

    #[test]
    fn paths_settle_independently() {
        let mut debouncer = Debouncer::new(50);
        let first = PathBuf::from("pages/a.jsx");
        let second = PathBuf::from("pages/b.jsx");

        debouncer.note(first.clone());
        sleep(Duration::from_millis(30));
        debouncer.note(second.clone());
        sleep(Duration::from_millis(25));

        assert_eq!(debouncer.take_stable(), vec![first]);
        assert!(debouncer.has_pending());

        sleep(Duration::from_millis(30));
        assert_eq!(debouncer.take_stable(), vec![second]);
    }

    #[test]
    fn forget_clears_a_pending_path() {
        let mut debouncer = Debouncer::new(50);
        let path = PathBuf::from("pages/about.jsx");

        debouncer.note(path.clone());
        debouncer.forget(&path);

        assert!(!debouncer.has_pending());
    }
}
