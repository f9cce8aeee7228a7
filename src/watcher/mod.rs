//! Event-driven synchronization of the routing module.
//!
//! # Architecture
//!
//! ```text
//! WatchSession
//!   - single notify::RecommendedWatcher on the pages root
//!   - Debouncer (write-stability window)
//!   - sequential event loop
//!         |
//!     SyncEngine
//!   resolve -> registry -> generate -> write
//! ```

mod debouncer;
mod engine;
mod error;
mod session;

pub use debouncer::Debouncer;
pub use engine::SyncEngine;
pub use error::WatchError;
pub use session::{SessionState, WatchSession};
