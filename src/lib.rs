pub mod cli;
pub mod config;
pub mod generate;
pub mod logging;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod templates;
pub mod watcher;

pub use config::Settings;
pub use registry::PageRegistry;
pub use resolver::{PAGE_EXTENSIONS, PageDescriptor, ResolveError};
pub use watcher::{SessionState, SyncEngine, WatchError, WatchSession};
