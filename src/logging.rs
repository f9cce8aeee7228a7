//! Operator-facing logging.
//!
//! Compact timestamped output on tracing, with the default level and
//! per-module overrides taken from `[logging]` in the settings file.
//! `RUST_LOG` takes precedence over config:
//!
//! ```bash
//! RUST_LOG=debug routegen watch
//! RUST_LOG=routegen::watcher=debug routegen watch
//! ```

use std::sync::Once;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Initialize logging. Safe to call more than once; only the first call
/// takes effect.
pub fn init_with_config(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let mut directives = config.default.clone();
            for (module, level) in &config.modules {
                directives.push_str(&format!(",{module}={level}"));
            }
            EnvFilter::new(&directives)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Initialize logging with default configuration.
pub fn init() {
    init_with_config(&LoggingConfig::default());
}

/// Log a watch event with its source context.
///
/// # Examples
/// ```ignore
/// log_event!("watch", "added route", "{} -> {}", route, component);
/// log_event!("watch", "stopped");
/// ```
#[macro_export]
macro_rules! log_event {
    ($source:expr, $event:expr) => {
        tracing::info!("[{}] {}", $source, $event)
    };
    ($source:expr, $event:expr, $($arg:tt)*) => {
        tracing::info!("[{}] {}: {}", $source, $event, format!($($arg)*))
    };
}

/// Debug-only event logging.
#[macro_export]
macro_rules! debug_event {
    ($source:expr, $event:expr) => {
        tracing::debug!("[{}] {}", $source, $event)
    };
    ($source:expr, $event:expr, $($arg:tt)*) => {
        tracing::debug!("[{}] {}: {}", $source, $event, format!($($arg)*))
    };
}
