//! Watch command - keep the routing module in sync with the pages directory.

use console::style;

use crate::config::Settings;
use crate::watcher::WatchSession;

/// Run the watch command until interrupted.
///
/// A failure to establish the watch session is fatal; everything after
/// that is handled per event inside the session.
pub async fn run(settings: &Settings, debounce_ms: Option<u64>) {
    let mut settings = settings.clone();
    if let Some(window) = debounce_ms {
        settings.watch.debounce_ms = window;
    }

    let session = match WatchSession::start(&settings) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "{}",
        style(format!(
            "Watching for file changes in {} ...",
            session.pages_root().display()
        ))
        .blue()
    );

    if let Err(e) = session.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
