//! Init command - bootstrap file-based routing in a React project.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Settings;
use crate::project;
use crate::templates;

/// Run the init command.
///
/// Creates the pages directory (`src/pages` when `src/` exists), seeds
/// the routing module, and wires the App file to render the generated
/// routes. Dependency installation is left to the user.
pub async fn run(settings: &Settings, force: bool) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Initializing project...");

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            spinner.abandon_with_message("Failed to initialize project");
            eprintln!("Error: cannot determine current directory: {e}");
            std::process::exit(1);
        }
    };

    match bootstrap(&project_root, settings, force, &spinner).await {
        Ok(summary) => {
            spinner.finish_with_message("Project initialized successfully!");
            println!("  Pages directory: {}", summary.pages_dir.display());
            println!("  Routing module:  {}", summary.routing_module.display());
            println!();
            println!("Next step: npm install react-router-dom");
        }
        Err(e) => {
            spinner.abandon_with_message("Failed to initialize project");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

struct InitSummary {
    pages_dir: PathBuf,
    routing_module: PathBuf,
}

async fn bootstrap(
    project_root: &Path,
    settings: &Settings,
    force: bool,
    spinner: &ProgressBar,
) -> io::Result<InitSummary> {
    let kind = project::detect_project_kind(project_root);
    let extension = kind.page_extension();
    spinner.set_message(format!(
        "Detected {} project with .{extension} files",
        if kind.typescript { "TypeScript" } else { "JavaScript" },
    ));

    // Nested convention when a src directory exists, root-level otherwise.
    let pages_dir = match &settings.pages_root {
        Some(root) => project_root.join(root),
        None if project_root.join("src").is_dir() => project_root.join(project::NESTED_PAGES_DIR),
        None => project_root.join(project::ROOT_PAGES_DIR),
    };
    tokio::fs::create_dir_all(&pages_dir).await?;

    let routing_module = match &settings.routing_module {
        Some(path) => project_root.join(path),
        None => project::routing_module_path(&pages_dir, extension),
    };
    if force || !routing_module.exists() {
        tokio::fs::write(&routing_module, templates::routing_placeholder()).await?;
    } else {
        spinner.println(format!(
            "Routing module already exists at {} (use --force to re-seed)",
            routing_module.display()
        ));
    }

    wire_app_file(project_root, spinner).await?;

    Ok(InitSummary {
        pages_dir,
        routing_module,
    })
}

/// Point the App entry file at the generated routes, unless it already is.
async fn wire_app_file(project_root: &Path, spinner: &ProgressBar) -> io::Result<()> {
    let Some(app_file) = project::find_app_file(project_root) else {
        spinner.println("No App file found; skipping router wiring");
        return Ok(());
    };

    let content = tokio::fs::read_to_string(&app_file).await?;
    if content.contains("BrowserRouter") {
        spinner.println("BrowserRouter already configured in App file");
        return Ok(());
    }

    match templates::app_with_router(&content) {
        Some(wired) => {
            spinner.println(format!("Wiring router into {}", app_file.display()));
            tokio::fs::write(&app_file, wired).await?;
        }
        None => {
            spinner.println(format!(
                "Could not wire {} automatically; render <AppRoutes /> inside a <BrowserRouter> yourself",
                app_file.display()
            ));
        }
    }
    Ok(())
}
