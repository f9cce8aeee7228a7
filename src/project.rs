//! Project layout probing.
//!
//! Answers the environment questions the commands share: where the pages
//! directory lives (nested `src/pages` wins over root-level `pages`),
//! where the generated routing module goes, what flavor of source files
//! the project uses, and where the App entry file is.

use std::path::{Path, PathBuf};

/// Nested pages convention, preferred when present.
pub const NESTED_PAGES_DIR: &str = "src/pages";
/// Root-level fallback convention.
pub const ROOT_PAGES_DIR: &str = "pages";

/// Source flavor of the surrounding project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectKind {
    pub typescript: bool,
    pub jsx: bool,
}

impl ProjectKind {
    /// File extension page and routing files should carry, without a dot.
    pub fn page_extension(self) -> &'static str {
        match (self.typescript, self.jsx) {
            (true, true) => "tsx",
            (true, false) => "ts",
            (false, true) => "jsx",
            (false, false) => "js",
        }
    }
}

/// Detect the project flavor from its manifest files.
///
/// A `tsconfig.json` marks the project as TypeScript; a `package.json`
/// that mentions react marks it as JSX. Both default to the plainer
/// variant when the probe finds nothing.
pub fn detect_project_kind(project_root: &Path) -> ProjectKind {
    let typescript = project_root.join("tsconfig.json").is_file();
    let jsx = std::fs::read_to_string(project_root.join("package.json"))
        .map(|manifest| manifest.contains("\"react\""))
        .unwrap_or(false);
    ProjectKind { typescript, jsx }
}

/// Find the pages root under a project root, nested convention first.
pub fn detect_pages_root(project_root: &Path) -> Option<PathBuf> {
    for candidate in [NESTED_PAGES_DIR, ROOT_PAGES_DIR] {
        let dir = project_root.join(candidate);
        if dir.is_dir() {
            return Some(dir);
        }
    }
    None
}

/// Where the routing module belongs for a given pages root.
///
/// Sits next to the pages directory: `src/routing.<ext>` for the nested
/// convention, `routing.<ext>` at the root otherwise.
pub fn routing_module_path(pages_root: &Path, extension: &str) -> PathBuf {
    let parent = pages_root.parent().unwrap_or(Path::new(""));
    parent.join(format!("routing.{extension}"))
}

/// Locate the App entry file, checking `src/` before the project root.
pub fn find_app_file(project_root: &Path) -> Option<PathBuf> {
    for dir in ["src", ""] {
        for ext in crate::resolver::PAGE_EXTENSIONS {
            let candidate = project_root.join(dir).join(format!("App.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
