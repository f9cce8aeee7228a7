//! Page path resolution.
//!
//! Turns a page file path into a [`PageDescriptor`]: the route pattern a
//! router matches against, the identifier the generated module imports the
//! component under, and the import path back to the file. Pure - no I/O,
//! no shared state.

mod segment;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use segment::{Segment, capitalize};

/// Page file extensions we recognize, spanning typed/untyped and
/// markup/non-markup variants.
pub const PAGE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Errors from resolving a page path.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("path {path} is not under the pages root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("path {path} has no recognized page extension (expected one of {expected})", expected = PAGE_EXTENSIONS.join(", "))]
    UnrecognizedExtension { path: PathBuf },
}

/// Everything derived from one page file's path.
///
/// Immutable once created; `route_pattern` and `component_identifier` are
/// deterministic functions of `relative_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Extension of the source file, without the dot.
    pub source_extension: String,
    /// Path relative to the pages root, extension stripped, `/`-separated.
    pub relative_path: String,
    /// Absolute route string, `/`-prefixed, no trailing slash except `/`.
    pub route_pattern: String,
    /// Import binding name; best-effort uniqueness key in the registry.
    pub component_identifier: String,
    /// Same as `relative_path`, brackets and parens retained so the import
    /// specifier matches the on-disk file.
    pub import_path: String,
}

/// Resolve a page file path against the pages root.
///
/// `path` and `pages_root` must share a base (both absolute, or both
/// relative to the project root). Fails if the path lies outside the root
/// or carries an unrecognized extension.
pub fn resolve(path: &Path, pages_root: &Path) -> Result<PageDescriptor, ResolveError> {
    let relative = path
        .strip_prefix(pages_root)
        .map_err(|_| ResolveError::OutsideRoot {
            path: path.to_path_buf(),
            root: pages_root.to_path_buf(),
        })?;

    let source_extension = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if PAGE_EXTENSIONS.contains(&ext) => ext.to_string(),
        _ => {
            return Err(ResolveError::UnrecognizedExtension {
                path: path.to_path_buf(),
            });
        }
    };

    // Forward-slash segments with the extension stripped from the leaf.
    let mut raw_segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if let Some(leaf) = raw_segments.last_mut() {
        *leaf = leaf
            .strip_suffix(&format!(".{source_extension}"))
            .unwrap_or(leaf)
            .to_string();
    }
    let relative_path = raw_segments.join("/");

    let last = raw_segments.len().saturating_sub(1);
    let segments: Vec<Segment> = raw_segments
        .iter()
        .enumerate()
        .map(|(i, raw)| Segment::classify(raw, i == last))
        .collect();

    Ok(PageDescriptor {
        route_pattern: route_pattern(&segments),
        component_identifier: component_identifier(&segments),
        source_extension,
        import_path: relative_path.clone(),
        relative_path,
    })
}

/// Join the route contributions of all segments; empty collapses to `/`.
fn route_pattern(segments: &[Segment]) -> String {
    let parts: Vec<String> = segments.iter().filter_map(Segment::route_part).collect();
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Fold the identifier contributions of all segments.
///
/// An index leaf with no ancestors names the root page `Home`; with
/// ancestors it appends `Index` to their names.
fn component_identifier(segments: &[Segment]) -> String {
    let (leaf, ancestors) = match segments.split_last() {
        Some(split) => split,
        None => return String::new(),
    };

    let mut identifier: String = ancestors.iter().map(Segment::identifier_part).collect();

    if matches!(leaf, Segment::Index) && identifier.is_empty() {
        return "Home".to_string();
    }
    identifier.push_str(&leaf.identifier_part());
    identifier
}
