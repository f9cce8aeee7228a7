//! Routing module serialization.
//!
//! Pure function of an ordered registry snapshot and the two file
//! locations involved. Identical snapshots must yield byte-identical
//! output - no timestamps, no uncontrolled iteration order.

use std::fmt::Write as _;
use std::path::{Component, Path};

use crate::resolver::PageDescriptor;

/// Serialize the routing module for an ordered snapshot.
///
/// `output_path` is where the module will be written and `pages_root` is
/// the directory the import specifiers must reach; both need a shared
/// base. Routes appear in snapshot order.
pub fn routing_module(
    snapshot: &[PageDescriptor],
    output_path: &Path,
    pages_root: &Path,
) -> String {
    let prefix = import_prefix(output_path.parent().unwrap_or(Path::new("")), pages_root);

    let mut module = String::from("import { Routes, Route } from 'react-router-dom';\n");
    for page in snapshot {
        let _ = writeln!(
            module,
            "import {} from '{}/{}';",
            page.component_identifier, prefix, page.import_path
        );
    }

    module.push_str("\nexport default function AppRoutes() {\n  return (\n    <Routes>\n");
    for page in snapshot {
        let _ = writeln!(
            module,
            "      <Route path=\"{}\" element={{<{} />}} />",
            page.route_pattern, page.component_identifier
        );
    }
    module.push_str("    </Routes>\n  );\n}\n");
    module
}

/// Relative path from the generated module's directory to the pages root,
/// forward-slashed and `./`-prefixed when it does not already walk up.
fn import_prefix(output_dir: &Path, pages_root: &Path) -> String {
    let from: Vec<Component> = output_dir.components().collect();
    let to: Vec<Component> = pages_root.components().collect();

    let shared = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - shared];
    parts.extend(
        to[shared..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if parts.is_empty() {
        return ".".to_string();
    }
    let joined = parts.join("/");
    if joined.starts_with('.') {
        joined
    } else {
        format!("./{joined}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    fn snapshot(paths: &[&str]) -> Vec<PageDescriptor> {
        paths
            .iter()
            .map(|p| resolve(Path::new(p), Path::new("src/pages")).unwrap())
            .collect()
    }

    #[test]
    fn emits_imports_and_routes_in_snapshot_order() {
        let pages = snapshot(&[
            "src/pages/index.jsx",
            "src/pages/about.jsx",
            "src/pages/blog/[slug].jsx",
        ]);
        let module = routing_module(
            &pages,
            Path::new("src/routing.jsx"),
            Path::new("src/pages"),
        );

        assert_eq!(
            module,
            "import { Routes, Route } from 'react-router-dom';\n\
             import Home from './pages/index';\n\
             import About from './pages/about';\n\
             import BlogDynamicSlug from './pages/blog/[slug]';\n\
             \n\
             export default function AppRoutes() {\n\
             \x20 return (\n\
             \x20   <Routes>\n\
             \x20     <Route path=\"/\" element={<Home />} />\n\
             \x20     <Route path=\"/about\" element={<About />} />\n\
             \x20     <Route path=\"/blog/:slug\" element={<BlogDynamicSlug />} />\n\
             \x20   </Routes>\n\
             \x20 );\n\
             }\n"
        );
    }

    #[test]
    fn identical_snapshots_yield_byte_identical_output() {
        let pages = snapshot(&["src/pages/index.jsx", "src/pages/blog/index.jsx"]);
        let output = Path::new("src/routing.jsx");
        let root = Path::new("src/pages");

        assert_eq!(
            routing_module(&pages, output, root),
            routing_module(&pages, output, root)
        );
    }

    #[test]
    fn empty_snapshot_still_produces_a_valid_module() {
        let module = routing_module(&[], Path::new("src/routing.jsx"), Path::new("src/pages"));
        assert!(module.starts_with("import { Routes, Route } from 'react-router-dom';\n"));
        assert!(module.contains("<Routes>\n    </Routes>"));
    }

    #[test]
    fn prefix_for_sibling_pages_directory() {
        assert_eq!(
            import_prefix(Path::new("src"), Path::new("src/pages")),
            "./pages"
        );
        assert_eq!(import_prefix(Path::new(""), Path::new("pages")), "./pages");
    }

    #[test]
    fn prefix_walks_up_when_module_sits_deeper() {
        assert_eq!(
            import_prefix(Path::new("src/generated"), Path::new("src/pages")),
            "../pages"
        );
        assert_eq!(import_prefix(Path::new("src"), Path::new("pages")), "../pages");
    }

    #[test]
    fn prefix_of_module_inside_pages_root() {
        assert_eq!(import_prefix(Path::new("src/pages"), Path::new("src/pages")), ".");
    }

    #[test]
    fn prefix_with_absolute_paths() {
        assert_eq!(
            import_prefix(Path::new("/work/app/src"), Path::new("/work/app/src/pages")),
            "./pages"
        );
    }
}
