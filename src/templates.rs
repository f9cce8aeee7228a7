//! Boilerplate source templates.
//!
//! Pure string templating for freshly created page files, the initial
//! routing module, and the App wiring done by `init`. The watcher calls
//! [`page_component`] for empty page files before registering them.

/// Boilerplate for a page component.
///
/// Keyed by component name and route: dynamic routes get their parameters
/// destructured from `useParams` so the generated page compiles against
/// the route it will be mounted on.
pub fn page_component(component: &str, route: &str) -> String {
    let params: Vec<&str> = route
        .split('/')
        .filter_map(|part| part.strip_prefix(':'))
        .collect();

    if params.is_empty() {
        return format!(
            "export default function {component}() {{\n\
             \x20 return (\n\
             \x20   <div>\n\
             \x20     <h1>{component} Page</h1>\n\
             \x20   </div>\n\
             \x20 );\n\
             }}\n"
        );
    }

    format!(
        "import {{ useParams }} from 'react-router-dom';\n\
         \n\
         export default function {component}() {{\n\
         \x20 const {{ {params} }} = useParams();\n\
         \n\
         \x20 return (\n\
         \x20   <div>\n\
         \x20     <h1>{component} Page</h1>\n\
         \x20   </div>\n\
         \x20 );\n\
         }}\n",
        params = params.join(", ")
    )
}

/// Placeholder routing module written by `init` before any page exists.
pub fn routing_placeholder() -> String {
    "import { Routes, Route } from 'react-router-dom';\n\
     \n\
     // Auto-generated routes\n\
     export default function AppRoutes() {\n\
     \x20 return (\n\
     \x20   <Routes>\n\
     \x20     {/* Routes will be automatically added here */}\n\
     \x20   </Routes>\n\
     \x20 );\n\
     }\n"
        .to_string()
}

/// Wire an existing App file to render the generated route table.
///
/// Prepends the router imports and replaces the App function's opening
/// with one that returns the route table wrapped in a `BrowserRouter`.
/// Returns `None` when the App body does not match the expected shape.
pub fn app_with_router(existing: &str) -> Option<String> {
    const APP_OPENING: &str = "export default function App() {";

    if !existing.contains(APP_OPENING) {
        return None;
    }

    let wired = existing.replacen(
        APP_OPENING,
        "export default function App() {\n\
         \x20 return (\n\
         \x20   <BrowserRouter>\n\
         \x20     <AppRoutes />\n\
         \x20   </BrowserRouter>\n\
         \x20 );\n\
         }",
        1,
    );

    Some(format!(
        "import {{ BrowserRouter }} from 'react-router-dom';\n\
         import AppRoutes from './routing';\n\
         \n\
         {wired}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_page_has_no_params() {
        let source = page_component("About", "/about");
        assert!(source.starts_with("export default function About() {"));
        assert!(!source.contains("useParams"));
        assert!(source.contains("<h1>About Page</h1>"));
    }

    #[test]
    fn dynamic_page_destructures_its_params() {
        let source = page_component("BlogDynamicSlug", "/blog/:slug");
        assert!(source.contains("import { useParams } from 'react-router-dom';"));
        assert!(source.contains("const { slug } = useParams();"));
    }

    #[test]
    fn multiple_params_all_destructured() {
        let source = page_component("UsersDynamicIdPostsDynamicPostId", "/users/:id/posts/:postId");
        assert!(source.contains("const { id, postId } = useParams();"));
    }

    #[test]
    fn app_wiring_wraps_in_browser_router() {
        let existing = "export default function App() {\n}\n";
        let wired = app_with_router(existing).unwrap();
        assert!(wired.starts_with("import { BrowserRouter } from 'react-router-dom';"));
        assert!(wired.contains("<BrowserRouter>"));
        assert!(wired.contains("<AppRoutes />"));
    }

    #[test]
    fn app_wiring_requires_the_expected_shape() {
        assert!(app_with_router("const App = () => null;\n").is_none());
    }
}
