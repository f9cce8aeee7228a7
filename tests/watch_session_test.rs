//! Watch session startup: root resolution, output placement, lifecycle.

use std::fs;
use std::path::Path;

use routegen::config::Settings;
use routegen::{SessionState, WatchError, WatchSession};
use tempfile::TempDir;

#[test]
fn nested_pages_dir_is_preferred_when_both_exist() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/pages")).unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();

    let session = WatchSession::start_in(dir.path(), &Settings::default()).unwrap();
    assert!(session.pages_root().ends_with("src/pages"));
}

#[test]
fn root_level_pages_dir_is_watched_as_fallback() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();

    let session = WatchSession::start_in(dir.path(), &Settings::default()).unwrap();
    assert!(session.pages_root().ends_with("pages"));
    assert!(!session.pages_root().ends_with("src/pages"));
    assert_eq!(
        session.output_path().file_name().unwrap(),
        "routing.js",
        "plain JS project routes to routing.js at the root"
    );
}

#[test]
fn missing_pages_dir_is_a_fatal_setup_error() {
    let dir = TempDir::new().unwrap();

    let err = WatchSession::start_in(dir.path(), &Settings::default()).unwrap_err();
    assert!(matches!(err, WatchError::NoPagesRoot));
}

#[test]
fn session_is_ready_after_start() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();

    let session = WatchSession::start_in(dir.path(), &Settings::default()).unwrap();
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn output_extension_follows_the_detected_project_kind() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/pages")).unwrap();
    fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"react": "^18.0.0"}}"#,
    )
    .unwrap();

    let session = WatchSession::start_in(dir.path(), &Settings::default()).unwrap();
    assert_eq!(session.output_path().file_name().unwrap(), "routing.tsx");
    assert!(session.output_path().parent().unwrap().ends_with("src"));
}

#[test]
fn settings_overrides_win_over_detection() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("app/views")).unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();

    let settings = Settings {
        pages_root: Some("app/views".into()),
        routing_module: Some("app/routes.jsx".into()),
        ..Settings::default()
    };

    let session = WatchSession::start_in(dir.path(), &settings).unwrap();
    assert!(session.pages_root().ends_with(Path::new("app/views")));
    assert_eq!(session.output_path().file_name().unwrap(), "routes.jsx");
}
