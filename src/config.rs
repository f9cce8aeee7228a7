//! Layered configuration.
//!
//! Settings come from defaults, a `routegen.toml` at the project root,
//! and environment overrides, in that order of precedence.
//!
//! # Environment Variables
//!
//! Variables are prefixed with `ROUTEGEN_` and use double underscores to
//! separate nested levels:
//! - `ROUTEGEN_WATCH__DEBOUNCE_MS=500` sets `watch.debounce_ms`
//! - `ROUTEGEN_LOGGING__DEFAULT=debug` sets `logging.default`

use std::collections::HashMap;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Default settings file name, looked up in the current directory.
pub const SETTINGS_FILE: &str = "routegen.toml";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    /// Pages directory override. When unset, `src/pages` is probed before
    /// `pages`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_root: Option<PathBuf>,

    /// Routing module output override. When unset, the module is written
    /// next to the pages directory with the project's page extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_module: Option<PathBuf>,

    /// Watch session settings.
    #[serde(default)]
    pub watch: WatchConfig,

    /// Logging levels.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WatchConfig {
    /// Write-stability window in milliseconds before an add is processed.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default log level when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module level overrides, e.g. `routegen::watcher = "debug"`.
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::load_from(SETTINGS_FILE)
    }

    /// Load configuration with an explicit settings file path.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            // Double underscore separates nested levels; single underscores
            // stay part of the field name.
            .merge(Env::prefixed("ROUTEGEN_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert!(settings.pages_root.is_none());
        assert!(settings.routing_module.is_none());
        assert_eq!(settings.watch.debounce_ms, 200);
        assert_eq!(settings.logging.default, "info");
    }

    #[test]
    fn toml_file_layers_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                SETTINGS_FILE,
                r#"
                    pages_root = "app/pages"

                    [watch]
                    debounce_ms = 500
                "#,
            )?;

            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.pages_root, Some(PathBuf::from("app/pages")));
            assert_eq!(settings.watch.debounce_ms, 500);
            assert_eq!(settings.logging.default, "info");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_layer_over_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                SETTINGS_FILE,
                r#"
                    [watch]
                    debounce_ms = 500
                "#,
            )?;
            jail.set_env("ROUTEGEN_WATCH__DEBOUNCE_MS", "750");
            jail.set_env("ROUTEGEN_LOGGING__DEFAULT", "debug");

            let settings = Settings::load().expect("settings should load");
            assert_eq!(settings.watch.debounce_ms, 750);
            assert_eq!(settings.logging.default, "debug");
            Ok(())
        });
    }
}
