//! Configuration for the cheatsheet reader.
//!
//! The config file is optional. Every value it carries is resolved exactly
//! once at startup into [`Settings`], which is then threaded through the
//! engine. Nothing downstream reads the environment again.
//!
//! ```toml
//! [app]
//! theme = "system"      # system | light | dark
//! ascii_only = false
//! start_path = "/"      # "/" or "/heresies"
//!
//! [content]
//! base_url = "https://example.org/cheatsheet/"
//! # dir = "/srv/cheatsheet/public"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use cheatsheet_types::ui::{Route, ThemeMode, ThemePreference, UiOptions};

pub const ENV_BASE_URL: &str = "CHEATSHEET_BASE_URL";
pub const ENV_CONTENT_DIR: &str = "CHEATSHEET_CONTENT_DIR";
pub const ENV_THEME: &str = "CHEATSHEET_THEME";
/// Terminal-advertised "foreground;background" color indices.
pub const ENV_COLORFGBG: &str = "COLORFGBG";

/// Directory used when neither a URL nor a directory is configured.
pub const DEFAULT_CONTENT_DIR: &str = "public";

#[derive(Debug, Default, Deserialize)]
pub struct CheatsheetConfig {
    pub app: Option<AppConfig>,
    pub content: Option<ContentConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "system", "light" or "dark".
    pub theme: Option<String>,
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Navigation path shown at startup.
    pub start_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// Base URL the two documents are served under.
    pub base_url: Option<String>,
    /// Local directory holding the two documents.
    pub dir: Option<String>,
    /// Request timeout. Absent means no timeout.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl CheatsheetConfig {
    /// Load `~/.cheatsheet/config.toml`. Returns `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Failed to read config");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "Failed to parse config");
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.cheatsheet`, also the parent of the log directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cheatsheet"))
}

/// Where the two documents are fetched from, before URL parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    BaseUrl(String),
    Directory(PathBuf),
}

/// Startup values resolved from config, environment and platform signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub content: ContentLocation,
    pub theme: ThemeMode,
    pub ui_options: UiOptions,
    pub start_route: Route,
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            content: ContentLocation::Directory(PathBuf::from(DEFAULT_CONTENT_DIR)),
            theme: ThemeMode::default(),
            ui_options: UiOptions::default(),
            start_route: Route::default(),
            timeout: None,
        }
    }
}

impl Settings {
    /// Resolve against the process environment.
    #[must_use]
    pub fn resolve(config: Option<&CheatsheetConfig>) -> Self {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    ///
    /// Precedence: environment override, then config file, then default.
    #[must_use]
    pub fn resolve_with<F>(config: Option<&CheatsheetConfig>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let app = config.and_then(|c| c.app.as_ref());
        let content = config.and_then(|c| c.content.as_ref());
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let location = if let Some(url) = non_empty(ENV_BASE_URL) {
            ContentLocation::BaseUrl(url)
        } else if let Some(dir) = non_empty(ENV_CONTENT_DIR) {
            ContentLocation::Directory(PathBuf::from(dir))
        } else if let Some(url) = content.and_then(|c| c.base_url.as_deref()) {
            ContentLocation::BaseUrl(expand_env_vars(url, &env))
        } else if let Some(dir) = content.and_then(|c| c.dir.as_deref()) {
            ContentLocation::Directory(PathBuf::from(expand_env_vars(dir, &env)))
        } else {
            ContentLocation::Directory(PathBuf::from(DEFAULT_CONTENT_DIR))
        };

        let preference = non_empty(ENV_THEME)
            .or_else(|| app.and_then(|a| a.theme.clone()))
            .and_then(|raw| {
                let parsed = ThemePreference::parse(&raw);
                if parsed.is_none() {
                    tracing::warn!(theme = %raw, "Unknown theme in config; using system preference");
                }
                parsed
            })
            .unwrap_or_default();
        let theme = resolve_theme(preference, env(ENV_COLORFGBG).as_deref());

        let start_route = app
            .and_then(|a| a.start_path.as_deref())
            .and_then(|path| {
                let route = Route::from_path(path);
                if route.is_none() {
                    tracing::warn!(path, "Unknown start_path in config; using /");
                }
                route
            })
            .unwrap_or_default();

        Self {
            content: location,
            theme,
            ui_options: UiOptions {
                ascii_only: app.is_some_and(|a| a.ascii_only),
            },
            start_route,
            timeout: content
                .and_then(|c| c.timeout_secs)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// Decide the initial color scheme.
///
/// `colorfgbg` is the terminal's `COLORFGBG` value, the platform's
/// preferred-color-scheme signal. Background indices 0-6 and 8 are dark;
/// anything else, or no signal at all, is light.
#[must_use]
pub fn resolve_theme(preference: ThemePreference, colorfgbg: Option<&str>) -> ThemeMode {
    match preference {
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
        ThemePreference::System => {
            let background = colorfgbg
                .and_then(|raw| raw.rsplit(';').next())
                .and_then(|bg| bg.trim().parse::<u8>().ok());
            match background {
                Some(0..=6 | 8) => ThemeMode::Dark,
                _ => ThemeMode::Light,
            }
        }
    }
}

/// Replace `${VAR}` references using `env`. Missing variables become empty;
/// unclosed or empty references are kept verbatim.
pub fn expand_env_vars<F>(value: &str, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                out.push_str(&env(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str("${");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    use cheatsheet_types::ui::{Route, ThemeMode, ThemePreference};

    use super::{
        CheatsheetConfig, ConfigError, ContentLocation, Settings, expand_env_vars, resolve_theme,
    };

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_empty_config() {
        let config: CheatsheetConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.content.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[app]
theme = "dark"
ascii_only = true
start_path = "/heresies"

[content]
base_url = "https://example.org/sheet"
timeout_secs = 5
"#;
        let config: CheatsheetConfig = toml::from_str(toml_str).unwrap();
        let settings = Settings::resolve_with(Some(&config), env_from(&[]));
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(settings.ui_options.ascii_only);
        assert_eq!(settings.start_route, Route::Heresies);
        assert_eq!(
            settings.content,
            ContentLocation::BaseUrl("https://example.org/sheet".to_string())
        );
        assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn defaults_without_config() {
        let settings = Settings::resolve_with(None, env_from(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.content,
            ContentLocation::Directory(PathBuf::from("public"))
        );
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn env_overrides_config() {
        let config: CheatsheetConfig = toml::from_str(
            r#"
[app]
theme = "light"
[content]
dir = "/srv/sheet"
"#,
        )
        .unwrap();
        let env = env_from(&[
            ("CHEATSHEET_BASE_URL", "http://localhost:8080/"),
            ("CHEATSHEET_THEME", "dark"),
        ]);
        let settings = Settings::resolve_with(Some(&config), env);
        assert_eq!(
            settings.content,
            ContentLocation::BaseUrl("http://localhost:8080/".to_string())
        );
        assert_eq!(settings.theme, ThemeMode::Dark);
    }

    #[test]
    fn content_dir_expands_env_vars() {
        let config: CheatsheetConfig = toml::from_str(
            r#"
[content]
dir = "${SHEET_HOME}/public"
"#,
        )
        .unwrap();
        let settings = Settings::resolve_with(Some(&config), env_from(&[("SHEET_HOME", "/opt")]));
        assert_eq!(
            settings.content,
            ContentLocation::Directory(PathBuf::from("/opt/public"))
        );
    }

    #[test]
    fn unknown_values_fall_back() {
        let config: CheatsheetConfig = toml::from_str(
            r#"
[app]
theme = "sepia"
start_path = "/saints"
"#,
        )
        .unwrap();
        let settings = Settings::resolve_with(Some(&config), env_from(&[("COLORFGBG", "15;0")]));
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.start_route, Route::Verses);
    }

    #[test]
    fn system_theme_reads_colorfgbg_background() {
        let system = ThemePreference::System;
        assert_eq!(resolve_theme(system, Some("15;0")), ThemeMode::Dark);
        assert_eq!(resolve_theme(system, Some("0;default;8")), ThemeMode::Dark);
        assert_eq!(resolve_theme(system, Some("0;15")), ThemeMode::Light);
        assert_eq!(resolve_theme(system, Some("0;7")), ThemeMode::Light);
        assert_eq!(resolve_theme(system, Some("garbage")), ThemeMode::Light);
        assert_eq!(resolve_theme(system, None), ThemeMode::Light);
    }

    #[test]
    fn explicit_theme_ignores_platform_signal() {
        assert_eq!(
            resolve_theme(ThemePreference::Light, Some("15;0")),
            ThemeMode::Light
        );
        assert_eq!(resolve_theme(ThemePreference::Dark, None), ThemeMode::Dark);
    }

    #[test]
    fn expand_env_vars_cases() {
        let env = env_from(&[("A", "1"), ("B", "2")]);
        assert_eq!(expand_env_vars("hello world", &env), "hello world");
        assert_eq!(expand_env_vars("${A}-${B}", &env), "1-2");
        assert_eq!(expand_env_vars("${A}${B}", &env), "12");
        assert_eq!(expand_env_vars("x ${MISSING} y", &env), "x  y");
        assert_eq!(expand_env_vars("test ${UNCLOSED", &env), "test ${UNCLOSED");
        assert_eq!(expand_env_vars("test ${} more", &env), "test ${} more");
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = CheatsheetConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app\ntheme = ").unwrap();
        let err = CheatsheetConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[app]\nascii_only = true\n").unwrap();
        let config = CheatsheetConfig::load_from(&path).unwrap().unwrap();
        assert!(config.app.unwrap().ascii_only);
    }
}
