use colored::Colorize;
use serde::Deserialize;
use std::path::PathBuf;

use crate::debug_log;

/// Presentation settings plus optional per-session default-formula
/// overrides. Loaded from TOML; every field has a working default so
/// a missing or partial file never blocks a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decimal places in tables and chart axis labels.
    pub decimals: usize,
    /// Master switch for the chart view.
    pub chart: bool,
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub rect: Option<String>,
    pub simpson: Option<String>,
    pub trapezoid: Option<String>,
    pub compare: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { decimals: 4, chart: true, defaults: Defaults::default() }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.quadlab\config.toml on Windows; ~/.quadlab/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".quadlab").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Loads the effective config. A missing default-path file is normal
/// and silent; an explicitly passed path that cannot be read, or any
/// file that does not parse, warns and falls back to the defaults so
/// configuration never blocks a computation.
pub fn load(cli_path: &Option<PathBuf>) -> Config {
    let Some(path) = resolve_config_path(cli_path) else {
        return Config::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => match Config::from_toml(&text) {
            Ok(config) => {
                debug_log!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!(
                    "{} ignoring config {}: {}",
                    "warn:".yellow().bold(),
                    path.display(),
                    e
                );
                Config::default()
            }
        },
        Err(e) => {
            if cli_path.is_some() {
                eprintln!(
                    "{} cannot read config {}: {}",
                    "warn:".yellow().bold(),
                    path.display(),
                    e
                );
            }
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_the_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.decimals, 4);
        assert!(config.chart);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = Config::from_toml("decimals = 6\n").unwrap();
        assert_eq!(config.decimals, 6);
        assert!(config.chart);
        assert!(config.defaults.rect.is_none());
    }

    #[test]
    fn session_default_overrides_parse() {
        let text = r#"
chart = false

[defaults]
rect = "sin(x) / x"
simpson = "exp(-x^2)"
"#;
        let config = Config::from_toml(text).unwrap();
        assert!(!config.chart);
        assert_eq!(config.defaults.rect.as_deref(), Some("sin(x) / x"));
        assert_eq!(config.defaults.simpson.as_deref(), Some("exp(-x^2)"));
        assert_eq!(config.defaults.trapezoid, None);
        assert_eq!(config.defaults.compare, None);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("decimals = \"four\"").is_err());
    }

    #[test]
    fn load_falls_back_when_the_file_is_broken() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "decimals = [1, 2]").unwrap();
        let config = load(&Some(path));
        assert_eq!(config, Config::default());
    }
}
