use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::models::ThemeMode;

/// Runtime config. Every field is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Initial theme. `None` means follow the desktop.
    pub theme: Option<ThemeMode>,
    /// JSON mailbox to show instead of the built-in one.
    pub fixtures: Option<PathBuf>,
}

/// On-disk representation, read from `config.json`. Never written back.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub fixtures: Option<PathBuf>,
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nexmail")
        .join("config.json")
}

impl FileConfig {
    pub fn load() -> Result<Option<Self>, String> {
        let path = config_path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        Self::parse(&data).map(Some)
    }

    pub fn parse(data: &str) -> Result<Self, String> {
        serde_json::from_str(data).map_err(|e| format!("parse config: {e}"))
    }
}

impl Config {
    /// Values from `NEXMAIL_THEME` / `NEXMAIL_FIXTURES`.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("NEXMAIL_THEME").ok(),
            std::env::var("NEXMAIL_FIXTURES").ok(),
        )
    }

    fn from_vars(theme: Option<String>, fixtures: Option<String>) -> Self {
        let theme = theme.and_then(|v| {
            let parsed = ThemeMode::parse(&v);
            if parsed.is_none() {
                log::warn!("Ignoring NEXMAIL_THEME={:?} (expected light or dark)", v);
            }
            parsed
        });
        let fixtures = fixtures
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Config { theme, fixtures }
    }

    pub fn from_file_config(fc: &FileConfig) -> Self {
        let theme = fc.theme.as_deref().and_then(|v| {
            let parsed = ThemeMode::parse(v);
            if parsed.is_none() {
                log::warn!("Ignoring config theme {:?} (expected light or dark)", v);
            }
            parsed
        });
        Config {
            theme,
            fixtures: fc.fixtures.clone(),
        }
    }

    /// Field-wise: values already set on `self` win over `fallback`.
    fn or(self, fallback: Config) -> Self {
        Config {
            theme: self.theme.or(fallback.theme),
            fixtures: self.fixtures.or(fallback.fixtures),
        }
    }

    /// Resolution order: env vars → config file → defaults.
    pub fn resolve() -> Self {
        let env = Self::from_env();

        let file = match FileConfig::load() {
            Ok(Some(fc)) => {
                log::info!("Config loaded from {}", config_path().display());
                Self::from_file_config(&fc)
            }
            Ok(None) => {
                log::info!("No config file found, using defaults");
                Config::default()
            }
            Err(e) => {
                log::warn!("Config file error: {}", e);
                Config::default()
            }
        };

        env.or(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_values_are_parsed() {
        let cfg = Config::from_vars(Some("DARK".into()), Some(" /tmp/mail.json ".into()));
        assert_eq!(cfg.theme, Some(ThemeMode::Dark));
        assert_eq!(cfg.fixtures, Some(PathBuf::from("/tmp/mail.json")));
    }

    #[test]
    fn invalid_or_blank_env_values_are_ignored() {
        let cfg = Config::from_vars(Some("purple".into()), Some("   ".into()));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn env_wins_over_file() {
        let env = Config {
            theme: Some(ThemeMode::Light),
            fixtures: None,
        };
        let file = Config::from_file_config(&FileConfig {
            theme: Some("dark".into()),
            fixtures: Some(PathBuf::from("/srv/mail.json")),
        });
        let merged = env.or(file);
        assert_eq!(merged.theme, Some(ThemeMode::Light));
        assert_eq!(merged.fixtures, Some(PathBuf::from("/srv/mail.json")));
    }

    #[test]
    fn file_config_fields_are_optional() {
        let fc = FileConfig::parse("{}").unwrap();
        assert_eq!(fc, FileConfig::default());

        let fc = FileConfig::parse(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(Config::from_file_config(&fc).theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn invalid_file_theme_is_ignored() {
        let fc = FileConfig::parse(r#"{ "theme": "sepia", "fixtures": "/srv/mail.json" }"#).unwrap();
        let cfg = Config::from_file_config(&fc);
        assert_eq!(cfg.theme, None);
        assert_eq!(cfg.fixtures, Some(PathBuf::from("/srv/mail.json")));
    }

    #[test]
    fn file_config_parse_error_has_context() {
        let err = FileConfig::parse("[1, 2]").unwrap_err();
        assert!(err.starts_with("parse config"));
    }
}
