use serde::Deserialize;
use std::{path::Path, path::PathBuf, time::Duration};
use thiserror::Error;

use aura_types::ui::{Theme, UiOptions};

use crate::conversation::DEFAULT_REPLY_DELAY;
use crate::telemetry::DEFAULT_TICK_INTERVAL;

/// Shortest timer accepted from config; anything lower is clamped.
const MIN_TIMER_MS: u64 = 10;

/// Contents of `~/.aura/config.toml`.
///
/// ```toml
/// [app]
/// theme = "dark"
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
///
/// [chat]
/// reply_delay_ms = 900
///
/// [monitor]
/// interval_ms = 2000
/// start_paused = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AuraConfig {
    pub app: Option<AppConfig>,
    pub chat: Option<ChatConfig>,
    pub monitor: Option<MonitorConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Freeze the banner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatConfig {
    pub reply_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MonitorConfig {
    pub interval_ms: Option<u64>,
    #[serde(default)]
    pub start_paused: bool,
}

impl AuraConfig {
    /// Load the user config. `Ok(None)` when there is no config file.
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

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.app.as_ref().map(|app| app.theme).unwrap_or_default()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        self.chat
            .as_ref()
            .and_then(|chat| chat.reply_delay_ms)
            .map_or(DEFAULT_REPLY_DELAY, timer_from_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.monitor
            .as_ref()
            .and_then(|monitor| monitor.interval_ms)
            .map_or(DEFAULT_TICK_INTERVAL, timer_from_ms)
    }

    #[must_use]
    pub fn start_paused(&self) -> bool {
        self.monitor
            .as_ref()
            .is_some_and(|monitor| monitor.start_paused)
    }
}

fn timer_from_ms(ms: u64) -> Duration {
    if ms < MIN_TIMER_MS {
        tracing::warn!(ms, min = MIN_TIMER_MS, "timer below minimum, clamping");
    }
    Duration::from_millis(ms.max(MIN_TIMER_MS))
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aura").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(toml: &str) -> AuraConfig {
        toml::from_str(toml).expect("valid config")
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse("");
        assert_eq!(config.theme(), Theme::Light);
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.reply_delay(), Duration::from_millis(900));
        assert_eq!(config.tick_interval(), Duration::from_millis(2000));
        assert!(!config.start_paused());
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse(
            r#"
            [app]
            theme = "dark"
            high_contrast = true

            [chat]
            reply_delay_ms = 250

            [monitor]
            interval_ms = 500
            start_paused = true
            "#,
        );
        assert_eq!(config.theme(), Theme::Dark);
        assert!(config.ui_options().high_contrast);
        assert!(!config.ui_options().ascii_only);
        assert_eq!(config.reply_delay(), Duration::from_millis(250));
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert!(config.start_paused());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = parse("[monitor]\ninterval_ms = 0\n");
        assert_eq!(config.tick_interval(), Duration::from_millis(MIN_TIMER_MS));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(toml::from_str::<AuraConfig>("[app]\ntheme = \"sepia\"\n").is_err());
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = AuraConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chat]\nreply_delay_ms = 1200").unwrap();

        let config = AuraConfig::load_from(file.path()).unwrap().unwrap();
        assert_eq!(config.reply_delay(), Duration::from_millis(1200));
    }

    #[test]
    fn load_from_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chat\nreply_delay_ms = ").unwrap();

        let err = AuraConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &file.path().to_path_buf());
    }
}
