//! Optional user configuration.
//!
//! Read once at startup from `~/.godelarium/config.toml`. Everything is
//! optional; a missing or malformed file falls back to defaults with a
//! warning in the log.

use std::path::PathBuf;

use godel_types::ui::UiOptions;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    pub ui: Option<UiSection>,
    pub storage: Option<StorageSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    pub ascii_only: Option<bool>,
    pub high_contrast: Option<bool>,
    pub reduced_motion: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSection {
    /// Overrides the default progress directory.
    pub dir: Option<PathBuf>,
}

impl GameConfig {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolved UI options, with defaults for anything unset.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let ui = self.ui.as_ref();
        UiOptions {
            ascii_only: ui.and_then(|u| u.ascii_only).unwrap_or(false),
            high_contrast: ui.and_then(|u| u.high_contrast).unwrap_or(false),
            reduced_motion: ui.and_then(|u| u.reduced_motion).unwrap_or(false),
        }
    }

    #[must_use]
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage.as_ref().and_then(|s| s.dir.clone())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".godelarium").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui_options(), UiOptions::default());
        assert!(config.storage_dir().is_none());
    }

    #[test]
    fn ui_section_overrides_defaults() {
        let config: GameConfig = toml::from_str(
            "[ui]\nascii_only = true\nhigh_contrast = true\n",
        )
        .unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.high_contrast);
        assert!(!options.reduced_motion);
    }

    #[test]
    fn storage_dir_is_read() {
        let config: GameConfig = toml::from_str("[storage]\ndir = \"/tmp/godel\"\n").unwrap();
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/tmp/godel")));
    }
}
