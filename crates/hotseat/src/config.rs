//! Configuration file loading for the terminal front-end.
//!
//! Settings live in `hotseat.toml`. Every field has a default, so a missing
//! file or a partial one is fine.

use hotseat_engine::{BoardGeometry, GeometryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The board section describes an unusable geometry.
    #[error("invalid board geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// How frames are written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A text board.
    #[default]
    Ascii,
    /// One JSON snapshot per line.
    Json,
}

/// The `[display]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub format: OutputFormat,
    /// Print file letters and rank digits around the board.
    pub coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            format: OutputFormat::Ascii,
            coordinates: true,
        }
    }
}

/// Front-end configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HotseatConfig {
    /// Window geometry used to turn `click X Y` input into cells.
    pub board: BoardGeometry,
    pub display: DisplayConfig,
}

impl HotseatConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`Self::default_path()`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::default_path();
                if !default.exists() {
                    tracing::debug!("no {} found, using defaults", default.display());
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: HotseatConfig = toml::from_str(content)?;
        config.board.validate()?;
        Ok(config)
    }

    /// Returns the configuration file looked for when none is given.
    pub fn default_path() -> PathBuf {
        PathBuf::from("hotseat.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = HotseatConfig::from_toml("").unwrap();
        assert_eq!(config, HotseatConfig::default());
        assert_eq!(config.board.tile_size, 96);
        assert!(config.display.coordinates);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = HotseatConfig::from_toml(
            r#"
            [board]
            tile_size = 64
            origin_x = 10

            [display]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.board.tile_size, 64);
        assert_eq!(config.board.origin_x, 10);
        assert_eq!(config.board.sprite_inset, 15);
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(config.display.coordinates);
    }

    #[test]
    fn invalid_toml() {
        let err = HotseatConfig::from_toml("[board\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unusable_geometry() {
        let err = HotseatConfig::from_toml("[board]\ntile_size = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Geometry(GeometryError::NonPositiveTile(0))
        ));
    }

    #[test]
    fn board_past_the_pixel_range_is_rejected() {
        let err = HotseatConfig::from_toml("[board]\ntile_size = 400000000\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Geometry(GeometryError::OutOfRange { axis: "origin_x", .. })
        ));

        let err = HotseatConfig::from_toml("[board]\norigin_y = 2147483000\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Geometry(GeometryError::OutOfRange { axis: "origin_y", .. })
        ));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = HotseatConfig::load(Some(Path::new("/nonexistent/hotseat.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
