//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use techradar::{RadarError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration value `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<ConfigError> for RadarError {
    fn from(err: ConfigError) -> Self {
        RadarError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (techradar/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - A layout size or style color in the file is unusable
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RadarError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:? = path; "Loading explicit configuration");
        return load_config_file(path);
    }

    match search_paths().into_iter().find(|candidate| candidate.exists()) {
        Some(found) => {
            info!(path:? = found; "Loading discovered configuration");
            load_config_file(found)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit configuration locations, most specific first.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("techradar/config.toml")];
    match ProjectDirs::from("com", "techradar", "techradar") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

/// Load and check configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, RadarError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    check_config(&config)?;

    Ok(config)
}

/// Rejects values that would produce a degenerate radar.
///
/// Colors are parsed here so a typo fails before any document is loaded.
fn check_config(config: &AppConfig) -> Result<(), ConfigError> {
    let layout = config.layout();
    for (field, value) in [
        ("layout.diagram_size", layout.diagram_size()),
        ("layout.outer_radius", layout.outer_radius()),
        ("layout.dot_radius", layout.dot_radius()),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::InvalidValue {
                field,
                reason: format!("{value} is not a positive number"),
            });
        }
    }
    if layout.outer_radius() > layout.diagram_size() / 2.0 {
        return Err(ConfigError::InvalidValue {
            field: "layout.outer_radius",
            reason: format!(
                "{} does not fit a diagram of size {}",
                layout.outer_radius(),
                layout.diagram_size()
            ),
        });
    }

    let style = config.style();
    if !(0.0..=1.0).contains(&style.min_ring_opacity()) {
        return Err(ConfigError::InvalidValue {
            field: "style.min_ring_opacity",
            reason: format!("{} is outside 0..=1", style.min_ring_opacity()),
        });
    }
    let color_error = |field: &'static str| {
        move |err: techradar::color::ColorError| ConfigError::InvalidValue {
            field,
            reason: err.to_string(),
        }
    };
    style
        .background_color()
        .map_err(color_error("style.background_color"))?;
    style.core_color().map_err(color_error("style.core_color"))?;
    for index in 0..4 {
        style
            .quadrant_color(index)
            .map_err(color_error("style.quadrant_colors"))?;
    }

    Ok(())
}
