// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Maija Calendar GUI config
//!

use crate::app_colours::ColourTheme;
use directories_next::ProjectDirs;
use maija_calendar_core::WeekStart;
use maija_calendar_renderer::{
    Colour, DEFAULT_DAY_WIDTH, DEFAULT_MAX_BOXES_PER_DATE, LayoutParams,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "MaijaCalendar";
const APPLICATION_NAME: &str = "Maija Calendar";
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can arise when loading the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to determine the config directory")]
    NoProjectDirectory,
}

/// The config read from disk at start up.  Every field is optional in the
/// file; missing ones take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixels per day on the timeline
    pub day_width: f64,

    /// Stacking slots per date before placement wraps
    pub max_boxes_per_date: usize,

    /// The left-most column of the calendar grid
    pub week_start: WeekStart,

    /// The fill colour of new text bars
    pub default_bar_colour: Colour,

    /// GUI colour theme
    pub colour_theme: ColourTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_width: DEFAULT_DAY_WIDTH,
            max_boxes_per_date: DEFAULT_MAX_BOXES_PER_DATE,
            week_start: WeekStart::default(),
            default_bar_colour: Colour::GREEN,
            colour_theme: ColourTheme::default(),
        }
    }
}

impl Config {
    /// Load the config from `path` (or the default location if `None`).  Any
    /// problem is logged and the defaults are used instead.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match config_file_path() {
                Ok(path) => path,
                Err(error) => {
                    warn!("{error}, using the default config");
                    return Config::default();
                }
            },
        };
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                info!("Config loaded = {config:?}");
                config
            }
            Ok(None) => {
                info!("No config file at {}, using the default config", path.display());
                Config::default()
            }
            Err(error) => {
                warn!("{error} ({}), using the default config", path.display());
                Config::default()
            }
        }
    }

    /// Read the config at `path`.  `Ok(None)` if there is no file there.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        info!("Loading config from {}", path.display());
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        Ok(Some(Self::from_json(&data)?))
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config.sanitised())
    }

    /// Replace unusable values with their defaults
    fn sanitised(mut self) -> Self {
        let default = Config::default();
        if !(self.day_width.is_finite() && self.day_width > 0.0) {
            warn!("Ignoring config day_width {}", self.day_width);
            self.day_width = default.day_width;
        }
        if self.max_boxes_per_date == 0 {
            warn!("Ignoring config max_boxes_per_date 0");
            self.max_boxes_per_date = default.max_boxes_per_date;
        }
        self
    }

    /// The timeline layout this config asks for
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            day_width: self.day_width,
            max_boxes_per_date: self.max_boxes_per_date,
            ..LayoutParams::default()
        }
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(ConfigError::NoProjectDirectory)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, ConfigError> {
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
        .ok_or(ConfigError::NoProjectDirectory)
}

/// Get the path to the config
fn config_file_path() -> Result<PathBuf, ConfigError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    debug!("Config file path = {config_file:?}");
    Ok(config_file)
}
