//! Editor configuration.
//!
//! Read from an optional JSON file; any field left out takes its default.
//!
//! ```json
//! { "scenes_dir": "scenes", "scene_extension": "p3", "default_output": "raytraced.bmp" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::FormatVersion;
use crate::scene::DEFAULT_OUTPUT;

/// Errors that can occur while reading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings shared by the editing session and the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Directory holding scene files
    pub scenes_dir: PathBuf,

    /// Scene file extension, without the dot
    pub scene_extension: String,

    /// Image path restored by a reset
    pub default_output: String,

    /// Format used when saving
    pub format_version: FormatVersion,

    /// Pixel color written where a ray hits geometry
    pub hit_color: [f32; 3],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            scenes_dir: PathBuf::from("scenes"),
            scene_extension: "p3".to_string(),
            default_output: DEFAULT_OUTPUT.to_string(),
            format_version: FormatVersion::V2,
            hit_color: [1.0, 1.0, 1.0],
        }
    }
}

impl EditorConfig {
    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Parse configuration from JSON text.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
