use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classifier::{DEFAULT_FEEDBACK_TOLERANCE, DEFAULT_THRESHOLD};
use crate::error::PoseResult;

/// Unit of the x/y coordinates the landmark provider reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// 0-1 relative to the frame; scaled to pixels before angle math
    #[default]
    Normalized,
    /// Already in pixels
    Pixel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub threshold: f32,
    pub feedback_tolerance: f32,
    /// Absent from the file means no reference poses
    #[serde(default)]
    pub reference_path: Option<PathBuf>,
    pub coordinate_space: CoordinateSpace,
    pub image_width: f32,
    pub image_height: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            feedback_tolerance: DEFAULT_FEEDBACK_TOLERANCE,
            reference_path: Some(PathBuf::from("reference_poses_weighted.json")),
            coordinate_space: CoordinateSpace::Normalized,
            image_width: 640.0,
            image_height: 480.0,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> PoseResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> PoseResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PoseResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
