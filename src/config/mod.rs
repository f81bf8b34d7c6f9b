use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::geometry::{LandmarkPair, Point2D};

/// Resampling filter used for the single warp pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    Bilinear,
    Bicubic,
}

/// Target geometry and output encoding for aligned portraits.
///
/// Immutable once constructed and passed by reference into the engine; a
/// change here is a deployment event, not a runtime one. Deployments that
/// override the defaults load it from a TOML or JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub target_left: Point2D,
    pub target_right: Point2D,
    pub output_size: (u32, u32),
    pub background_color: [u8; 3],
    pub interpolation: Interpolation,
    pub output_quality: u8,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            target_left: Point2D::new(720.0, 432.0),
            target_right: Point2D::new(360.0, 432.0),
            output_size: (1080, 1080),
            background_color: [255, 255, 255],
            interpolation: Interpolation::Bicubic,
            output_quality: 95,
        }
    }
}

impl TargetConfig {
    /// The target eye positions as a landmark pair in output canvas space.
    pub fn target_pair(&self) -> LandmarkPair {
        LandmarkPair::new(self.target_left, self.target_right)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = fs::read_to_string(path)?;

        if content.trim_start().starts_with('{') {
            serde_json::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        }
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.output_size.0 == 0 || self.output_size.1 == 0 {
            errors.push("output_size dimensions must be positive".to_string());
        }

        if self.output_quality == 0 || self.output_quality > 100 {
            errors.push("output_quality must be between 1 and 100".to_string());
        }

        if self.target_left == self.target_right {
            errors.push("target eye positions must be distinct".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
