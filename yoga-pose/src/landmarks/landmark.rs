//! Landmark data structure and decoding
//!
//! The detector hands over one flat float buffer per frame:
//! 33 landmarks × (x, y, z, visibility). x/y are normalized to 0-1,
//! z is relative depth.

use serde::{Deserialize, Serialize};

use super::indices::LANDMARK_COUNT;
use crate::error::{PoseError, PoseResult};

/// Floats per landmark in a flat buffer
pub const FLAT_STRIDE: usize = 4;

/// A single 3D landmark point with detection confidence
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default = "default_visibility")]
    pub visibility: f32,
}

fn default_visibility() -> f32 {
    1.0
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Position only; visibility plays no part in angle math
    pub fn position(&self) -> (f32, f32, f32) {
        (self.x, self.y, self.z)
    }
}

/// Decode a flat buffer of 33 × 4 floats
pub fn landmarks_from_flat(data: &[f32]) -> PoseResult<Vec<Landmark>> {
    let expected = LANDMARK_COUNT * FLAT_STRIDE;
    if data.len() != expected {
        return Err(PoseError::InvalidLandmarkBuffer {
            expected,
            actual: data.len(),
        });
    }

    Ok(data
        .chunks_exact(FLAT_STRIDE)
        .map(|c| Landmark::new(c[0], c[1], c[2], c[3]))
        .collect())
}

/// Scale normalized x/y into pixel coordinates
///
/// z and visibility pass through unchanged, matching what the detector
/// reports for depth.
pub fn to_pixel_space(landmarks: &[Landmark], width: f32, height: f32) -> Vec<Landmark> {
    landmarks
        .iter()
        .map(|lm| Landmark {
            x: lm.x * width,
            y: lm.y * height,
            ..*lm
        })
        .collect()
}
