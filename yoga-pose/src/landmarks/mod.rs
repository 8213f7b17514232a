//! Landmarks module - pose landmark data from the external detector
//!
//! Re-exports only. All logic in submodules.

mod indices;
mod landmark;

pub use indices::{
    landmark_name,
    LANDMARK_COUNT,
    NOSE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_INDEX, RIGHT_INDEX,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    LEFT_HEEL, RIGHT_HEEL,
    LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX,
};
pub use landmark::{landmarks_from_flat, to_pixel_space, Landmark, FLAT_STRIDE};
