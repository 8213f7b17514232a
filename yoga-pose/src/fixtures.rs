//! Shared test fixtures

use crate::landmarks::*;

/// Mirror axis for the right side of the body
const MIRROR_X: f32 = 260.0;

/// Pixel-space figure standing upright with both arms held out sideways
///
/// Elbows, wrists, hips and knees are straight (180°), shoulders and
/// ankles are square (90°).
pub fn arms_out_landmarks() -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::default(); LANDMARK_COUNT];
    let left = [
        (LEFT_SHOULDER, 100.0, 100.0),
        (LEFT_ELBOW, 50.0, 100.0),
        (LEFT_WRIST, 0.0, 100.0),
        (LEFT_INDEX, -20.0, 100.0),
        (LEFT_HIP, 100.0, 250.0),
        (LEFT_KNEE, 100.0, 350.0),
        (LEFT_ANKLE, 100.0, 450.0),
        (LEFT_HEEL, 100.0, 470.0),
        (LEFT_FOOT_INDEX, 130.0, 450.0),
    ];
    for (index, x, y) in left {
        landmarks[index] = Landmark::new(x, y, 0.0, 0.95);
        // MediaPipe right-side ids are always left + 1
        landmarks[index + 1] = Landmark::new(MIRROR_X - x, y, 0.0, 0.95);
    }
    landmarks[NOSE] = Landmark::new(130.0, 40.0, 0.0, 0.99);
    landmarks
}

/// Same figure in normalized 0-1 coordinates for a given frame size
pub fn arms_out_normalized(width: f32, height: f32) -> Vec<Landmark> {
    arms_out_landmarks()
        .into_iter()
        .map(|lm| Landmark { x: lm.x / width, y: lm.y / height, ..lm })
        .collect()
}
