//! Vertex angle calculation using dot product
//!
//! Measures the angle at `p2` between the rays p2→p1 and p2→p3.
//! Works on nalgebra static vectors of any dimension; the 2D and 3D
//! tuple helpers cover the common landmark shapes.

use nalgebra::SVector;

/// Calculate the angle at vertex `p2` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees within [0, 180]:
/// - 0° = both rays point the same way
/// - 180° = fully straight
///
/// A zero-length ray (coincident points) yields 0°.
pub fn angle_at_vertex<const D: usize>(
    p1: &SVector<f32, D>,
    p2: &SVector<f32, D>,
    p3: &SVector<f32, D>,
) -> f32 {
    let v1 = p1 - p2;
    let v2 = p3 - p2;

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    // Noisy detections can stack two landmarks on top of each other.
    // A ray short enough to underflow also has a norm of exactly 0.
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    // Rounding can push the ratio just past ±1, which acos turns into NaN
    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}

/// Angle at `p2` for planar points
pub fn angle_2d(p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> f32 {
    angle_at_vertex(
        &SVector::<f32, 2>::new(p1.0, p1.1),
        &SVector::<f32, 2>::new(p2.0, p2.1),
        &SVector::<f32, 2>::new(p3.0, p3.1),
    )
}

/// Angle at `p2` for 3D points
pub fn angle_3d(p1: (f32, f32, f32), p2: (f32, f32, f32), p3: (f32, f32, f32)) -> f32 {
    angle_at_vertex(
        &SVector::<f32, 3>::new(p1.0, p1.1, p1.2),
        &SVector::<f32, 3>::new(p2.0, p2.1, p2.2),
        &SVector::<f32, 3>::new(p3.0, p3.1, p3.2),
    )
}
