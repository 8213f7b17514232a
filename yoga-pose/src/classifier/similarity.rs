//! Weighted angle similarity
//!
//! Each shared joint scores 1 - |Δ|/180, so every joint contributes
//! within [0, 1] before weighting. Joints missing on either side are left
//! out entirely; a reference may omit joints it does not care about.

use indexmap::IndexMap;

use super::reference::ReferencePose;
use crate::joints::AngleMapping;

/// Largest possible difference between two joint angles
pub const MAX_ANGLE_ERROR: f32 = 180.0;

/// Similarity of a live frame to a reference, as a percentage [0, 100]
///
/// Returns 0 when the two share no joints or when every shared joint
/// carries zero weight.
pub fn similarity(current: &AngleMapping, reference: &ReferencePose) -> f32 {
    let mut weighted_score = 0.0;
    let mut total_weight = 0.0;

    for (joint, target) in &reference.target {
        let Some(measured) = current.get(joint) else {
            continue;
        };
        // f32::min drops a NaN error, which scores the joint as a full miss
        let normalized_error = ((measured - target).abs() / MAX_ANGLE_ERROR).min(1.0);
        let weight = reference.weight(joint);

        weighted_score += (1.0 - normalized_error) * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 || !total_weight.is_finite() {
        return 0.0;
    }

    (weighted_score / total_weight * 100.0).clamp(0.0, 100.0)
}

/// Signed per-joint difference (current - target) over shared joints
pub fn joint_deltas(current: &AngleMapping, reference: &ReferencePose) -> IndexMap<String, f32> {
    reference
        .target
        .iter()
        .filter_map(|(joint, target)| {
            current
                .get(joint)
                .map(|measured| (joint.clone(), measured - target))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mapping(pairs: &[(&str, f32)]) -> AngleMapping {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_elbows_example() {
        let reference = ReferencePose::new(mapping(&[("left_elbow", 90.0), ("right_elbow", 90.0)]));
        let current = mapping(&[("left_elbow", 90.0), ("right_elbow", 100.0)]);

        // ((1 - 0) + (1 - 10/180)) / 2 * 100
        assert_abs_diff_eq!(similarity(&current, &reference), 97.2222, epsilon = 1e-3);
    }

    #[test]
    fn test_perfect_match() {
        let target = mapping(&[("left_knee", 45.0), ("right_knee", 178.5), ("left_hip", 120.0)]);
        let mut weights = IndexMap::new();
        weights.insert("left_hip".to_string(), 2.0);
        let reference = ReferencePose::new(target.clone()).with_weights(weights);

        assert_eq!(similarity(&target, &reference), 100.0);
    }

    #[test]
    fn test_no_common_joints() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0)]));
        let current = mapping(&[("right_elbow", 90.0)]);
        assert_eq!(similarity(&current, &reference), 0.0);
        assert_eq!(similarity(&AngleMapping::new(), &reference), 0.0);
    }

    #[test]
    fn test_extra_joints_ignored() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0)]));
        let current = mapping(&[("left_knee", 90.0), ("right_elbow", 3.0)]);
        assert_eq!(similarity(&current, &reference), 100.0);
    }

    #[test]
    fn test_opposite_angles_score_zero() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 0.0)]));
        let current = mapping(&[("left_knee", 180.0)]);
        assert_eq!(similarity(&current, &reference), 0.0);
    }

    #[test]
    fn test_default_weight_equivalence() {
        let target = mapping(&[("left_knee", 90.0), ("right_knee", 170.0), ("left_elbow", 30.0)]);
        let current = mapping(&[("left_knee", 120.0), ("right_knee", 150.0), ("left_elbow", 45.0)]);

        let unweighted = ReferencePose::new(target.clone());
        let ones = target.keys().map(|k| (k.clone(), 1.0)).collect();
        let weighted = ReferencePose::new(target).with_weights(ones);

        assert_eq!(similarity(&current, &unweighted), similarity(&current, &weighted));
    }

    #[test]
    fn test_weights_shift_emphasis() {
        let target = mapping(&[("left_knee", 90.0), ("right_knee", 90.0)]);
        // left knee perfect, right knee off by 90
        let current = mapping(&[("left_knee", 90.0), ("right_knee", 180.0)]);

        let mut weights = IndexMap::new();
        weights.insert("left_knee".to_string(), 3.0);
        let reference = ReferencePose::new(target).with_weights(weights);

        // (1.0 * 3 + 0.5 * 1) / 4
        assert_abs_diff_eq!(similarity(&current, &reference), 87.5, epsilon = 1e-4);
    }

    #[test]
    fn test_all_zero_weights_score_zero() {
        let mut weights = IndexMap::new();
        weights.insert("left_knee".to_string(), 0.0);
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0)])).with_weights(weights);
        assert_eq!(similarity(&mapping(&[("left_knee", 90.0)]), &reference), 0.0);
    }

    #[test]
    fn test_bounds_over_grid() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 37.0), ("right_hip", 142.0)]));
        for a in (0..=180).step_by(15) {
            for b in (0..=180).step_by(15) {
                let current = mapping(&[("left_knee", a as f32), ("right_hip", b as f32)]);
                let score = similarity(&current, &reference);
                assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
            }
        }
    }

    #[test]
    fn test_overflowing_weights_stay_bounded() {
        let target = mapping(&[("left_knee", 45.0), ("right_knee", 90.0), ("left_hip", 170.0)]);
        let weights = target.keys().map(|k| (k.clone(), 3e38)).collect();
        let reference = ReferencePose::new(target.clone()).with_weights(weights);

        let score = similarity(&target, &reference);
        assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
    }

    #[test]
    fn test_nan_angle_counts_as_miss() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0), ("right_knee", 90.0)]));
        let current = mapping(&[("left_knee", f32::NAN), ("right_knee", 90.0)]);
        assert_abs_diff_eq!(similarity(&current, &reference), 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_joint_deltas_signed() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0), ("right_knee", 90.0)]));
        let current = mapping(&[("left_knee", 100.0), ("right_knee", 75.0), ("neck", 10.0)]);

        let deltas = joint_deltas(&current, &reference);
        assert_eq!(deltas.len(), 2);
        assert_eq!(deltas["left_knee"], 10.0);
        assert_eq!(deltas["right_knee"], -15.0);
    }
}
