//! Corrective feedback against a matched reference pose

use std::fmt;

use serde::Serialize;

use super::reference::ReferencePose;
use crate::joints::AngleMapping;

/// Deviation (degrees) a joint may have before a hint is given
pub const DEFAULT_FEEDBACK_TOLERANCE: f32 = 15.0;

/// Which way a joint should move to approach the target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Correction {
    /// Joint is more closed than the target
    Straighten,
    /// Joint is more open than the target
    Bend,
}

impl Correction {
    pub fn verb(&self) -> &'static str {
        match self {
            Correction::Straighten => "Straighten",
            Correction::Bend => "Bend",
        }
    }
}

/// One joint that is outside tolerance
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JointFeedback {
    pub joint: String,
    pub current: f32,
    pub target: f32,
    pub correction: Correction,
}

impl JointFeedback {
    /// Signed difference, current - target
    pub fn delta(&self) -> f32 {
        self.current - self.target
    }
}

impl fmt::Display for JointFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} your {} more",
            self.correction.verb(),
            display_joint_name(&self.joint)
        )
    }
}

/// "left_elbow" → "Left Elbow"
pub fn display_joint_name(joint: &str) -> String {
    joint
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Hints for every targeted joint deviating by more than `tolerance`
///
/// Follows the reference's joint order. Joints absent from `current`
/// get no hint.
pub fn joint_feedback(
    current: &AngleMapping,
    reference: &ReferencePose,
    tolerance: f32,
) -> Vec<JointFeedback> {
    reference
        .target
        .iter()
        .filter_map(|(joint, &target)| {
            let &measured = current.get(joint)?;
            if (measured - target).abs() <= tolerance {
                return None;
            }
            let correction = if measured < target {
                Correction::Straighten
            } else {
                Correction::Bend
            };
            Some(JointFeedback {
                joint: joint.clone(),
                current: measured,
                target,
                correction,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, f32)]) -> AngleMapping {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_joint_name("left_elbow"), "Left Elbow");
        assert_eq!(display_joint_name("RIGHT_heel"), "Right Heel");
        assert_eq!(display_joint_name("torso"), "Torso");
    }

    #[test]
    fn test_hints_only_outside_tolerance() {
        let reference = ReferencePose::new(mapping(&[
            ("left_knee", 90.0),
            ("right_knee", 180.0),
            ("left_elbow", 180.0),
        ]));
        let current = mapping(&[
            ("left_knee", 120.0),
            ("right_knee", 150.0),
            ("left_elbow", 170.0),
        ]);

        let hints = joint_feedback(&current, &reference, DEFAULT_FEEDBACK_TOLERANCE);
        assert_eq!(hints.len(), 2);

        assert_eq!(hints[0].joint, "left_knee");
        assert_eq!(hints[0].correction, Correction::Bend);
        assert_eq!(hints[0].to_string(), "Bend your Left Knee more");
        assert_eq!(hints[0].delta(), 30.0);

        assert_eq!(hints[1].correction, Correction::Straighten);
        assert_eq!(hints[1].to_string(), "Straighten your Right Knee more");
    }

    #[test]
    fn test_exact_tolerance_is_fine() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0)]));
        let current = mapping(&[("left_knee", 105.0)]);
        assert!(joint_feedback(&current, &reference, 15.0).is_empty());
    }

    #[test]
    fn test_missing_joint_no_hint() {
        let reference = ReferencePose::new(mapping(&[("left_knee", 90.0)]));
        assert!(joint_feedback(&AngleMapping::new(), &reference, 15.0).is_empty());
    }
}
