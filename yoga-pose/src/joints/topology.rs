//! Joint topology - which three landmarks define each named angle
//!
//! The angle of a joint is measured at the middle landmark `b`
//! between the rays b→a and b→c.

use serde::{Deserialize, Serialize};

use crate::error::{PoseError, PoseResult};
use crate::landmarks::LANDMARK_COUNT;

/// The 14 joints every frame is reduced to (left/right symmetric)
pub const DEFAULT_JOINTS: [(&str, [usize; 3]); 14] = [
    ("left_elbow", [11, 13, 15]),
    ("right_elbow", [12, 14, 16]),
    ("left_wrist", [13, 15, 19]),
    ("right_wrist", [14, 16, 20]),
    ("left_shoulder", [13, 11, 23]),
    ("right_shoulder", [14, 12, 24]),
    ("left_hip", [11, 23, 25]),
    ("right_hip", [12, 24, 26]),
    ("left_knee", [23, 25, 27]),
    ("right_knee", [24, 26, 28]),
    ("left_ankle", [25, 27, 31]),
    ("right_ankle", [26, 28, 32]),
    ("left_heel", [27, 29, 31]),
    ("right_heel", [28, 30, 32]),
];

/// A named joint and its landmark triple
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointSpec {
    pub name: String,
    /// First ray endpoint
    pub a: usize,
    /// Vertex
    pub b: usize,
    /// Second ray endpoint
    pub c: usize,
}

impl JointSpec {
    pub fn new(name: impl Into<String>, a: usize, b: usize, c: usize) -> Self {
        Self { name: name.into(), a, b, c }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    fn validate(&self) -> PoseResult<()> {
        if self.name.is_empty() {
            return Err(PoseError::invalid_joint("", "joint name is empty"));
        }
        if self.a == self.b || self.b == self.c || self.a == self.c {
            return Err(PoseError::invalid_joint(
                &self.name,
                format!("landmark ids must be distinct, got {:?}", self.indices()),
            ));
        }
        if let Some(id) = self.indices().into_iter().find(|&id| id >= LANDMARK_COUNT) {
            return Err(PoseError::invalid_joint(
                &self.name,
                format!("landmark id {id} is outside 0..{LANDMARK_COUNT}"),
            ));
        }
        Ok(())
    }
}

/// Fixed, ordered set of joints. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JointTopology {
    joints: Vec<JointSpec>,
}

impl JointTopology {
    /// Build a custom topology, checking ids and name uniqueness
    pub fn new(joints: Vec<JointSpec>) -> PoseResult<Self> {
        for (i, joint) in joints.iter().enumerate() {
            joint.validate()?;
            if joints[..i].iter().any(|earlier| earlier.name == joint.name) {
                return Err(PoseError::invalid_joint(&joint.name, "duplicate joint name"));
            }
        }
        Ok(Self { joints })
    }

    pub fn joints(&self) -> &[JointSpec] {
        &self.joints
    }

    pub fn get(&self, name: &str) -> Option<&JointSpec> {
        self.joints.iter().find(|j| j.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.joints.iter().map(|j| j.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

impl Default for JointTopology {
    fn default() -> Self {
        Self {
            joints: DEFAULT_JOINTS
                .iter()
                .map(|(name, [a, b, c])| JointSpec::new(*name, *a, *b, *c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_topology_is_valid() {
        let topology = JointTopology::default();
        assert_eq!(topology.len(), 14);
        // Re-validating the built-in table must succeed
        assert!(JointTopology::new(topology.joints().to_vec()).is_ok());
    }

    #[test]
    fn test_default_vertex_lookup() {
        let topology = JointTopology::default();
        let shoulder = topology.get("left_shoulder").unwrap();
        assert_eq!(shoulder.indices(), [13, 11, 23]);
        assert!(topology.get("neck").is_none());
    }

    #[test]
    fn test_rejects_repeated_landmark() {
        let err = JointTopology::new(vec![JointSpec::new("bad", 11, 11, 15)]).unwrap_err();
        assert!(matches!(err, PoseError::InvalidJoint { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_landmark() {
        let err = JointTopology::new(vec![JointSpec::new("bad", 11, 13, 40)]).unwrap_err();
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let joints = vec![
            JointSpec::new("left_elbow", 11, 13, 15),
            JointSpec::new("left_elbow", 12, 14, 16),
        ];
        assert!(JointTopology::new(joints).is_err());
    }
}
