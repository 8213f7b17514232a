//! Joint angle extraction
//!
//! Turns one frame of landmarks into joint name → degrees.
//! Coordinates must already share one unit (pixel scaling happens upstream).

use indexmap::IndexMap;

use super::topology::JointTopology;
use crate::geometry::angle_3d;
use crate::landmarks::Landmark;

/// Joint name → angle in degrees [0, 180], in topology order
pub type AngleMapping = IndexMap<String, f32>;

/// Applies the vertex angle to every joint of a topology
#[derive(Clone, Debug, Default)]
pub struct JointAngleExtractor {
    topology: JointTopology,
}

impl JointAngleExtractor {
    pub fn new(topology: JointTopology) -> Self {
        Self { topology }
    }

    pub fn topology(&self) -> &JointTopology {
        &self.topology
    }

    /// Extract all joint angles for one frame
    ///
    /// An empty landmark list means the detector found nobody; the result
    /// is then an empty mapping, never a mapping of zeros.
    pub fn extract_angles(&self, landmarks: &[Landmark]) -> AngleMapping {
        let mut angles = AngleMapping::with_capacity(self.topology.len());
        if landmarks.is_empty() {
            return angles;
        }

        for joint in self.topology.joints() {
            let points = (
                landmarks.get(joint.a),
                landmarks.get(joint.b),
                landmarks.get(joint.c),
            );
            let (Some(a), Some(b), Some(c)) = points else {
                log::debug!(
                    "skipping {}: needs landmarks {:?}, frame has {}",
                    joint.name,
                    joint.indices(),
                    landmarks.len()
                );
                continue;
            };
            angles.insert(
                joint.name.clone(),
                angle_3d(a.position(), b.position(), c.position()),
            );
        }

        angles
    }
}

/// Extract angles with the default 14-joint topology
pub fn extract_angles(landmarks: &[Landmark]) -> AngleMapping {
    JointAngleExtractor::default().extract_angles(landmarks)
}
