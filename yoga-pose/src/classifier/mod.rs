//! Classifier module - weighted reference-pose matching
//!
//! Angle mappings in, (label, score) out. Knows nothing about images
//! or landmarks.

mod feedback;
mod model;
mod reference;
mod similarity;

pub use feedback::{
    display_joint_name, joint_feedback, Correction, JointFeedback, DEFAULT_FEEDBACK_TOLERANCE,
};
pub use model::{ClassificationResult, PoseClassifier, DEFAULT_THRESHOLD, UNKNOWN_LABEL};
pub use reference::{ReferenceLibrary, ReferencePose, DEFAULT_WEIGHT, WEIGHTS_KEY};
pub use similarity::{joint_deltas, similarity, MAX_ANGLE_ERROR};
