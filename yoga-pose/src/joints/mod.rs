//! Joints module - named joint topology and per-frame angle extraction
//!
//! Re-exports only. All logic in submodules.

mod extractor;
mod topology;

pub use extractor::{extract_angles, AngleMapping, JointAngleExtractor};
pub use topology::{JointSpec, JointTopology, DEFAULT_JOINTS};
