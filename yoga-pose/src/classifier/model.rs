//! Reference-pose classifier
//!
//! Scores a frame's angles against every reference pose and reports the
//! best one when it clears the threshold. Holds no per-frame state, so a
//! single classifier can serve any number of frames or threads.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use super::feedback::{joint_feedback, JointFeedback};
use super::reference::ReferenceLibrary;
use super::similarity::similarity;
use crate::joints::AngleMapping;

/// Label reported when no reference clears the threshold
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Minimum similarity (exclusive) for a match
pub const DEFAULT_THRESHOLD: f32 = 30.0;

/// Best-matching label and its similarity score [0, 100]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    pub score: f32,
}

impl ClassificationResult {
    /// Non-match that still reports how close the best candidate was
    pub fn unknown(score: f32) -> Self {
        Self {
            label: UNKNOWN_LABEL.to_string(),
            score,
        }
    }

    pub fn is_match(&self) -> bool {
        self.label != UNKNOWN_LABEL
    }
}

/// Classifies angle mappings against a shared, read-only reference library
#[derive(Clone, Debug, Default)]
pub struct PoseClassifier {
    library: Arc<ReferenceLibrary>,
}

impl PoseClassifier {
    pub fn new(library: ReferenceLibrary) -> Self {
        Self {
            library: Arc::new(library),
        }
    }

    /// Load references from a file, or start empty
    ///
    /// A missing path, unreadable file or malformed content is logged and
    /// leaves the classifier with no references; every frame then
    /// classifies as Unknown.
    pub fn from_path_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::warn!(
                "no reference pose file configured; all poses will classify as {UNKNOWN_LABEL}"
            );
            return Self::default();
        };
        match ReferenceLibrary::load(path) {
            Ok(library) => Self::new(library),
            Err(e) => {
                log::warn!(
                    "error loading {}: {e}; continuing without reference poses",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Decode references from JSON text, or start empty
    pub fn from_json_or_empty(json: &str) -> Self {
        match ReferenceLibrary::from_json_str(json) {
            Ok(library) => Self::new(library),
            Err(e) => {
                log::warn!("invalid reference poses: {e}; continuing without reference poses");
                Self::default()
            }
        }
    }

    pub fn library(&self) -> &ReferenceLibrary {
        &self.library
    }

    /// Similarity to one named reference, if it exists
    pub fn similarity_to(&self, current: &AngleMapping, label: &str) -> Option<f32> {
        self.library.get(label).map(|reference| similarity(current, reference))
    }

    /// Classify one frame
    ///
    /// The best score must be strictly greater than `threshold`. Ties go to
    /// the reference that comes first in library order.
    pub fn classify(&self, current: &AngleMapping, threshold: f32) -> ClassificationResult {
        let mut best_label: Option<&str> = None;
        let mut best_score = 0.0;

        for (label, reference) in self.library.iter() {
            let score = similarity(current, reference);
            if score > best_score {
                best_score = score;
                best_label = Some(label);
            }
        }

        match best_label {
            Some(label) if best_score > threshold => {
                log::debug!("classified as {label} ({best_score:.1}%)");
                ClassificationResult {
                    label: label.to_string(),
                    score: best_score,
                }
            }
            _ => ClassificationResult::unknown(best_score),
        }
    }

    /// Classify many independent frames
    #[cfg(not(feature = "parallel"))]
    pub fn classify_batch(
        &self,
        frames: &[AngleMapping],
        threshold: f32,
    ) -> Vec<ClassificationResult> {
        frames.iter().map(|angles| self.classify(angles, threshold)).collect()
    }

    /// Classify many independent frames on the rayon pool
    #[cfg(feature = "parallel")]
    pub fn classify_batch(
        &self,
        frames: &[AngleMapping],
        threshold: f32,
    ) -> Vec<ClassificationResult> {
        use rayon::prelude::*;

        frames.par_iter().map(|angles| self.classify(angles, threshold)).collect()
    }

    /// Corrective hints toward the named reference; none for unknown labels
    pub fn feedback(
        &self,
        current: &AngleMapping,
        label: &str,
        tolerance: f32,
    ) -> Vec<JointFeedback> {
        self.library
            .get(label)
            .map(|reference| joint_feedback(current, reference, tolerance))
            .unwrap_or_default()
    }
}
