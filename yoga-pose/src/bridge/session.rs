//! Pose session - JS-facing handle over the extractor and classifier
//!
//! JavaScript runs MediaPipe, pushes each frame's landmarks here and
//! reads back angles, label and hints. The session keeps only the most
//! recent frame's angles.

use wasm_bindgen::prelude::*;

use crate::classifier::PoseClassifier;
use crate::config::EngineConfig;
use crate::joints::{AngleMapping, JointAngleExtractor};
use crate::landmarks::{landmarks_from_flat, to_pixel_space};

/// Classification result as seen from JavaScript
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone, Debug, PartialEq)]
pub struct JsClassification {
    pub label: String,
    pub score: f32,
    pub matched: bool,
}

#[wasm_bindgen]
pub struct PoseSession {
    extractor: JointAngleExtractor,
    classifier: PoseClassifier,
    config: EngineConfig,
    angles: AngleMapping,
}

#[wasm_bindgen]
impl PoseSession {
    /// Create a session from reference pose JSON
    ///
    /// Malformed JSON is logged and leaves the session without
    /// references, so every frame reads as Unknown.
    #[wasm_bindgen(constructor)]
    pub fn new(reference_json: &str, threshold: f32) -> PoseSession {
        let config = EngineConfig {
            threshold,
            reference_path: None,
            ..EngineConfig::default()
        };
        PoseSession {
            extractor: JointAngleExtractor::default(),
            classifier: PoseClassifier::from_json_or_empty(reference_json),
            config,
            angles: AngleMapping::new(),
        }
    }

    /// Video frame size used to scale normalized landmarks to pixels
    #[wasm_bindgen(js_name = setFrameSize)]
    pub fn set_frame_size(&mut self, width: f32, height: f32) {
        self.config.image_width = width;
        self.config.image_height = height;
    }

    #[wasm_bindgen(js_name = setFeedbackTolerance)]
    pub fn set_feedback_tolerance(&mut self, degrees: f32) {
        self.config.feedback_tolerance = degrees;
    }

    /// Called from JavaScript with a flat Float32Array of 132 values
    /// (33 landmarks × x, y, z, visibility, normalized)
    ///
    /// Returns false and clears the frame if the buffer has the wrong length.
    #[wasm_bindgen(js_name = updateLandmarks)]
    pub fn update_landmarks(&mut self, data: &[f32]) -> bool {
        match landmarks_from_flat(data) {
            Ok(landmarks) => {
                let (width, height) = (self.config.image_width, self.config.image_height);
                let scaled = to_pixel_space(&landmarks, width, height);
                self.angles = self.extractor.extract_angles(&scaled);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                self.angles.clear();
                false
            }
        }
    }

    /// The detector found nobody in this frame
    #[wasm_bindgen(js_name = clearLandmarks)]
    pub fn clear_landmarks(&mut self) {
        self.angles.clear();
    }

    #[wasm_bindgen(js_name = hasPose)]
    pub fn has_pose(&self) -> bool {
        !self.angles.is_empty()
    }

    /// Classify the current frame
    pub fn classify(&self) -> JsClassification {
        let result = self.classifier.classify(&self.angles, self.config.threshold);
        JsClassification {
            matched: result.is_match(),
            label: result.label,
            score: result.score,
        }
    }

    /// Names of the joints in the current frame, in joint order
    #[wasm_bindgen(js_name = jointNames)]
    pub fn joint_names(&self) -> Vec<String> {
        self.angles.keys().cloned().collect()
    }

    /// Angles of the current frame, aligned with `jointNames()`
    #[wasm_bindgen(js_name = jointAngles)]
    pub fn joint_angles(&self) -> Vec<f32> {
        self.angles.values().copied().collect()
    }

    /// Current angles as a plain `{ joint: degrees }` object
    pub fn angles(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.angles).unwrap_or(JsValue::NULL)
    }

    /// Hints toward the matched pose, empty when nothing matched
    pub fn feedback(&self) -> Vec<String> {
        let result = self.classifier.classify(&self.angles, self.config.threshold);
        if !result.is_match() {
            return Vec::new();
        }
        self.classifier
            .feedback(&self.angles, &result.label, self.config.feedback_tolerance)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Labels of all loaded reference poses
    #[wasm_bindgen(js_name = poseLabels)]
    pub fn pose_labels(&self) -> Vec<String> {
        self.classifier.library().labels().map(str::to_string).collect()
    }
}
