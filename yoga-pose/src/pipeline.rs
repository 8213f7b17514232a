//! Per-frame analysis: detector → joint angles → classification
//!
//! Every frame runs to completion before the next; nothing carries over
//! between frames.

use serde::Serialize;

use crate::classifier::{ClassificationResult, JointFeedback, PoseClassifier};
use crate::config::{CoordinateSpace, EngineConfig};
use crate::error::PoseResult;
use crate::joints::{AngleMapping, JointAngleExtractor};
use crate::landmarks::{to_pixel_space, Landmark};

/// External pose detector
///
/// `Ok(None)` means the image was processed but nobody was found.
pub trait LandmarkProvider {
    type Image;

    fn detect(&mut self, image: &Self::Image) -> PoseResult<Option<Vec<Landmark>>>;
}

/// Everything the presentation layer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameAnalysis {
    /// Empty when no pose was detected
    pub angles: AngleMapping,
    pub result: ClassificationResult,
    pub feedback: Vec<JointFeedback>,
}

impl FrameAnalysis {
    fn no_pose() -> Self {
        Self {
            angles: AngleMapping::new(),
            result: ClassificationResult::unknown(0.0),
            feedback: Vec::new(),
        }
    }

    pub fn pose_detected(&self) -> bool {
        !self.angles.is_empty()
    }
}

pub struct PoseAnalyzer<P> {
    provider: P,
    extractor: JointAngleExtractor,
    classifier: PoseClassifier,
    config: EngineConfig,
}

impl<P: LandmarkProvider> PoseAnalyzer<P> {
    pub fn new(
        provider: P,
        extractor: JointAngleExtractor,
        classifier: PoseClassifier,
        config: EngineConfig,
    ) -> Self {
        Self {
            provider,
            extractor,
            classifier,
            config,
        }
    }

    /// Default joints, references loaded from `config.reference_path`
    pub fn from_config(provider: P, config: EngineConfig) -> Self {
        let classifier = PoseClassifier::from_path_or_empty(config.reference_path.as_deref());
        Self::new(provider, JointAngleExtractor::default(), classifier, config)
    }

    pub fn classifier(&self) -> &PoseClassifier {
        &self.classifier
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze one image
    ///
    /// Only provider failures are errors; "no pose" is a normal result.
    pub fn analyze(&mut self, image: &P::Image) -> PoseResult<FrameAnalysis> {
        let Some(landmarks) = self.provider.detect(image)? else {
            log::debug!("no pose detected");
            return Ok(FrameAnalysis::no_pose());
        };
        Ok(self.analyze_landmarks(&landmarks))
    }

    /// Analyze landmarks already obtained from the provider
    pub fn analyze_landmarks(&self, landmarks: &[Landmark]) -> FrameAnalysis {
        let angles = match self.config.coordinate_space {
            CoordinateSpace::Normalized => {
                let (width, height) = (self.config.image_width, self.config.image_height);
                let scaled = to_pixel_space(landmarks, width, height);
                self.extractor.extract_angles(&scaled)
            }
            CoordinateSpace::Pixel => self.extractor.extract_angles(landmarks),
        };
        if angles.is_empty() {
            return FrameAnalysis::no_pose();
        }

        let result = self.classifier.classify(&angles, self.config.threshold);
        let feedback = if result.is_match() {
            self.classifier
                .feedback(&angles, &result.label, self.config.feedback_tolerance)
        } else {
            Vec::new()
        };

        FrameAnalysis {
            angles,
            result,
            feedback,
        }
    }
}
