//! Yoga Pose - joint angles and reference-pose classification
//!
//! Landmarks from an external pose detector are reduced to 14 joint
//! angles, then scored against a library of weighted reference poses.
//!
//! Entry point for both native use and the WASM module. Only contains:
//! - Module declarations and re-exports
//! - wasm_bindgen entry points that delegate to submodules
//!
//! ```
//! use yoga_pose::{extract_angles, Landmark, PoseClassifier, DEFAULT_THRESHOLD};
//!
//! let classifier = PoseClassifier::from_json_or_empty(r#"{"Mountain": {"left_knee": 180}}"#);
//! let frame: Vec<Landmark> = Vec::new(); // detector found nobody
//! let result = classifier.classify(&extract_angles(&frame), DEFAULT_THRESHOLD);
//! assert_eq!(result.label, "Unknown");
//! ```

pub mod bridge;
pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod joints;
pub mod landmarks;
pub mod pipeline;

#[cfg(test)]
mod fixtures;

use wasm_bindgen::prelude::*;

pub use bridge::{JsClassification, PoseSession};
pub use classifier::{
    joint_deltas, similarity, ClassificationResult, JointFeedback, PoseClassifier,
    ReferenceLibrary, ReferencePose, DEFAULT_FEEDBACK_TOLERANCE, DEFAULT_THRESHOLD,
    UNKNOWN_LABEL,
};
pub use config::{CoordinateSpace, EngineConfig};
pub use error::{PoseError, PoseResult};
pub use geometry::{angle_2d, angle_3d, angle_at_vertex};
pub use joints::{extract_angles, AngleMapping, JointAngleExtractor, JointSpec, JointTopology};
pub use landmarks::Landmark;
pub use pipeline::{FrameAnalysis, LandmarkProvider, PoseAnalyzer};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// Level: "trace", "debug", "info", "warn" or "error" (default "info").
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("yoga-pose {} logging at {}", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
