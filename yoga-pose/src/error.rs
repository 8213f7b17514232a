//! Error types for pose analysis
//!
//! Nothing in the per-frame path returns these: missing landmarks, degenerate
//! geometry and empty reference libraries all degrade to "Unknown, 0%".
//! They surface only from loaders and constructors that validate input.

use thiserror::Error;

/// Result alias used by fallible loaders
pub type PoseResult<T> = Result<T, PoseError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PoseError {
    /// Reading a config or reference file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reference pose JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Engine config could not be decoded
    #[error("TOML decode error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Engine config could not be encoded
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// A reference pose is structurally valid JSON but semantically wrong
    #[error("invalid reference pose '{pose}': {message}")]
    InvalidReference {
        /// Label of the offending pose
        pose: String,
        /// What is wrong with it
        message: String,
    },

    /// A joint definition breaks the topology invariants
    #[error("invalid joint '{joint}': {message}")]
    InvalidJoint {
        /// Name of the offending joint
        joint: String,
        /// What is wrong with it
        message: String,
    },

    /// A flat landmark buffer has the wrong length
    #[error("invalid landmark buffer: expected {expected} values, got {actual}")]
    InvalidLandmarkBuffer {
        /// Expected number of floats
        expected: usize,
        /// Number of floats received
        actual: usize,
    },

    /// The external landmark provider failed
    #[error("landmark provider error: {0}")]
    Provider(String),
}

impl PoseError {
    pub fn invalid_reference(pose: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidReference {
            pose: pose.into(),
            message: message.into(),
        }
    }

    pub fn invalid_joint(joint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidJoint {
            joint: joint.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PoseError::invalid_reference("Tree", "negative weight");
        assert_eq!(err.to_string(), "invalid reference pose 'Tree': negative weight");

        let err = PoseError::InvalidLandmarkBuffer { expected: 132, actual: 99 };
        assert!(err.to_string().contains("expected 132"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: PoseError = parse.unwrap_err().into();
        assert!(matches!(err, PoseError::Json(_)));
    }
}
