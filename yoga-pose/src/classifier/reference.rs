//! Reference pose library
//!
//! Persisted layout: pose label → { joint → target degrees, "_weights": { joint → weight } }.
//! The reserved `_weights` key is split out while decoding, so comparison
//! code only ever sees an explicit `ReferencePose { target, weights }`.
//! The explicit `{ "target": .., "weights": .. }` layout is accepted too.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PoseError, PoseResult};
use crate::joints::AngleMapping;

/// Reserved key holding per-joint weights in the persisted layout
pub const WEIGHTS_KEY: &str = "_weights";

/// Weight applied to joints a reference does not weight explicitly
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// A classification template: target angles plus optional emphasis
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferencePose {
    pub target: AngleMapping,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub weights: IndexMap<String, f32>,
}

impl ReferencePose {
    pub fn new(target: AngleMapping) -> Self {
        Self {
            target,
            weights: IndexMap::new(),
        }
    }

    pub fn with_weights(mut self, weights: IndexMap<String, f32>) -> Self {
        self.weights = weights;
        self
    }

    /// Weight of a joint, 1.0 when not given
    pub fn weight(&self, joint: &str) -> f32 {
        self.weights.get(joint).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Sum of weights over the joints this pose actually targets
    pub fn effective_weight(&self) -> f32 {
        self.target.keys().map(|joint| self.weight(joint)).sum()
    }

    fn validate(&self, label: &str) -> PoseResult<()> {
        if let Some((joint, angle)) = self
            .target
            .iter()
            .find(|(_, a)| !a.is_finite() || !(0.0..=180.0).contains(*a))
        {
            return Err(PoseError::invalid_reference(
                label,
                format!("target for {joint} must be within 0-180 degrees, got {angle}"),
            ));
        }
        if let Some((joint, weight)) = self
            .weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(PoseError::invalid_reference(
                label,
                format!("weight for {joint} must be a non-negative number, got {weight}"),
            ));
        }
        if !self.effective_weight().is_finite() {
            return Err(PoseError::invalid_reference(label, "total weight overflows"));
        }
        Ok(())
    }
}

/// On-disk entry shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredReference {
    Tagged(ReferencePose),
    Flat {
        #[serde(rename = "_weights", default)]
        weights: IndexMap<String, f32>,
        #[serde(flatten)]
        target: IndexMap<String, f32>,
    },
}

impl From<StoredReference> for ReferencePose {
    fn from(stored: StoredReference) -> Self {
        match stored {
            StoredReference::Tagged(pose) => pose,
            StoredReference::Flat { weights, target } => ReferencePose { target, weights },
        }
    }
}

/// Insertion-ordered, label-keyed collection of reference poses
///
/// Built once, then only read. Iteration follows file order, which is
/// what makes classification tie-breaks reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceLibrary {
    poses: IndexMap<String, ReferencePose>,
}

impl ReferenceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a reference file's contents
    pub fn from_json_str(json: &str) -> PoseResult<Self> {
        let stored: IndexMap<String, StoredReference> = serde_json::from_str(json)?;

        let mut library = Self::new();
        for (label, entry) in stored {
            library.insert(label, entry.into())?;
        }
        Ok(library)
    }

    /// Read and decode a reference file
    pub fn load(path: impl AsRef<Path>) -> PoseResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let library = Self::from_json_str(&content)?;
        log::info!(
            "loaded {} reference poses from {}",
            library.len(),
            path.as_ref().display()
        );
        Ok(library)
    }

    /// Add a pose; a repeated label replaces the earlier pose in place
    pub fn insert(&mut self, label: impl Into<String>, pose: ReferencePose) -> PoseResult<()> {
        let label = label.into();
        pose.validate(&label)?;

        if !pose.target.is_empty() && pose.effective_weight() == 0.0 {
            log::warn!("reference pose '{label}' has zero total weight and can never match");
        }
        for joint in pose.weights.keys().filter(|j| !pose.target.contains_key(*j)) {
            log::debug!("reference pose '{label}' weights {joint} without a target angle");
        }

        self.poses.insert(label, pose);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&ReferencePose> {
        self.poses.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferencePose)> {
        self.poses.iter().map(|(label, pose)| (label.as_str(), pose))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.poses.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
