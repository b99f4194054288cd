//! Persisted scene classifier handle.
//!
//! A trained classifier artifact may exist on disk; if it does,
//! [`SceneClassifier::load_or_create`] loads it and the classifier is
//! ready to predict. If it does not, the classifier is constructed in
//! an explicit not-ready state and [`SceneClassifier::predict`] fails
//! with [`CoreError::ModelUnavailable`] rather than pretending to work.
//! Nothing in the request path depends on this; training is out of
//! scope and the artifact is never written here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default location of the classifier artifact, relative to the working
/// directory.
pub const DEFAULT_MODEL_PATH: &str = "models/scene_classifier.json";

/// The persisted model: scene-type labels keyed by a word-count
/// threshold. Minimal on purpose -- enough to make a loaded artifact
/// actually predict, without a training pipeline behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierModel {
    /// (word-count upper bound, label) pairs, ascending by bound.
    pub buckets: Vec<(usize, String)>,
    /// Label used when no bucket bound applies.
    pub default_label: String,
}

impl ClassifierModel {
    /// Label for a scene description by its word count.
    fn classify(&self, scene: &str) -> &str {
        let word_count = scene.split_whitespace().count();
        self.buckets
            .iter()
            .find(|(bound, _)| word_count < *bound)
            .map(|(_, label)| label.as_str())
            .unwrap_or(&self.default_label)
    }
}

/// Readiness state of the classifier.
#[derive(Debug)]
enum State {
    /// Artifact loaded from disk.
    Ready(ClassifierModel),
    /// No artifact found (or it failed to deserialize); predictions are
    /// refused.
    NotReady,
}

/// Handle to the optional persisted classifier.
#[derive(Debug)]
pub struct SceneClassifier {
    path: PathBuf,
    state: State,
}

impl SceneClassifier {
    /// Load the artifact at `path` if present, otherwise construct a
    /// not-ready classifier.
    ///
    /// An artifact that exists but fails to read or deserialize is
    /// logged and treated as absent; construction itself never fails.
    pub fn load_or_create(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match Self::load_model(&path) {
            Some(model) => {
                tracing::info!(path = %path.display(), "Loaded scene classifier artifact");
                State::Ready(model)
            }
            None => State::NotReady,
        };
        Self { path, state }
    }

    fn load_model(path: &Path) -> Option<ClassifierModel> {
        if !path.exists() {
            return None;
        }
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read classifier artifact");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(model) => Some(model),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Classifier artifact is not a valid model");
                None
            }
        }
    }

    /// Whether a model artifact was loaded.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Predict a scene-type label for a description.
    ///
    /// Fails with [`CoreError::ModelUnavailable`] when no artifact was
    /// loaded.
    pub fn predict(&self, scene: &str) -> Result<String, CoreError> {
        match &self.state {
            State::Ready(model) => Ok(model.classify(scene).to_string()),
            State::NotReady => Err(CoreError::ModelUnavailable(format!(
                "no trained classifier artifact at {}",
                self.path.display()
            ))),
        }
    }
}
