// Model artifact loading.
//
// A model directory holds two JSON files exported at training time:
//
//   vectorizer.json: vocabulary, idf weights and the pinned text pipeline
//   model.json: the fitted classifier, tagged by `kind`
//
// Loading never panics and never aborts startup. Anything wrong with the
// artifacts turns into `ModelState::Unavailable` with a reason the
// prediction handler reports per request.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use super::linear::LinearClassifier;
use super::naive_bayes::MultinomialNb;
use super::traits::SpamClassifier;
use super::vectorizer::Vectorizer;
use crate::text::Normalizer;

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const MODEL_FILE: &str = "model.json";

/// On-disk form of a fitted classifier (`model.json`).
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    MultinomialNb {
        classes: Vec<i64>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
    Linear {
        classes: Vec<i64>,
        coef: Vec<f64>,
        intercept: f64,
    },
}

impl ClassifierArtifact {
    pub fn build(self) -> Result<Box<dyn SpamClassifier>> {
        Ok(match self {
            ClassifierArtifact::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => Box::new(MultinomialNb::new(classes, class_log_prior, feature_log_prob)?),
            ClassifierArtifact::Linear {
                classes,
                coef,
                intercept,
            } => Box::new(LinearClassifier::new(classes, coef, intercept)?),
        })
    }
}

/// Check whether both artifact files exist in `dir`.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join(VECTORIZER_FILE).exists() && dir.join(MODEL_FILE).exists()
}

/// A vectorizer, classifier and matching normalizer, immutable after load.
pub struct LoadedModel {
    pub vectorizer: Vectorizer,
    pub classifier: Box<dyn SpamClassifier>,
    pub normalizer: Normalizer,
}

impl LoadedModel {
    /// Load and validate the artifacts in `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let vectorizer_path = dir.join(VECTORIZER_FILE);
        let model_path = dir.join(MODEL_FILE);

        for path in [&vectorizer_path, &model_path] {
            if !path.exists() {
                anyhow::bail!(
                    "Model artifact not found: {}\nRun `spamsieve download-model` or copy the trained artifacts there.",
                    path.display()
                );
            }
        }

        let vectorizer_json = std::fs::read_to_string(&vectorizer_path)
            .with_context(|| format!("Failed to read {}", vectorizer_path.display()))?;
        let vectorizer = Vectorizer::from_json(&vectorizer_json)
            .with_context(|| format!("Invalid vectorizer in {}", vectorizer_path.display()))?;

        let model_json = std::fs::read_to_string(&model_path)
            .with_context(|| format!("Failed to read {}", model_path.display()))?;
        let artifact: ClassifierArtifact = serde_json::from_str(&model_json)
            .with_context(|| format!("Invalid classifier in {}", model_path.display()))?;
        let classifier = artifact
            .build()
            .with_context(|| format!("Invalid classifier in {}", model_path.display()))?;

        if classifier.n_features() != vectorizer.vocabulary_len() {
            // Reported per request as a vectorization failure.
            warn!(
                classifier_features = classifier.n_features(),
                vocabulary = vectorizer.vocabulary_len(),
                "Classifier and vectorizer disagree on feature count"
            );
        }

        let normalizer = Normalizer::new(vectorizer.text_pipeline());

        info!(
            dir = %dir.display(),
            classifier = classifier.name(),
            vocabulary = vectorizer.vocabulary_len(),
            pipeline = %vectorizer.text_pipeline(),
            "Loaded spam model"
        );

        Ok(Self {
            vectorizer,
            classifier,
            normalizer,
        })
    }
}

/// Whether a usable model was loaded at startup.
#[derive(Clone)]
pub enum ModelState {
    Loaded(Arc<LoadedModel>),
    Unavailable { reason: String },
}

impl ModelState {
    /// Load from `dir`, turning any failure into `Unavailable`.
    pub fn load(dir: &Path) -> Self {
        match LoadedModel::load(dir) {
            Ok(model) => ModelState::Loaded(Arc::new(model)),
            Err(e) => {
                warn!(error = %format!("{e:#}"), dir = %dir.display(), "Spam model unavailable");
                ModelState::Unavailable {
                    reason: format!("{e:#}"),
                }
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelState::Loaded(_))
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        match self {
            ModelState::Loaded(model) => Some(model),
            ModelState::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_files_present_false_when_empty() {
        let dir = std::env::temp_dir().join("spamsieve-test-nonexistent");
        assert!(!model_files_present(&dir));
    }

    #[test]
    fn test_missing_dir_is_unavailable() {
        let dir = std::env::temp_dir().join("spamsieve-test-missing-artifacts");
        let state = ModelState::load(&dir);
        assert!(!state.is_loaded());
        match state {
            ModelState::Unavailable { reason } => assert!(reason.contains(VECTORIZER_FILE)),
            ModelState::Loaded(_) => panic!("expected Unavailable"),
        }
    }

    #[test]
    fn test_classifier_artifact_parses_both_kinds() {
        let nb: ClassifierArtifact = serde_json::from_str(
            r#"{"kind": "multinomial_nb", "classes": [0, 1],
                "class_log_prior": [-0.1, -2.3],
                "feature_log_prob": [[-0.5], [-0.9]]}"#,
        )
        .unwrap();
        assert_eq!(nb.build().unwrap().name(), "multinomial_nb");

        let linear: ClassifierArtifact = serde_json::from_str(
            r#"{"kind": "linear", "classes": [0, 1], "coef": [1.0, -1.0], "intercept": 0.0}"#,
        )
        .unwrap();
        assert_eq!(linear.build().unwrap().n_features(), 2);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let parsed: Result<ClassifierArtifact, _> =
            serde_json::from_str(r#"{"kind": "random_forest", "classes": [0, 1]}"#);
        assert!(parsed.is_err());
    }
}
