// Prediction request handler.
//
// Takes a raw message, rejects blank input, normalizes it with the pipeline
// the vectorizer was fitted against, vectorizes, and asks the classifier for
// a verdict. Every failure comes back as a PredictionError; the caller (CLI
// or web layer) decides how to present it. Nothing here is retried.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::classifier::artifacts::ModelState;
use crate::classifier::traits::Label;
use crate::output::truncate_chars;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Please enter a message")]
    EmptyInput,

    #[error("Model or vectorizer not available: {0}")]
    ModelUnavailable(String),

    #[error("Model and vectorizer do not fit together: {0}")]
    VectorizationFailure(String),

    #[error("An error occurred during prediction: {0}")]
    Unexpected(String),
}

impl PredictionError {
    /// Stable machine-readable tag for API responses.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::EmptyInput => "empty_input",
            PredictionError::ModelUnavailable(_) => "model_unavailable",
            PredictionError::VectorizationFailure(_) => "vectorization_failure",
            PredictionError::Unexpected(_) => "unexpected",
        }
    }
}

/// A successful classification.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub label: Label,
    pub spam_probability: Option<f64>,
    /// The normalized text that was vectorized.
    pub normalized: String,
}

impl Verdict {
    pub fn is_spam(&self) -> bool {
        self.label.is_spam()
    }
}

/// Classifies messages with the model it was constructed with.
#[derive(Clone)]
pub struct PredictionService {
    model: ModelState,
}

impl PredictionService {
    pub fn new(model: ModelState) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ModelState {
        &self.model
    }

    pub fn predict(&self, raw: &str) -> Result<Verdict, PredictionError> {
        let message = raw.trim();
        if message.is_empty() {
            return Err(PredictionError::EmptyInput);
        }

        let model = match &self.model {
            ModelState::Loaded(model) => model,
            ModelState::Unavailable { reason } => {
                return Err(PredictionError::ModelUnavailable(reason.clone()))
            }
        };

        if !model.vectorizer.is_fitted() {
            return Err(PredictionError::VectorizationFailure(
                "vectorizer has an empty vocabulary".to_string(),
            ));
        }
        let expected = model.classifier.n_features();
        let actual = model.vectorizer.vocabulary_len();
        if expected != actual {
            return Err(PredictionError::VectorizationFailure(format!(
                "classifier expects {expected} features but the vectorizer produces {actual}"
            )));
        }

        let normalized = model.normalizer.normalize(message);
        let features = model.vectorizer.transform(&normalized);

        let prediction = model
            .classifier
            .predict(&features)
            .map_err(|e| PredictionError::Unexpected(format!("{e:#}")))?;
        let label = Label::from_class(prediction.class).ok_or_else(|| {
            PredictionError::Unexpected(format!(
                "classifier returned unknown class {}",
                prediction.class
            ))
        })?;

        debug!(
            label = label.as_str(),
            spam_probability = ?prediction.spam_probability,
            features = features.nnz(),
            text_preview = %truncate_chars(message, 50),
            "Classified message"
        );

        Ok(Verdict {
            label,
            spam_probability: prediction.spam_probability,
            normalized,
        })
    }
}
