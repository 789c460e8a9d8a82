// Classifier trait: the swap-ready abstraction over fitted models.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::vectorizer::SparseVector;

/// Outcome of a binary spam prediction. Class `1` is spam, `0` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    /// Map a raw class value to a label. Only 0 and 1 are meaningful.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Label::Spam),
            0 => Some(Label::Ham),
            _ => None,
        }
    }

    pub fn is_spam(self) -> bool {
        self == Label::Spam
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

/// Raw classifier output before it is mapped to a label.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The predicted class value, taken from the model's `classes`.
    pub class: i64,
    /// Probability of class 1, when the model can estimate one.
    pub spam_probability: Option<f64>,
}

/// Trait for a fitted binary classifier over sparse feature vectors.
pub trait SpamClassifier: Send + Sync {
    /// Number of input features the model was fitted with.
    fn n_features(&self) -> usize;

    /// Predict the class of a single feature vector.
    fn predict(&self, features: &SparseVector) -> Result<Prediction>;

    /// Short name for logs and status output.
    fn name(&self) -> &'static str;
}

/// Validate a two-class `classes` array and return it as `[negative, positive]`.
pub(crate) fn binary_classes(classes: &[i64]) -> Result<[i64; 2]> {
    match classes {
        [a, b] if a != b && Label::from_class(*a).is_some() && Label::from_class(*b).is_some() => {
            Ok([*a, *b])
        }
        _ => anyhow::bail!(
            "Expected exactly two classes drawn from {{0, 1}}, got {:?}",
            classes
        ),
    }
}
