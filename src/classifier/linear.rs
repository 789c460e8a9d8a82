// Linear decision function (logistic regression, linear SVM).
//
// decision = coef · x + intercept; positive ⇒ classes[1]. The probability is
// the logistic sigmoid of the decision, which is exact for logistic
// regression and a monotone score for margin-based models.

use anyhow::Result;

use super::traits::{binary_classes, Prediction, SpamClassifier};
use super::vectorizer::SparseVector;

pub struct LinearClassifier {
    classes: [i64; 2],
    coef: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    pub fn new(classes: Vec<i64>, coef: Vec<f64>, intercept: f64) -> Result<Self> {
        Ok(Self {
            classes: binary_classes(&classes)?,
            coef,
            intercept,
        })
    }

    pub fn decision_function(&self, features: &SparseVector) -> f64 {
        features.dot(&self.coef) + self.intercept
    }
}

impl SpamClassifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, features: &SparseVector) -> Result<Prediction> {
        let decision = self.decision_function(features);
        let positive = sigmoid(decision);
        let class = if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        };
        let spam_probability = if self.classes[1] == 1 {
            positive
        } else {
            1.0 - positive
        };

        Ok(Prediction {
            class,
            spam_probability: Some(spam_probability),
        })
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Sigmoid activation: maps any real number to (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
