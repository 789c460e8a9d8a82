// Multinomial naive Bayes over sparse tf / tf-idf features.
//
// Mirrors scikit-learn's MultinomialNB.predict: the joint log-likelihood per
// class is the class log prior plus the feature-weighted sum of that class's
// feature log probabilities; the argmax wins (first class on ties).

use anyhow::Result;

use super::traits::{binary_classes, Prediction, SpamClassifier};
use super::vectorizer::SparseVector;

pub struct MultinomialNb {
    classes: [i64; 2],
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
}

impl MultinomialNb {
    pub fn new(
        classes: Vec<i64>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let classes = binary_classes(&classes)?;

        let class_log_prior: [f64; 2] = class_log_prior.try_into().map_err(|v: Vec<f64>| {
            anyhow::anyhow!("class_log_prior must have 2 entries, got {}", v.len())
        })?;

        let feature_log_prob: [Vec<f64>; 2] =
            feature_log_prob.try_into().map_err(|v: Vec<Vec<f64>>| {
                anyhow::anyhow!("feature_log_prob must have 2 rows, got {}", v.len())
            })?;
        if feature_log_prob[0].len() != feature_log_prob[1].len() {
            anyhow::bail!(
                "feature_log_prob rows differ in length ({} vs {})",
                feature_log_prob[0].len(),
                feature_log_prob[1].len()
            );
        }

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    fn joint_log_likelihood(&self, features: &SparseVector) -> [f64; 2] {
        [0usize, 1].map(|c| self.class_log_prior[c] + features.dot(&self.feature_log_prob[c]))
    }
}

impl SpamClassifier for MultinomialNb {
    fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    fn predict(&self, features: &SparseVector) -> Result<Prediction> {
        let jll = self.joint_log_likelihood(features);
        let winner = if jll[1] > jll[0] { 1 } else { 0 };

        // Softmax via log-sum-exp so large negative likelihoods don't underflow.
        let max = jll[0].max(jll[1]);
        let log_norm = max + ((jll[0] - max).exp() + (jll[1] - max).exp()).ln();
        let spam_index = if self.classes[1] == 1 { 1 } else { 0 };
        let spam_probability = (jll[spam_index] - log_norm).exp();

        Ok(Prediction {
            class: self.classes[winner],
            spam_probability: Some(spam_probability),
        })
    }

    fn name(&self) -> &'static str {
        "multinomial_nb"
    }
}
