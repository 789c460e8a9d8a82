// Spam classification: a fitted vectorizer plus a binary classifier, both
// loaded from JSON artifacts exported at training time.
//
// The SpamClassifier trait lets the pipeline serve either a naive Bayes or a
// linear model without caring which one was trained.

pub mod artifacts;
pub mod download;
pub mod linear;
pub mod naive_bayes;
pub mod traits;
pub mod vectorizer;
