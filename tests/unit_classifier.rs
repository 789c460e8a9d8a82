// Classifier and vectorizer behavior on small hand-built models.

use spamsieve::classifier::artifacts::ClassifierArtifact;
use spamsieve::classifier::linear::LinearClassifier;
use spamsieve::classifier::naive_bayes::MultinomialNb;
use spamsieve::classifier::traits::{Label, SpamClassifier};
use spamsieve::classifier::vectorizer::{SparseVector, Vectorizer};

fn row(dim: usize, entries: &[(usize, f64)]) -> SparseVector {
    SparseVector {
        dim,
        entries: entries.to_vec(),
    }
}

// ============================================================
// Multinomial naive Bayes
// ============================================================

fn two_word_nb() -> MultinomialNb {
    // feature 0 = "free" (spammy), feature 1 = "lunch" (hammy)
    MultinomialNb::new(
        vec![0, 1],
        vec![(0.8f64).ln(), (0.2f64).ln()],
        vec![
            vec![(0.1f64).ln(), (0.9f64).ln()],
            vec![(0.9f64).ln(), (0.1f64).ln()],
        ],
    )
    .unwrap()
}

#[test]
fn nb_spammy_row_is_spam() {
    let nb = two_word_nb();
    let p = nb.predict(&row(2, &[(0, 3.0)])).unwrap();
    assert_eq!(Label::from_class(p.class), Some(Label::Spam));
    assert!(p.spam_probability.unwrap() > 0.5);
}

#[test]
fn nb_empty_row_falls_back_to_prior() {
    let nb = two_word_nb();
    let p = nb.predict(&row(2, &[])).unwrap();
    assert_eq!(p.class, 0);
    let prob = p.spam_probability.unwrap();
    assert!((prob - 0.2).abs() < 1e-9, "expected prior 0.2, got {prob}");
}

#[test]
fn nb_rejects_ragged_feature_rows() {
    let result = MultinomialNb::new(
        vec![0, 1],
        vec![-0.1, -2.0],
        vec![vec![-1.0, -1.0], vec![-1.0]],
    );
    assert!(result.is_err());
}

#[test]
fn nb_rejects_non_binary_classes() {
    let result = MultinomialNb::new(vec![0, 2], vec![-0.1, -2.0], vec![vec![-1.0], vec![-1.0]]);
    assert!(result.is_err());
}

// ============================================================
// Linear
// ============================================================

#[test]
fn linear_sign_of_decision_picks_class() {
    let clf = LinearClassifier::new(vec![0, 1], vec![2.0, -2.0], -0.5).unwrap();

    let spam = clf.predict(&row(2, &[(0, 1.0)])).unwrap();
    assert_eq!(spam.class, 1);
    assert!(spam.spam_probability.unwrap() > 0.5);

    let ham = clf.predict(&row(2, &[(1, 1.0)])).unwrap();
    assert_eq!(ham.class, 0);
    assert!(ham.spam_probability.unwrap() < 0.5);
}

#[test]
fn linear_zero_decision_is_ham() {
    let clf = LinearClassifier::new(vec![0, 1], vec![1.0], 0.0).unwrap();
    let p = clf.predict(&row(1, &[])).unwrap();
    assert_eq!(p.class, 0);
    assert!((p.spam_probability.unwrap() - 0.5).abs() < 1e-12);
}

// ============================================================
// Artifacts -> vectorizer -> classifier
// ============================================================

#[test]
fn artifacts_chain_through_vectorizer() {
    let vectorizer = Vectorizer::from_json(
        r#"{
            "format_version": 1,
            "weighting": "count",
            "vocabulary": {"free": 0, "lunch": 1},
            "text_pipeline": {"stopwords": "nltk-english-179", "stemmer": "porter-nltk"}
        }"#,
    )
    .unwrap();
    let classifier: ClassifierArtifact = serde_json::from_str(
        r#"{"kind": "linear", "classes": [0, 1], "coef": [1.5, -1.5], "intercept": 0.0}"#,
    )
    .unwrap();
    let classifier = classifier.build().unwrap();

    assert_eq!(classifier.n_features(), vectorizer.vocabulary_len());
    let x = vectorizer.transform("free free lunch");
    assert_eq!(x.entries, vec![(0, 2.0), (1, 1.0)]);
    assert_eq!(classifier.predict(&x).unwrap().class, 1);
}

#[test]
fn sublinear_tf_and_l1_norm() {
    let vectorizer = Vectorizer::from_json(
        r#"{
            "format_version": 1,
            "weighting": "tfidf",
            "vocabulary": {"free": 0, "prize": 1},
            "idf": [1.0, 1.0],
            "norm": "l1",
            "sublinear_tf": true,
            "text_pipeline": {"stopwords": "nltk-english-179", "stemmer": "porter-nltk"}
        }"#,
    )
    .unwrap();
    let x = vectorizer.transform("free free prize");
    let expected_free = 2f64.ln() + 1.0;
    let total = expected_free + 1.0;
    assert!((x.get(0) - expected_free / total).abs() < 1e-12);
    assert!((x.get(1) - 1.0 / total).abs() < 1e-12);
}

#[test]
fn unsupported_format_version_is_rejected() {
    let result = Vectorizer::from_json(
        r#"{
            "format_version": 2,
            "weighting": "count",
            "vocabulary": {"free": 0},
            "text_pipeline": {"stopwords": "nltk-english-179", "stemmer": "porter-nltk"}
        }"#,
    );
    assert!(result.is_err());
}
