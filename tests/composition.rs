// Composition tests: normalizer -> vectorizer -> classifier -> verdict.
//
// These load the sample artifacts shipped under assets/sample-model and
// exercise the prediction handler end to end, plus the failure paths that
// come from broken or mismatched artifact directories (written to temp dirs).

use std::path::{Path, PathBuf};

use spamsieve::classifier::artifacts::{ModelState, MODEL_FILE, VECTORIZER_FILE};
use spamsieve::classifier::traits::Label;
use spamsieve::prediction::{PredictionError, PredictionService};

fn sample_model_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/sample-model")
}

fn sample_service() -> PredictionService {
    let state = ModelState::load(&sample_model_dir());
    assert!(state.is_loaded(), "sample model should load");
    PredictionService::new(state)
}

/// Fresh temp directory holding the sample vectorizer and the given model.json.
fn temp_model_dir(name: &str, model_json: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("spamsieve-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::copy(
        sample_model_dir().join(VECTORIZER_FILE),
        dir.join(VECTORIZER_FILE),
    )
    .unwrap();
    std::fs::write(dir.join(MODEL_FILE), model_json).unwrap();
    dir
}

// ============================================================
// Happy path
// ============================================================

#[test]
fn obvious_spam_is_flagged() {
    let verdict = sample_service()
        .predict("WINNER!! Claim your FREE prize NOW")
        .unwrap();
    assert_eq!(verdict.label, Label::Spam);
    assert!(verdict.is_spam());
    assert_eq!(verdict.normalized, "winner claim free prize");
    assert!(verdict.spam_probability.unwrap() > 0.5);
}

#[test]
fn conversational_message_is_ham() {
    let verdict = sample_service()
        .predict("Are we still meeting for lunch tomorrow?")
        .unwrap();
    assert_eq!(verdict.label, Label::Ham);
    assert!(verdict.spam_probability.unwrap() < 0.5);
}

#[test]
fn surrounding_whitespace_does_not_change_the_verdict() {
    let service = sample_service();
    let a = service.predict("URGENT call now to claim cash").unwrap();
    let b = service.predict("   URGENT call now to claim cash \n").unwrap();
    assert_eq!(a.label, b.label);
    assert_eq!(a.normalized, b.normalized);
    assert_eq!(a.spam_probability, b.spam_probability);
}

#[test]
fn out_of_vocabulary_message_falls_back_to_prior() {
    // No vocabulary terms: the prior favors ham.
    let verdict = sample_service().predict("xylophone quartet").unwrap();
    assert_eq!(verdict.label, Label::Ham);
}

#[test]
fn sample_model_uses_default_pipeline() {
    let state = ModelState::load(&sample_model_dir());
    let model = state.model().unwrap();
    assert_eq!(
        model.vectorizer.text_pipeline().to_string(),
        "nltk-english-179 + porter-nltk"
    );
    assert_eq!(model.classifier.n_features(), model.vectorizer.vocabulary_len());
}

// ============================================================
// Failure paths
// ============================================================

#[test]
fn blank_message_is_empty_input() {
    let service = sample_service();
    assert!(matches!(service.predict(""), Err(PredictionError::EmptyInput)));
    assert!(matches!(service.predict(" \t\n"), Err(PredictionError::EmptyInput)));
}

#[test]
fn punctuation_only_message_still_gets_a_verdict() {
    // Not blank, so it is classified; it just has no features.
    let verdict = sample_service().predict("!!!").unwrap();
    assert_eq!(verdict.normalized, "");
}

#[test]
fn missing_artifacts_are_model_unavailable() {
    let dir = std::env::temp_dir().join("spamsieve-composition-no-artifacts");
    let service = PredictionService::new(ModelState::load(&dir));
    match service.predict("hello") {
        Err(PredictionError::ModelUnavailable(reason)) => {
            assert!(reason.contains("download-model"), "reason: {reason}")
        }
        other => panic!("expected ModelUnavailable, got {other:?}"),
    }
}

#[test]
fn feature_count_mismatch_is_vectorization_failure() {
    let dir = temp_model_dir(
        "mismatch",
        r#"{"kind": "linear", "classes": [0, 1], "coef": [1.0, -1.0, 0.5], "intercept": 0.0}"#,
    );
    let state = ModelState::load(&dir);
    assert!(state.is_loaded(), "mismatch is not a load error");

    let service = PredictionService::new(state);
    match service.predict("free prize") {
        Err(e @ PredictionError::VectorizationFailure(_)) => {
            assert_eq!(e.kind(), "vectorization_failure")
        }
        other => panic!("expected VectorizationFailure, got {other:?}"),
    }
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unfitted_vectorizer_is_vectorization_failure() {
    let dir = std::env::temp_dir().join(format!("spamsieve-unfitted-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(VECTORIZER_FILE),
        r#"{
            "format_version": 1,
            "weighting": "count",
            "vocabulary": {},
            "text_pipeline": {"stopwords": "nltk-english-179", "stemmer": "porter-nltk"}
        }"#,
    )
    .unwrap();
    std::fs::write(
        dir.join(MODEL_FILE),
        r#"{"kind": "linear", "classes": [0, 1], "coef": [], "intercept": 0.0}"#,
    )
    .unwrap();

    // Feature counts agree (0 == 0), so only the fitted check can catch this.
    let state = ModelState::load(&dir);
    assert!(state.is_loaded());

    match PredictionService::new(state).predict("free prize") {
        Err(PredictionError::VectorizationFailure(reason)) => {
            assert!(reason.contains("empty vocabulary"), "reason: {reason}")
        }
        other => panic!("expected VectorizationFailure, got {other:?}"),
    }
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_model_is_unavailable() {
    let dir = temp_model_dir(
        "malformed",
        r#"{"kind": "multinomial_nb", "classes": [0, 1, 2]}"#,
    );
    let state = ModelState::load(&dir);
    assert!(!state.is_loaded());
    std::fs::remove_dir_all(&dir).ok();
}
