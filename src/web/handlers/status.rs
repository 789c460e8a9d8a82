// GET /api/status: model availability and account count.
//
// Lets a client tell "model not deployed yet" apart from a broken request
// before it starts submitting messages.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

use crate::classifier::artifacts::ModelState;
use crate::web::AppState;

pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    // null rather than a misleading 0 when the count can't be read
    let user_count = match state.db.user_count().await {
        Ok(count) => Some(count),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Failed to count users for status");
            None
        }
    };

    let model = match state.predictor.model() {
        ModelState::Loaded(model) => serde_json::json!({
            "available": true,
            "classifier": model.classifier.name(),
            "vocabulary_size": model.vectorizer.vocabulary_len(),
            "text_pipeline": model.vectorizer.text_pipeline(),
        }),
        ModelState::Unavailable { reason } => serde_json::json!({
            "available": false,
            "reason": reason,
        }),
    };

    Json(serde_json::json!({
        "model": model,
        "user_count": user_count,
        "checked_at": chrono::Utc::now().to_rfc3339(),
    }))
}
