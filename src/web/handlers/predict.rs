// POST /api/predict: classify one message.
//
// The prediction handler does the work; this layer only maps its error
// kinds onto HTTP statuses. Errors carry both a message and a stable `kind`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use tracing::{error, info};

use crate::prediction::PredictionError;
use crate::web::{AppState, AuthUser};

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    message: String,
}

pub async fn predict(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<PredictRequest>,
) -> Response {
    match state.predictor.predict(&body.message) {
        Ok(verdict) => {
            info!(
                user_id = auth.user_id,
                label = verdict.label.as_str(),
                "Prediction served"
            );
            let message = if verdict.is_spam() {
                "Spam message detected!"
            } else {
                "This message is not spam."
            };
            Json(serde_json::json!({
                "label": verdict.label,
                "is_spam": verdict.is_spam(),
                "spam_probability": verdict.spam_probability,
                "message": message,
            }))
            .into_response()
        }
        Err(e) => {
            if !matches!(e, PredictionError::EmptyInput) {
                error!(user_id = auth.user_id, kind = e.kind(), error = %e, "Prediction failed");
            }
            prediction_error(&e)
        }
    }
}

/// JSON error body `{error, kind}` with the status for each failure kind.
pub fn prediction_error(e: &PredictionError) -> Response {
    let status = match e {
        PredictionError::EmptyInput => StatusCode::BAD_REQUEST,
        PredictionError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        PredictionError::VectorizationFailure(_) | PredictionError::Unexpected(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(serde_json::json!({ "error": e.to_string(), "kind": e.kind() })),
    )
        .into_response()
}
