// Auth handlers: register, login, logout and the current-user lookup.
//
// Register and login are public. Login checks the Argon2 hash stored for
// the account, then sets a signed HMAC session cookie carrying the user id.
//
// Logout: clears the session cookie.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use tracing::error;

use crate::users::{self, RegisterError};
use crate::web::auth::{clear_cookie_header, create_token, set_cookie_header};
use crate::web::{api_error, AppState, AuthUser};

#[derive(Deserialize)]
pub struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// POST /api/register: create a local account.
///
/// 201 on success, 400 when a field is missing, 409 when the email is taken.
pub async fn register(State(state): State<AppState>, Json(body): Json<Credentials>) -> Response {
    match users::register(&state.db, &body.email, &body.password).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": user.id, "email": user.email })),
        )
            .into_response(),
        Err(e @ RegisterError::MissingField) => api_error(StatusCode::BAD_REQUEST, &e.to_string()),
        Err(e @ RegisterError::EmailTaken) => api_error(StatusCode::CONFLICT, &e.to_string()),
        Err(RegisterError::Other(e)) => {
            error!(error = %format!("{e:#}"), "Registration failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Registration failed")
        }
    }
}

/// POST /api/login: authenticate with email and password.
///
/// On success: returns 200 with a signed session cookie.
/// On failure: returns 401.
pub async fn login(State(state): State<AppState>, Json(body): Json<Credentials>) -> Response {
    let user = match users::authenticate(&state.db, &body.email, &body.password).await {
        Ok(Some(user)) => user,
        Ok(None) => return api_error(StatusCode::UNAUTHORIZED, "Invalid email or password"),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Login lookup failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
        }
    };

    let token = create_token(&state.config.session_secret, user.id);
    let cookie = set_cookie_header(&token, state.config.secure_cookies);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "id": user.id, "email": user.email })),
    )
        .into_response()
}

/// POST /api/logout: clear the session cookie.
pub async fn logout() -> Response {
    let cookie = clear_cookie_header();
    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({ "message": "Logged out" })),
    )
        .into_response()
}

/// GET /api/me: the account behind the session cookie.
pub async fn me(State(state): State<AppState>, Extension(auth): Extension<AuthUser>) -> Response {
    match state.db.get_user(auth.user_id).await {
        Ok(Some(user)) => Json(serde_json::json!({
            "id": user.id,
            "email": user.email,
            "last_login_at": user.last_login_at,
        }))
        .into_response(),
        // Signed token for an account that no longer exists
        Ok(None) => api_error(StatusCode::UNAUTHORIZED, "Authentication required"),
        Err(e) => {
            error!(error = %format!("{e:#}"), "User lookup failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "User lookup failed")
        }
    }
}
