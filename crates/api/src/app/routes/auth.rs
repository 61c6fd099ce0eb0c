use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::app::dto;
use crate::app::services::AppServices;

/// `POST /login/`.
///
/// Wrong credentials answer HTTP 200 with `{"result": false}` and nothing
/// else: the caller cannot tell a bad username from a bad password, and
/// there is deliberately no error status on this route.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    if !stockdesk_auth::verify_credentials(&body.username, &body.password) {
        return (StatusCode::OK, Json(serde_json::json!({ "result": false }))).into_response();
    }

    let token = services.sessions.issue(&body.username, Utc::now());

    (
        StatusCode::OK,
        Json(serde_json::json!({ "result": true, "token": token })),
    )
        .into_response()
}
