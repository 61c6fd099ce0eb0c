use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use stockdesk_auth::SessionStore;

use crate::app::errors;
use crate::context::SessionContext;

#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<SessionStore>,
}

/// Require a live session on the request.
///
/// Expects `Authorization: Bearer <token>`; on success the session context
/// is inserted into request extensions for handlers.
pub async fn session_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers())?;

    let session = state.sessions.validate(token, Utc::now()).map_err(|e| {
        errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", e.to_string())
    })?;

    req.extensions_mut()
        .insert(SessionContext::new(session.username, session.issued_at));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("missing Authorization header"))?;

    let header = header
        .to_str()
        .map_err(|_| unauthorized("malformed Authorization header"))?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("expected a bearer token"))?;

    let token = header.trim();
    if token.is_empty() {
        return Err(unauthorized("empty bearer token"));
    }

    Ok(token)
}

fn unauthorized(message: &'static str) -> Response {
    errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", message)
}
