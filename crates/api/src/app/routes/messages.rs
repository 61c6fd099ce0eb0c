use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use stockdesk_core::ContactMessage;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

/// `POST /sendMessage/` (session required).
pub async fn send_message(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::SendMessageRequest>,
) -> axum::response::Response {
    if !stockdesk_core::validate_email(&body.email) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "invalid email address",
        );
    }

    let message = ContactMessage::new(body.name, body.email, body.title, body.message, Utc::now());

    tracing::debug!(
        message_id = %message.id,
        session_user = session.username(),
        "contact message received"
    );

    match services.messages.insert(&message).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "result": true })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
