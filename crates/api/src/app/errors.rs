use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockdesk_store::StoreError;

/// Map a storage error onto a response.
///
/// Duplicate keys are an expected rejection and surface as a conflict;
/// everything else is logged server-side and answered with an opaque 500.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::Duplicate(id) => json_error(
            StatusCode::CONFLICT,
            "conflict",
            format!("item {id} already exists"),
        ),
        StoreError::Database(e) => {
            tracing::error!(error = %e, "store failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "storage failure",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
