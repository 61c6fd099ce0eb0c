use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use stockdesk_core::{Item, ItemId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /addItem/` (session required).
pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let item = Item {
        id: ItemId::new(body.id),
        name: body.name,
        description: body.description,
        price: body.price,
        quantity: body.quantity,
    };

    match services.items.insert(&item).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "result": true })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `POST /items/`: bulk read. Kept on POST for contract compatibility;
/// the body is ignored.
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.items.list().await {
        Ok(items) => {
            let items: Vec<serde_json::Value> = items.iter().map(dto::item_to_json).collect();
            (
                StatusCode::OK,
                Json(serde_json::json!({ "result": true, "items": items })),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `GET /items/:id`.
pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.items.get(ItemId::new(id)).await {
        Ok(Some(item)) => (
            StatusCode::OK,
            Json(serde_json::json!({ "item": dto::item_to_json(&item) })),
        )
            .into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `PUT /items/:id` (session required). Overwrites every field except the
/// id; the path id wins over any id in the body.
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    if body.id.is_some_and(|body_id| body_id != id) {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "body id does not match path id",
        );
    }

    let item = Item {
        id: ItemId::new(id),
        name: body.name,
        description: body.description,
        price: body.price,
        quantity: body.quantity,
    };

    match services.items.update(&item).await {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Item updated",
                "item": dto::item_to_json(&item),
            })),
        )
            .into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `DELETE /items/:id` (session required).
pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.items.delete(ItemId::new(id)).await {
        Ok(true) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "Item deleted" })),
        )
            .into_response(),
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
