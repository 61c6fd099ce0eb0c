use serde::Deserialize;

use stockdesk_core::Item;

// -------------------------
// Request DTOs
// -------------------------
//
// Unknown body fields (e.g. the legacy in-body `token`) are ignored by
// serde, so older clients keep working.

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Update body. The path id is authoritative; a body id is accepted for
/// contract compatibility but must match.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id.as_i64(),
        "name": item.name,
        "description": item.description,
        "price": item.price,
        "quantity": item.quantity,
    })
}
