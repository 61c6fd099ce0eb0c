use axum::{
    routing::{get, post, put},
    Router,
};

pub mod auth;
pub mod items;
pub mod messages;
pub mod system;

/// Routes open to any caller.
pub fn public_router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/login/", post(auth::login))
        .route("/items/", post(items::list_items))
        .route("/items/:id", get(items::get_item))
}

/// Routes that require a live session (layered with the session middleware
/// by `app::build_app_with`).
pub fn protected_router() -> Router {
    Router::new()
        .route("/addItem/", post(items::create_item))
        .route("/sendMessage/", post(messages::send_message))
        .route(
            "/items/:id",
            put(items::update_item).delete(items::delete_item),
        )
}
