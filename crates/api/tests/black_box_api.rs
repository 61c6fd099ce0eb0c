use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod, in-memory stores), but bind to an
        // ephemeral port.
        let app = stockdesk_api::app::build_app().await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn login(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .post(format!("{}/login/", base_url))
        .json(&json!({ "username": "admin", "password": "admin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["result"], true);
    body["token"].as_str().unwrap().to_string()
}

async fn create_item(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    id: i64,
    name: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/addItem/", base_url))
        .bearer_auth(token)
        .json(&json!({
            "id": id,
            "name": name,
            "description": "test item",
            "price": 9.99,
            "quantity": 5,
        }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn login_returns_a_64_char_hex_token() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let token = login(&client, &srv.base_url).await;
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn login_with_wrong_credentials_is_200_with_result_false() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login/", srv.base_url))
        .json(&json!({ "username": "admin", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["result"], false);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn second_login_leaves_the_first_session_usable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = login(&client, &srv.base_url).await;
    let second = login(&client, &srv.base_url).await;
    assert_ne!(first, second);

    // The earlier token still authorizes a mutation.
    let res = create_item(&client, &srv.base_url, &first, 1, "Widget").await;
    assert_eq!(res.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn mutations_require_a_session() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/addItem/", srv.base_url))
        .json(&json!({ "id": 1, "name": "Widget", "price": 1.0, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/sendMessage/", srv.base_url))
        .json(&json!({
            "name": "Alice",
            "email": "a@b.co",
            "title": "Hi",
            "message": "Hello",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .put(format!("{}/items/1", srv.base_url))
        .json(&json!({ "name": "Widget", "price": 1.0, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .delete(format!("{}/items/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_bearer_token_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/addItem/", srv.base_url))
        .bearer_auth("0".repeat(64))
        .json(&json!({ "id": 1, "name": "Widget", "price": 1.0, "quantity": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn created_item_reads_back_with_the_same_fields() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = create_item(&client, &srv.base_url, &token, 7, "Widget").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["result"], true);

    let res = client
        .get(format!("{}/items/7", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item"]["id"], 7);
    assert_eq!(body["item"]["name"], "Widget");
    assert_eq!(body["item"]["description"], "test item");
    assert_eq!(body["item"]["price"], 9.99);
    assert_eq!(body["item"]["quantity"], 5);
}

#[tokio::test]
async fn duplicate_item_id_is_a_conflict() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = create_item(&client, &srv.base_url, &token, 1, "Widget").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = create_item(&client, &srv.base_url, &token, 1, "Other").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn bulk_read_is_empty_then_ordered_by_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/items/", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["result"], true);
    assert_eq!(body["items"].as_array().unwrap().len(), 0);

    let token = login(&client, &srv.base_url).await;
    for id in [3, 1, 2] {
        let res = create_item(&client, &srv.base_url, &token, id, "Widget").await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .post(format!("{}/items/", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let ids: Vec<i64> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn reading_a_missing_item_404s() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/items/99", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn update_overwrites_everything_but_the_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = create_item(&client, &srv.base_url, &token, 1, "Widget").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .put(format!("{}/items/1", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "id": 1,
            "name": "Gadget",
            "description": null,
            "price": 19.5,
            "quantity": 2,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item updated");
    assert_eq!(body["item"]["name"], "Gadget");
    assert_eq!(body["item"]["description"], serde_json::Value::Null);

    let res = client
        .get(format!("{}/items/1", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["item"]["name"], "Gadget");
    assert_eq!(body["item"]["price"], 19.5);
    assert_eq!(body["item"]["quantity"], 2);
}

#[tokio::test]
async fn updating_a_missing_item_404s_without_creating_it() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = client
        .put(format!("{}/items/5", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "name": "Ghost", "price": 1.0, "quantity": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/items/5", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_with_a_mismatched_body_id_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = create_item(&client, &srv.base_url, &token, 1, "Widget").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .put(format!("{}/items/1", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "id": 2, "name": "Widget", "price": 1.0, "quantity": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn deleted_item_stops_reading_back() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = create_item(&client, &srv.base_url, &token, 1, "Widget").await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/items/1", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Item deleted");

    let res = client
        .get(format!("{}/items/1", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_missing_item_404s() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = client
        .delete(format!("{}/items/123", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn send_message_validates_the_email_shape() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/sendMessage/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Alice",
            "email": "not-an-email",
            "title": "Hi",
            "message": "Hello",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .post(format!("{}/sendMessage/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Alice",
            "email": "a@b.co",
            "title": "Hi",
            "message": "Hello",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["result"], true);
}

#[tokio::test]
async fn legacy_in_body_token_fields_are_tolerated() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = login(&client, &srv.base_url).await;

    // Older clients also sent the token inside the JSON body; it is ignored
    // in favor of the Authorization header.
    let res = client
        .post(format!("{}/addItem/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "token": token,
            "id": 1,
            "name": "Widget",
            "price": 1.0,
            "quantity": 1,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
}
