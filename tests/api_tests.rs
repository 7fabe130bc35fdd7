use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use intake::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = intake::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    intake::api::router(state)
}

fn spawn_in_memory_app() -> Router {
    let state = intake::api::create_in_memory_app_state(Config::default(), None);
    intake::api::router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn record_many(app: &Router, count: usize) {
    for i in 1..=count {
        let (status, _) = post(
            app,
            "/api/items",
            json!({ "name": format!("Item {i}"), "quantity": 1 }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_record_then_accumulate() {
    let app = spawn_app().await;

    let (status, body) = post(
        &app,
        "/api/items",
        json!({ "name": "Laptop Dell", "quantity": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Item recorded");
    assert_eq!(body["data"]["name"], "Laptop Dell");
    assert_eq!(body["data"]["quantity"], 5);
    assert_eq!(body["data"]["wasCreated"], true);
    let id = body["data"]["id"].clone();

    let (status, body) = post(
        &app,
        "/api/items",
        json!({ "name": "  Laptop Dell ", "quantity": "3" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Quantity added. Total now: 8");
    assert_eq!(body["data"]["quantity"], 8);
    assert_eq!(body["data"]["wasCreated"], false);
    assert_eq!(body["data"]["id"], id);

    let (_, body) = get(&app, "/api/items").await;
    assert_eq!(body["pagination"]["totalItems"], 1);
}

#[tokio::test]
async fn test_record_validation_errors() {
    let app = spawn_app().await;

    let (status, body) = post(&app, "/api/items", json!({ "name": "   ", "quantity": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation error");
    assert_eq!(
        body["errors"],
        json!(["Item name is required", "Quantity must be a positive integer"])
    );

    let (status, body) = post(&app, "/api/items", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Item name is required", "Quantity is required"])
    );

    let long_name = "x".repeat(101);
    let (status, body) = post(
        &app,
        "/api/items",
        json!({ "name": long_name, "quantity": "abc" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!([
            "Item name must be at most 100 characters",
            "Quantity must be a positive integer"
        ])
    );

    let (_, body) = get(&app, "/api/items").await;
    assert_eq!(body["pagination"]["totalItems"], 0);
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/items")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Validation error");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_quantity_to_existing() {
    let app = spawn_app().await;

    post(&app, "/api/items", json!({ "name": "Mouse", "quantity": 2 })).await;

    let (status, body) = post(
        &app,
        "/api/items/add-quantity",
        json!({ "name": "Mouse", "quantity": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Quantity added");
    assert_eq!(body["data"]["quantityBefore"], 2);
    assert_eq!(body["data"]["quantityAdded"], 4);
    assert_eq!(body["data"]["quantityNow"], 6);
}

#[tokio::test]
async fn test_add_quantity_to_missing_item() {
    let app = spawn_app().await;

    let (status, body) = post(
        &app,
        "/api/items/add-quantity",
        json!({ "name": "Keyboard", "quantity": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Item not found. Use POST /api/items to record a new item."
    );

    let (_, body) = get(&app, "/api/items").await;
    assert_eq!(body["pagination"]["totalItems"], 0);

    let (status, _) = post(
        &app,
        "/api/items/add-quantity",
        json!({ "name": "Keyboard", "quantity": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_latest_is_prefix_of_first_page() {
    let app = spawn_app().await;
    record_many(&app, 12).await;

    // Touching an older item moves it to the front.
    post(&app, "/api/items", json!({ "name": "Item 1", "quantity": 1 })).await;

    let (status, latest) = get(&app, "/api/items/latest").await;
    assert_eq!(status, StatusCode::OK);
    let latest = names(&latest);
    assert_eq!(latest.len(), 10);
    assert_eq!(latest[0], "Item 1");
    assert_eq!(latest[1], "Item 12");

    let (_, page) = get(&app, "/api/items?page=1&limit=20").await;
    let page = names(&page);
    assert_eq!(page.len(), 12);
    assert_eq!(&page[..10], latest.as_slice());
}

#[tokio::test]
async fn test_latest_when_empty() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/items/latest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_pagination() {
    let app = spawn_app().await;
    record_many(&app, 25).await;

    let (status, body) = get(&app, "/api/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body).len(), 10);
    assert_eq!(
        body["pagination"],
        json!({ "currentPage": 1, "totalPages": 3, "totalItems": 25, "itemsPerPage": 10 })
    );

    let (_, body) = get(&app, "/api/items?page=3").await;
    assert_eq!(names(&body).len(), 5);

    let (_, body) = get(&app, "/api/items?page=2&limit=5").await;
    assert_eq!(body["pagination"]["totalPages"], 5);
    assert_eq!(
        names(&body),
        vec!["Item 20", "Item 19", "Item 18", "Item 17", "Item 16"]
    );

    let (_, body) = get(&app, "/api/items?page=9").await;
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["currentPage"], 9);

    let (status, body) = get(&app, "/api/items?page=abc&limit=-3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["currentPage"], 1);
    assert_eq!(body["pagination"]["itemsPerPage"], 10);

    let (_, body) = get(&app, "/api/items?limit=1000").await;
    assert_eq!(body["pagination"]["itemsPerPage"], 100);

    let (status, body) = get(&app, "/api/items?page=100000000000000000&limit=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["currentPage"], 100_000_000_000_000_000u64);
    assert_eq!(body["pagination"]["totalItems"], 25);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn test_get_item_by_name() {
    let app = spawn_app().await;
    post(
        &app,
        "/api/items",
        json!({ "name": "Laptop Dell", "quantity": 5 }),
    )
    .await;

    let (status, body) = get(&app, "/api/items/%20Laptop%20Dell%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Laptop Dell");
    assert_eq!(body["data"]["quantity"], 5);
    assert!(body["data"]["lastRecordedAt"].as_str().unwrap().ends_with('Z'));

    let (status, body) = get(&app, "/api/items/Unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found");
}

#[tokio::test]
async fn test_unknown_api_route() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/nothing/here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "Endpoint not found" }));
}

#[tokio::test]
async fn test_wrong_method_is_endpoint_not_found() {
    let app = spawn_app().await;
    let not_found = json!({ "success": false, "message": "Endpoint not found" });

    for (method, uri) in [
        ("DELETE", "/api/items"),
        ("PUT", "/api/items/latest"),
        ("DELETE", "/api/items/Mouse"),
        ("PUT", "/health"),
        ("POST", "/health/ready"),
    ] {
        let (status, body) = send(
            &app,
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, not_found, "{method} {uri}");
    }
}

#[tokio::test]
async fn test_item_named_like_a_route_is_reachable() {
    let app = spawn_app().await;

    let (status, _) = get(&app, "/api/items/add-quantity").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    post(
        &app,
        "/api/items",
        json!({ "name": "add-quantity", "quantity": 2 }),
    )
    .await;

    let (status, body) = get(&app, "/api/items/add-quantity").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "add-quantity");
    assert_eq!(body["data"]["quantity"], 2);

    let (status, body) = get(&app, "/api/items/latest").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_array());
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptimeSeconds"].is_u64());

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["storage"], true);
}

#[tokio::test]
async fn test_index_page_is_served() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_in_memory_backend() {
    let app = spawn_in_memory_app();

    post(&app, "/api/items", json!({ "name": "Cable", "quantity": 2 })).await;
    let (status, body) = post(&app, "/api/items", json!({ "name": "Cable", "quantity": 2 })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["quantity"], 4);

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["storage"], true);
}
