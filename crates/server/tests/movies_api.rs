use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use server::repositories::SqliteMovieRepository;
use server::{create_pool, create_router, AppState, Config};

async fn app() -> Router {
    // A single connection: every pooled connection would otherwise
    // open its own in-memory database.
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let pool = create_pool(&config).await.expect("in-memory pool");
    let movies = Arc::new(SqliteMovieRepository::new(pool));
    let state = AppState::new(movies, config);
    create_router(state)
}

async fn send(app: &Router, method: Method, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri("/movies")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri("/movies")
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("array body").clone()
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        Some(json!({"title": "Inception", "actors": "Leo, Tom", "year": "2010"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Inception");
    assert_eq!(created["actors"], json!(["Leo", "Tom"]));
    assert_eq!(created["year"], 2010);
    assert!(created["id"].as_i64().unwrap() > 0);

    let movies = list(&app).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["id"], created["id"]);
    assert_eq!(movies[0]["actors"], json!(["Leo", "Tom"]));
}

#[tokio::test]
async fn test_create_accepts_actor_array() {
    let app = app().await;

    let (status, created) = send(
        &app,
        Method::POST,
        Some(json!({"title": "Heat", "actors": [" Al ", "", "Bob"], "year": 1995})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["actors"], json!(["Al", "Bob"]));
}

#[tokio::test]
async fn test_create_missing_fields_is_rejected() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, Some(json!({"title": "Inception"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_create_non_numeric_year_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        Some(json!({"title": "Inception", "actors": "Leo", "year": "soon"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Year must be a number");
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_update_replaces_record() {
    let app = app().await;

    let (_, created) = send(
        &app,
        Method::POST,
        Some(json!({"title": "Inception", "actors": "Leo", "year": 2010})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        Some(json!({"id": id, "title": "Inception 2", "actors": "A, B ,C", "year": 2012})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "Inception 2");
    assert_eq!(updated["actors"], json!(["A", "B", "C"]));
    assert_eq!(updated["year"], 2012);

    let movies = list(&app).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Inception 2");
}

#[tokio::test]
async fn test_update_without_id_is_rejected() {
    let app = app().await;

    let (_, created) = send(
        &app,
        Method::POST,
        Some(json!({"title": "Inception", "actors": "Leo", "year": 2010})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        Some(json!({"title": "Other", "actors": "X", "year": 2000})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");

    // Store unchanged
    let movies = list(&app).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], created["title"]);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        Some(json!({"id": 9999, "title": "Ghost", "actors": "X", "year": 2000})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_delete_then_list_never_shows_id() {
    let app = app().await;

    let (_, created) = send(
        &app,
        Method::POST,
        Some(json!({"title": "Inception", "actors": "Leo", "year": 2010})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, Some(json!({"id": id}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Movie deleted successfully");
    assert!(list(&app).await.iter().all(|m| m["id"] != created["id"]));

    // Second delete of the same id reports not-found
    let (status, body) = send(&app, Method::DELETE, Some(json!({"id": id}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Movie not found");
}

#[tokio::test]
async fn test_delete_without_id_is_rejected() {
    let app = app().await;

    let (status, body) = send(&app, Method::DELETE, Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn test_ui_and_api_docs_are_served() {
    let app = app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("<title>Movies</title>"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc["info"]["title"], "Movies API");
}
