//! End-to-end tests for the HTTP surface, driving the Axum router directly.

mod support;

#[allow(unused_imports)]
use std::sync::Arc;

#[allow(unused_imports)]
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
#[allow(unused_imports)]
use graft_api::{create_api_router, ApiConfig, EdgeExecutor};
#[allow(unused_imports)]
use http_body_util::BodyExt;
#[allow(unused_imports)]
use tokio::sync::Mutex;
#[allow(unused_imports)]
use tower::ServiceExt;

#[cfg(feature = "db-tests")]
async fn test_app() -> axum::Router {
    let executor = support::test_executor().await;
    let config = ApiConfig {
        bind_host: "127.0.0.1".to_string(),
        port: 0,
        service_name: "graft".to_string(),
    };
    create_api_router(Arc::new(Mutex::new(executor)), &config).expect("router creation failed")
}

#[cfg(feature = "db-tests")]
async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("response body is not JSON")
}

#[cfg(feature = "db-tests")]
fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
#[cfg(feature = "db-tests")]
async fn insert_edge_end_to_end() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/graft/insert_edge",
            r#"{"context":"graph1","source":"p1","target":"p2","code":"links"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let id = json["id"].as_str().expect("id missing from response");
    id.parse::<uuid::Uuid>().expect("id is not a UUID");

    // Row lookup by the returned id yields the original four fields.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/graft/edge/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let edge = response_json(response).await;
    assert_eq!(edge["id"], id);
    assert_eq!(edge["context"], "graph1");
    assert_eq!(edge["source"], "p1");
    assert_eq!(edge["code"], "links");
    assert_eq!(edge["target"], "p2");
}

#[tokio::test]
#[cfg(feature = "db-tests")]
async fn insert_edge_overwrites_caller_supplied_id() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/graft/insert_edge",
            r#"{"id":"x","context":"c","source":"s","code":"k","target":"t"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_ne!(json["id"], "x");
}

#[tokio::test]
#[cfg(feature = "db-tests")]
async fn new_point_returns_distinct_ids() {
    let app = test_app().await;

    let first = response_json(
        app.clone()
            .oneshot(post_json("/graft/new_point", ""))
            .await
            .unwrap(),
    )
    .await;
    let second = response_json(
        app.oneshot(post_json("/graft/new_point", ""))
            .await
            .unwrap(),
    )
    .await;

    let a = first["id"].as_str().expect("id missing");
    let b = second["id"].as_str().expect("id missing");
    a.parse::<uuid::Uuid>().expect("id is not a UUID");
    assert_ne!(a, b);
}

#[tokio::test]
#[cfg(feature = "db-tests")]
async fn malformed_body_is_rejected() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json("/graft/insert_edge", r#"{"context":"c"}"#))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
#[cfg(feature = "db-tests")]
async fn unknown_edge_returns_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/graft/edge/67e55044-10b1-426f-9247-bb680e5fe0c8")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = response_json(response).await;
    assert_eq!(json["code"], "EDGE_NOT_FOUND");
}

#[tokio::test]
#[cfg(feature = "db-tests")]
async fn health_ready_reports_database() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
}
