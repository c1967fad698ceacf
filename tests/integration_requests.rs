//! Request handling that never reaches the database: routing, method checks,
//! content negotiation and body validation.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{empty_request, json_request, send, setup_offline_app};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_unknown_route_is_404_envelope() {
    let (status, body) = send(setup_offline_app(), empty_request("GET", "/api/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No route for /api/nope" }));
}

#[tokio::test]
async fn test_get_register_is_405() {
    let (status, body) = send(setup_offline_app(), empty_request("GET", "/api/register")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Only POST is allowed.");
}

#[tokio::test]
async fn test_post_commonstudents_is_405() {
    let (status, body) = send(
        setup_offline_app(),
        json_request("POST", "/api/commonstudents", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Only GET is allowed.");
}

#[tokio::test]
async fn test_get_suspend_is_405() {
    let (status, body) = send(setup_offline_app(), empty_request("GET", "/api/suspend")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Only POST is allowed.");
}

#[tokio::test]
async fn test_put_retrievefornotifications_is_405() {
    let (status, _) = send(
        setup_offline_app(),
        empty_request("PUT", "/api/retrievefornotifications"),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_post_reset_is_405() {
    let (status, body) = send(setup_offline_app(), empty_request("POST", "/api/reset")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Only DELETE is allowed.");
}

#[tokio::test]
async fn test_register_without_content_type_is_415() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .body(Body::from(r#"{"teacher":"t@x.com","students":[]}"#))
        .unwrap();

    let (status, body) = send(setup_offline_app(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["message"], "Content-Type must be application/json.");
}

#[tokio::test]
async fn test_suspend_with_form_body_is_415() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/suspend")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("student=a@b.com"))
        .unwrap();

    let (status, _) = send(setup_offline_app(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_register_with_empty_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(setup_offline_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Empty request body.");
}

#[tokio::test]
async fn test_notifications_with_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/retrievefornotifications")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"teacher": "#))
        .unwrap();

    let (status, body) = send(setup_offline_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON body.")
    );
}

#[tokio::test]
async fn test_register_with_nothing_to_register_is_422() {
    let (status, body) = send(
        setup_offline_app(),
        json_request("POST", "/api/register", json!({ "teacher": "", "students": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "teacher and students must not both be empty");
}

#[tokio::test]
async fn test_register_with_missing_fields_is_422() {
    let (status, _) = send(
        setup_offline_app(),
        json_request("POST", "/api/register", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_suspend_with_empty_student_is_422() {
    let (status, body) = send(
        setup_offline_app(),
        json_request("POST", "/api/suspend", json!({ "student": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "student is required");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(
        setup_offline_app(),
        empty_request("GET", "/api-docs/openapi.json"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/retrievefornotifications"].is_object());
    assert!(body["paths"]["/api/commonstudents"].is_object());
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/register")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = setup_offline_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}
