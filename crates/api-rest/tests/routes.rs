//! Black-box tests against the full router

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::util::ServiceExt;

use feedback_hub_api::{router, AppState};
use feedback_hub_config::ServiceConfig;
use feedback_hub_service::{FeedbackService, StaticTokenVerifier};
use feedback_hub_store::MemoryStore;

const TOKEN: &str = "route-test-token";

fn test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    let verifier = Arc::new(StaticTokenVerifier::new(TOKEN));
    let service = Arc::new(FeedbackService::new(store, verifier));
    let state = AppState::new(service, "feedback-hub-test");
    router(state, &ServiceConfig::default())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_feedback(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/feedback")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Routes Tester",
        "experience": "good",
        "feedback": "this body is comfortably long enough",
        "improvements": "faster search results",
        "resilienceScore": 80
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "feedback-hub-test");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let response = test_app().oneshot(get("/api/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Endpoint not found");
}

#[tokio::test]
async fn test_submit_valid_feedback() {
    let response = test_app().oneshot(post_feedback(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Feedback submitted successfully");
    assert!(json["feedbackId"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_submit_invalid_experience_rejected() {
    let mut body = valid_body();
    body["experience"] = serde_json::json!("terrible");

    let response = test_app().oneshot(post_feedback(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid experience rating");
}

#[tokio::test]
async fn test_submit_short_feedback_rejected() {
    let mut body = valid_body();
    body["feedback"] = serde_json::json!("too short");

    let response = test_app().oneshot(post_feedback(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Feedback must be between 10 and 2000 characters");
}

#[tokio::test]
async fn test_analytics_reflects_submissions() {
    let app = test_app();

    let mut body = valid_body();
    body["resilienceScore"] = serde_json::json!(80);
    app.clone().oneshot(post_feedback(body)).await.unwrap();

    let mut body = valid_body();
    body["experience"] = serde_json::json!("excellent");
    body["resilienceScore"] = serde_json::json!(100);
    app.clone().oneshot(post_feedback(body)).await.unwrap();

    let response = app.oneshot(get("/api/analytics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["totalSubmissions"], 2);
    assert_eq!(json["data"]["averageScore"], 90);
    assert_eq!(json["data"]["experienceCounts"]["good"], 1);
    assert_eq!(json["data"]["experienceCounts"]["excellent"], 1);
}

#[tokio::test]
async fn test_list_all_requires_bearer_token() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/api/feedback/all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Unauthorized");

    let response = app
        .clone()
        .oneshot(get_with_token("/api/feedback/all", "wrong-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(get_with_token("/api/feedback/all", TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_all_returns_records_newest_first() {
    let app = test_app();

    for name in ["first", "second"] {
        let mut body = valid_body();
        body["name"] = serde_json::json!(name);
        app.clone().oneshot(post_feedback(body)).await.unwrap();
    }

    let response = app
        .oneshot(get_with_token("/api/feedback/all", TOKEN))
        .await
        .unwrap();
    let json = body_json(response).await;

    assert_eq!(json["data"]["total"], 2);
    let feedback = json["data"]["feedback"].as_array().unwrap();
    assert_eq!(feedback.len(), 2);
    // Newest first; both records carry client metadata.
    assert_eq!(feedback[0]["name"], "second");
    assert_eq!(feedback[1]["name"], "first");
    assert!(feedback[0].get("clientMeta").is_some());
}

#[tokio::test]
async fn test_csv_export_requires_token_and_sets_headers() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/api/export/csv"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    app.clone().oneshot(post_feedback(valid_body())).await.unwrap();

    let response = app
        .oneshot(get_with_token("/api/export/csv", TOKEN))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=feedback-export.csv"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with(
        "id,name,email,experience,resilienceScore,feedbackText,improvements,submittedAt"
    ));
    assert!(csv.contains("\"Routes Tester\""));
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let response = test_app().oneshot(get("/health")).await.unwrap();
    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_request_id_is_echoed_when_provided() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "caller-chosen-id")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "caller-chosen-id"
    );
}

#[tokio::test]
async fn test_unparsable_score_still_accepted() {
    let app = test_app();

    let mut body = valid_body();
    body["resilienceScore"] = serde_json::json!("ninety-ish");
    let response = app.clone().oneshot(post_feedback(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/analytics")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["totalSubmissions"], 1);
    assert_eq!(json["data"]["averageScore"], 0);
}
