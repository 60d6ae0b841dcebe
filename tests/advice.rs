//! Router-level tests for the advice endpoint using a mock chat provider.

use advisor_service::config::{
    AdvisorConfig, HttpConfig, ModelConfig, ProviderConfig, SecurityConfig,
};
use advisor_service::services::providers::mock::MockChatProvider;
use advisor_service::services::providers::ChatProvider;
use advisor_service::services::AdvisorService;
use advisor_service::startup::{build_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> AdvisorConfig {
    AdvisorConfig {
        http: HttpConfig { port: 0 },
        provider: ProviderConfig {
            api_key: "test-api-key".to_string(),
        },
        model: ModelConfig {
            text_model: "llama3-70b-8192".to_string(),
            temperature: 0.7,
        },
        security: SecurityConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        log_level: "info".to_string(),
    }
}

fn app_with_provider(provider: MockChatProvider) -> axum::Router {
    let config = test_config();
    let provider: Arc<dyn ChatProvider> = Arc::new(provider);
    let advisor = AdvisorService::new(provider.clone(), config.model.temperature);

    build_router(AppState {
        config,
        advisor,
        provider,
    })
}

fn advice_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/get_medical_advice")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn well_formed_completion_yields_structured_advice() {
    let completion =
        "See a doctor.\n\nRecommendations:\nRest\nHydrate\n\nPrecautions:\nAvoid cold drinks";
    let app = app_with_provider(MockChatProvider::new(completion));

    let response = app
        .oneshot(advice_request(r#"{"symptoms":"fever and cough"}"#))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse JSON");

    assert_eq!(json["advice"], "See a doctor.");
    assert_eq!(json["recommendations"], serde_json::json!(["Rest", "Hydrate"]));
    assert_eq!(json["precautions"], serde_json::json!(["Avoid cold drinks"]));
}

#[tokio::test]
async fn short_completion_surfaces_as_server_error() {
    let app = app_with_provider(MockChatProvider::new("Advice only.\n\nRecommendations:\nRest"));

    let response = app
        .oneshot(advice_request(r#"{"symptoms":"fever"}"#))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse JSON");
    assert_eq!(json["error"], "Error processing request");
}

#[tokio::test]
async fn provider_failure_surfaces_as_server_error() {
    let app = app_with_provider(MockChatProvider::disabled());

    let response = app
        .oneshot(advice_request(r#"{"symptoms":"fever"}"#))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_symptoms_is_rejected() {
    let app = app_with_provider(MockChatProvider::new("unused"));

    let response = app
        .oneshot(advice_request(r#"{"patient_history":"none"}"#))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_symptoms_fails_validation() {
    let app = app_with_provider(MockChatProvider::new("unused"));

    let response = app
        .oneshot(advice_request(r#"{"symptoms":""}"#))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn root_ignores_state_and_returns_liveness_message() {
    let app = app_with_provider(MockChatProvider::disabled());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).expect("Failed to parse JSON");
    assert_eq!(json["message"], "Medical Advisor API is running");
}
