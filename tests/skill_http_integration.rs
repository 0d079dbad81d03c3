//! End-to-end tests for the skill endpoint.
//!
//! A local axum server stands in for the completion API, so the real
//! `OpenAIProvider` runs against it over HTTP.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    routing::post as post_route,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use alexa_gpt::adapters::ai::{OpenAIConfig, OpenAIProvider};
use alexa_gpt::adapters::http::{skill_router, SkillAppState};
use alexa_gpt::application::{standard_skill, CompletionBridge, GenerationSettings};
use alexa_gpt::config::AppConfig;
use alexa_gpt::ports::{CompletionProvider, CompletionRequest, FinishReason, TokenUsage};

// =============================================================================
// Fake completion API
// =============================================================================

#[derive(Clone, Default)]
struct FakeApi {
    requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    status: Option<StatusCode>,
    delay: Option<Duration>,
}

async fn completions(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    api.requests.lock().unwrap().push((auth, body.clone()));

    if let Some(delay) = api.delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(status) = api.status {
        return (status, Json(json!({"error": {"message": "upstream failure"}})));
    }

    let prompt = body["prompt"].as_str().unwrap_or_default();
    let last_line = prompt.lines().last().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "id": "cmpl-test",
            "object": "text_completion",
            "model": body["model"],
            "choices": [{
                "text": format!("\n\nEcho: {}", last_line),
                "index": 0,
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
        })),
    )
}

async fn spawn_fake_api(api: FakeApi) -> String {
    let app = Router::new()
        .route("/v1/completions", post_route(completions))
        .with_state(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn provider(base_url: &str, api_key: Option<&str>, timeout: Duration) -> OpenAIProvider {
    let config = OpenAIConfig::new(api_key.map(str::to_string))
        .with_base_url(base_url)
        .with_timeout(timeout);
    OpenAIProvider::new(config).unwrap()
}

fn skill_app_with_timeouts(
    base_url: &str,
    api_key: Option<&str>,
    completion_timeout: Duration,
    request_timeout: Duration,
) -> Router {
    let provider = provider(base_url, api_key, completion_timeout);
    let bridge = CompletionBridge::new(Arc::new(provider), GenerationSettings::default());
    let skill = standard_skill(bridge).unwrap();
    skill_router(SkillAppState::new(Arc::new(skill)), request_timeout)
}

fn skill_app(base_url: &str, api_key: Option<&str>) -> Router {
    skill_app_with_timeouts(base_url, api_key, Duration::from_secs(5), Duration::from_secs(10))
}

// =============================================================================
// Helpers
// =============================================================================

fn query_envelope(query: &str, attributes: Value) -> Value {
    json!({
        "version": "1.0",
        "session": {
            "new": false,
            "sessionId": "amzn1.echo-api.session.it",
            "attributes": attributes,
            "application": {"applicationId": "amzn1.ask.skill.it"},
            "user": {"userId": "amzn1.ask.account.it"}
        },
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.it",
            "timestamp": "2024-01-01T00:00:00Z",
            "locale": "en-US",
            "intent": {
                "name": "GptQueryIntent",
                "confirmationStatus": "NONE",
                "slots": {"query": {"name": "query", "value": query}}
            }
        }
    })
}

async fn post(app: Router, envelope: Value) -> Value {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/skill")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(envelope.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn query_round_trip_through_completion_api() {
    let api = FakeApi::default();
    let base_url = spawn_fake_api(api.clone()).await;

    let body = post(
        skill_app(&base_url, Some("sk-test")),
        query_envelope("What is 2+2?", json!({})),
    )
    .await;

    assert_eq!(body["response"]["outputSpeech"]["text"], "Echo: User: What is 2+2?");
    assert_eq!(body["response"]["shouldEndSession"], false);

    let requests = api.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (auth, sent) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(sent["prompt"], "You are a helpful assistant.\nUser: What is 2+2?");
    assert_eq!(sent["max_tokens"], 512);
    assert_eq!(sent["n"], 1);
    assert_eq!(sent["temperature"], 0.5);
    assert!(sent.get("stop").is_none());
}

#[tokio::test]
async fn second_turn_carries_previous_exchange() {
    let api = FakeApi::default();
    let base_url = spawn_fake_api(api.clone()).await;
    let app = skill_app(&base_url, Some("sk-test"));

    let first = post(app.clone(), query_envelope("hi", json!({}))).await;
    let attributes = first["sessionAttributes"].clone();
    post(app, query_envelope("and then?", attributes)).await;

    let requests = api.requests.lock().unwrap();
    assert_eq!(
        requests[1].1["prompt"],
        "You are a helpful assistant.\nUser: hi\nAssistant: Echo: User: hi\nUser: and then?"
    );
}

#[tokio::test]
async fn upstream_failure_is_spoken() {
    let api = FakeApi {
        status: Some(StatusCode::SERVICE_UNAVAILABLE),
        ..Default::default()
    };
    let base_url = spawn_fake_api(api).await;

    let body = post(
        skill_app(&base_url, Some("sk-test")),
        query_envelope("hello", json!({})),
    )
    .await;

    let speech = body["response"]["outputSpeech"]["text"].as_str().unwrap();
    assert!(speech.starts_with("Error generating response:"));
    assert_eq!(body["response"]["reprompt"]["outputSpeech"]["text"], "Any other questions?");
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_network() {
    let api = FakeApi::default();
    let base_url = spawn_fake_api(api.clone()).await;

    let body = post(skill_app(&base_url, None), query_envelope("hello", json!({}))).await;

    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Error generating response: no API key configured"
    );
    assert!(api.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn stop_closes_the_session() {
    let base_url = spawn_fake_api(FakeApi::default()).await;
    let envelope = json!({
        "version": "1.0",
        "session": {"new": false, "sessionId": "s"},
        "request": {
            "type": "IntentRequest",
            "requestId": "r",
            "intent": {"name": "AMAZON.StopIntent"}
        }
    });

    let body = post(skill_app(&base_url, Some("sk-test")), envelope).await;

    assert_eq!(body["response"]["outputSpeech"]["text"], "Leaving Chat G.P.T. mode");
    assert_eq!(body["response"]["shouldEndSession"], true);
    assert!(body["response"].get("reprompt").is_none());
}

#[tokio::test]
async fn slow_completion_is_spoken_before_request_times_out() {
    let api = FakeApi {
        delay: Some(Duration::from_secs(5)),
        ..Default::default()
    };
    let base_url = spawn_fake_api(api).await;

    // Same ordering the default configuration enforces.
    let defaults = AppConfig::default();
    assert!(defaults.ai.timeout() < defaults.server.request_timeout());

    let body = post(
        skill_app_with_timeouts(
            &base_url,
            Some("sk-test"),
            Duration::from_secs(1),
            Duration::from_secs(3),
        ),
        query_envelope("are you there?", json!({})),
    )
    .await;

    let speech = body["response"]["outputSpeech"]["text"].as_str().unwrap();
    assert!(speech.starts_with("Error generating response:"), "{speech}");
    assert!(speech.contains("timed out"), "{speech}");
    assert_eq!(body["response"]["shouldEndSession"], false);
}

#[tokio::test]
async fn provider_reads_usage_and_finish_reason() {
    let base_url = spawn_fake_api(FakeApi::default()).await;
    let provider = provider(&base_url, Some("sk-test"), Duration::from_secs(5));

    let response = provider
        .complete(CompletionRequest::new("User: hi", 16, 0.5))
        .await
        .unwrap();

    assert_eq!(response.text, "\n\nEcho: User: hi");
    assert_eq!(response.model, "gpt-3.5-turbo-instruct");
    assert_eq!(response.finish_reason, FinishReason::Stop);
    assert_eq!(response.usage, Some(TokenUsage::new(10, 4)));
}
