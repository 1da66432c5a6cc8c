use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tower::ServiceExt;
use vg_core::{AnalysisConfig, Language};
use vg_server::{app, app_with_state, state::AppState};

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(v) => Body::from(serde_json::to_vec(&v).unwrap()),
        None => Body::empty(),
    };
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn sample_text(language: Language, len: usize, seed: u64) -> String {
    let letters = language.alphabet().letters();
    let dist = WeightedIndex::new(language.profile().letter_frequencies).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| letters[dist.sample(&mut rng)]).collect()
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ========== Encrypt / decrypt ==========

#[tokio::test]
async fn test_encrypt() {
    let req = json!({"text": "ATTACKATDAWN", "key": "lemon", "language": "English"});
    let (status, body) = send(app(), "POST", "/api/v1/encrypt", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "lx5opve5rn7r");
}

#[tokio::test]
async fn test_decrypt_native_label() {
    let req = json!({"text": "lx5opve5rn7r", "key": "LEMON", "language": "Английский"});
    let (status, body) = send(app(), "POST", "/api/v1/decrypt", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "attackatdawn");
}

#[tokio::test]
async fn test_russian_roundtrip() {
    let req = json!({"text": "Привет", "key": "ключ", "language": "Russian"});
    let (_, body) = send(app(), "POST", "/api/v1/encrypt", Some(req)).await;
    let ct = body["output"].as_str().unwrap().to_string();
    let req = json!({"text": ct, "key": "ключ", "language": "Russian"});
    let (status, body) = send(app(), "POST", "/api/v1/decrypt", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["output"], "привет");
}

#[tokio::test]
async fn test_script_mismatch_is_bad_request() {
    let req = json!({"text": "hello", "key": "key", "language": "Russian"});
    let (status, body) = send(app(), "POST", "/api/v1/encrypt", Some(req)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "script_mismatch");
    assert!(body["error"]["message"].as_str().unwrap().contains("English"));
}

#[tokio::test]
async fn test_invalid_text_symbol() {
    let req = json!({"text": "hello!", "key": "key", "language": "English"});
    let (status, body) = send(app(), "POST", "/api/v1/encrypt", Some(req)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_text_symbol");
}

#[tokio::test]
async fn test_empty_key() {
    let req = json!({"text": "hello", "key": "  ", "language": "English"});
    let (status, body) = send(app(), "POST", "/api/v1/decrypt", Some(req)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "empty_input");
}

#[tokio::test]
async fn test_unknown_language() {
    let req = json!({"text": "hello", "key": "key", "language": "Latin"});
    let (status, body) = send(app(), "POST", "/api/v1/encrypt", Some(req)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "unknown_language");
}

// ========== Attack ==========

#[tokio::test]
async fn test_attack_recovers_key() {
    let plain = sample_text(Language::English, 6000, 99);
    let ct = vg_cipher::encrypt(&plain, "key", Language::English).unwrap();
    let req = json!({"ciphertext": ct, "language": "English"});
    let (status, body) = send(app(), "POST", "/api/v1/attack", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recovered_key"], "key");
    assert_eq!(body["decoded_text"], plain.as_str());
    assert!(body["estimated_key_length"].as_u64().is_some());
}

#[tokio::test]
async fn test_attack_empty_after_filter() {
    let req = json!({"ciphertext": "!!!???", "language": "English"});
    let (status, body) = send(app(), "POST", "/api/v1/attack", Some(req)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "empty_after_filter");
}

#[tokio::test]
async fn test_attack_with_custom_config() {
    let state = AppState::with_config(AnalysisConfig { max_key_length: 6, ..Default::default() }).unwrap();
    let req = json!({"ciphertext": "Lx5opve5rn7r!", "language": "en"});
    let (status, body) = send(app_with_state(state), "POST", "/api/v1/attack", Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["estimated_key_length"].as_u64().unwrap() <= 6);
    assert_eq!(body["decoded_text"].as_str().unwrap().chars().count(), 12);
}

#[test]
fn test_invalid_config_rejected() {
    let config = AnalysisConfig { min_key_length: 0, ..Default::default() };
    assert!(AppState::with_config(config).is_err());
}
