use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use vg_analysis::AnalysisResult;
use vg_core::Language;

/// Body of `/encrypt` and `/decrypt`. `language` is the raw selector string.
#[derive(Debug, Deserialize)]
pub struct CipherRequest {
    pub text: String,
    pub key: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct CipherResponse {
    pub output: String,
}

#[derive(Debug, Deserialize)]
pub struct AttackRequest {
    pub ciphertext: String,
    pub language: String,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn cipher_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/encrypt", post(encrypt))
        .route("/api/v1/decrypt", post(decrypt))
}

pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/api/v1/attack", post(attack))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn encrypt(Json(req): Json<CipherRequest>) -> Result<Json<CipherResponse>, ApiError> {
    let language: Language = req.language.parse()?;
    let output = vg_cipher::encrypt(&req.text, &req.key, language)?;
    Ok(Json(CipherResponse { output }))
}

async fn decrypt(
    State(state): State<AppState>,
    Json(req): Json<CipherRequest>,
) -> Result<Json<CipherResponse>, ApiError> {
    let language: Language = req.language.parse()?;
    let output = state.analyzer.decrypt_with_key(&req.text, &req.key, language)?;
    Ok(Json(CipherResponse { output }))
}

async fn attack(
    State(state): State<AppState>,
    Json(req): Json<AttackRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let language: Language = req.language.parse()?;
    let analyzer = state.analyzer.clone();
    // CPU-bound; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || analyzer.attack(&req.ciphertext, language))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))??;
    Ok(Json(result))
}
