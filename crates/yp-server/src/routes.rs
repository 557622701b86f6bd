use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use yp_core::{default_tools, Mode};
use yp_enhancer::Enhancer;

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn tool_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/tools", get(list_tools))
        .route("/api/v1/tools/compress", post(compress))
        .route("/api/v1/tools/status", get(status))
        .route("/api/v1/mode", post(detect_mode))
}

#[derive(Debug, Deserialize)]
pub struct CompressRequest {
    pub input: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default, rename = "useLLM")]
    pub use_llm: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub input: String,
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptimeSecs": state.start_time.elapsed().as_secs(),
    }))
}

async fn list_tools() -> Json<Value> {
    Json(json!({ "tools": default_tools() }))
}

async fn compress(
    State(state): State<AppState>,
    payload: Result<Json<CompressRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    // An empty mode string means "detect", same as omitting it.
    let mode = req
        .mode
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .map(str::parse::<Mode>)
        .transpose()?;
    let use_llm = req.use_llm.unwrap_or(true);

    let outcome = state.runner.run(&req.input, mode, use_llm).await;
    info!(mode = %outcome.mode, llm_used = outcome.llm_used, tokens = outcome.token_estimate(), "compress");

    Ok(Json(json!({
        "compressed": outcome.prompt,
        "mode": outcome.mode,
        "tokenEstimate": outcome.token_estimate(),
        "tokenSavings": outcome.token_savings(),
        "llmUsed": outcome.llm_used,
        "enhancer": outcome.enhancer,
        "local": outcome.local,
        "text": outcome.render_markdown(),
    })))
}

async fn status(State(state): State<AppState>) -> Json<Value> {
    let enhancer = state.enhancer();
    let available = enhancer.is_available().await;
    let llm_line = if available {
        format!("connected ({})", enhancer.name())
    } else {
        "not available".to_string()
    };
    let modes: Vec<&str> = Mode::ALL.iter().map(Mode::as_str).collect();
    let text = format!(
        "**Yappster Status**\n- Server: running\n- LLM: {llm_line}\n- Modes: {}",
        modes.join(", ")
    );

    Json(json!({
        "server": "running",
        "enhancer": enhancer.name(),
        "enhancerAvailable": available,
        "modes": modes,
        "text": text,
    }))
}

async fn detect_mode(
    State(state): State<AppState>,
    payload: Result<Json<ModeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;
    let mode = state.runner.compressor().detect_mode(&req.input);
    Ok(Json(json!({ "mode": mode })))
}
