use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::analyze::Analyzer;
use crate::config::AppConfig;
use crate::history::{History, HistoryEntry};
use crate::report::AnalysisResult;

const HISTORY_FETCH_LIMIT: usize = 20;
const SESSION_HEADER: &str = "x-session-id";
const DEFAULT_SESSION: &str = "anonymous";

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
    history: Arc<History>,
    config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::new()),
            history: Arc::new(History::with_capacity(config.max_history_items)),
            config,
        }
    }

    /// Convenience for bins/tests: config resolved from file + env.
    pub fn from_env() -> Self {
        Self::new(AppConfig::load())
    }
}

pub fn router(state: AppState) -> Router {
    crate::metrics::ensure_metrics_described();

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/history", get(history))
        .route("/clear-history", post(clear_history))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
    #[serde(default = "default_advanced")]
    advanced: bool,
}

fn default_advanced() -> bool {
    true
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(msg: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody { error: msg.into() }),
    )
}

async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let text = body.text.trim();
    if text.is_empty() {
        counter!("analyze_rejected_total").increment(1);
        return Err(bad_request("Please enter some text to analyze"));
    }
    if text.chars().count() > state.config.max_text_length {
        counter!("analyze_rejected_total").increment(1);
        return Err(bad_request(format!(
            "Text too long. Maximum {} characters allowed.",
            state.config.max_text_length
        )));
    }

    let session = session_id(&headers);

    let started = Instant::now();
    let result = state.analyzer.analyze(text, body.advanced);
    histogram!("analyze_duration_ms").record(started.elapsed().as_secs_f64() * 1000.0);
    counter!("analyze_requests_total").increment(1);
    if result.cleaned_text.is_empty() {
        counter!("analyze_empty_total").increment(1);
    }

    dev_log_analysis(text, &session, body.advanced);

    state.history.push(&session, text, &result);
    Ok(Json(result))
}

#[derive(serde::Serialize)]
struct HistoryResp {
    history: Vec<HistoryEntry>,
}

async fn history(State(state): State<AppState>, headers: HeaderMap) -> Json<HistoryResp> {
    let session = session_id(&headers);
    Json(HistoryResp {
        history: state.history.snapshot_last_n(&session, HISTORY_FETCH_LIMIT),
    })
}

#[derive(serde::Serialize)]
struct MessageResp {
    message: String,
}

async fn clear_history(State(state): State<AppState>, headers: HeaderMap) -> Json<MessageResp> {
    let session = session_id(&headers);
    state.history.clear(&session);
    Json(MessageResp {
        message: "History cleared successfully".to_string(),
    })
}

/// Session comes from the `X-Session-Id` header; absent or blank falls back
/// to a shared anonymous bucket.
fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION)
        .to_string()
}

// Dev logging gate: ANALYZER_DEV_LOG=1 AND dev env (debug build or
// SHUTTLE_ENV in {local, development, dev}).
pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var("ANALYZER_DEV_LOG").ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Minimal, anonymized dev logger. Never logs the raw text — only a short
/// hash, the session bucket, and request shape.
fn dev_log_analysis(text: &str, session: &str, advanced: bool) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(text);
    info!(
        target: "analyze",
        %id,
        session,
        advanced,
        chars = text.chars().count(),
        "analyze request"
    );
}
