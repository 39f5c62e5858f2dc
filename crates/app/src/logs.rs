//! Frontend log ingest
//!
//! POST /logs accepts `{level, message, ...meta}` from the browser and
//! re-emits it through `tracing` at the matching level.

use axum::{routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Deserialize)]
pub struct FrontendLog {
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

pub fn routes() -> Router {
    Router::new().route("/logs", post(ingest))
}

async fn ingest(Json(log): Json<FrontendLog>) -> Json<Value> {
    let message = log.message.as_deref().unwrap_or_default();
    let meta = Value::Object(log.meta);

    match log.level.as_deref() {
        Some("error") => tracing::error!(target: "frontend", meta = %meta, "{}", message),
        Some("warn") => tracing::warn!(target: "frontend", meta = %meta, "{}", message),
        Some("debug") => tracing::debug!(target: "frontend", meta = %meta, "{}", message),
        _ => tracing::info!(target: "frontend", meta = %meta, "{}", message),
    }

    Json(json!({ "success": true }))
}
