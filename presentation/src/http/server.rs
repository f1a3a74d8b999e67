//! HTTP chat endpoint
//!
//! `POST /v1/chat` answers one query; `GET /v1/health` is a liveness
//! probe. Requests share the single answer-query use case, whose
//! internal lock serializes cache and history mutations across
//! concurrent requests.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use coverquery_application::AnswerQueryUseCase;
use coverquery_domain::{Query, TopicLabel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Request body for `POST /v1/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response body for `POST /v1/chat`
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub query: String,
    pub response: String,
    pub categories: Vec<TopicLabel>,
}

/// Run the HTTP front end until the process is stopped
pub async fn serve(use_case: Arc<AnswerQueryUseCase>, bind: &str) -> std::io::Result<()> {
    let app = Router::new()
        .route("/v1/chat", post(chat))
        .route("/v1/health", get(health))
        .with_state(use_case)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on {bind}");
    axum::serve(listener, app).await
}

async fn chat(
    State(use_case): State<Arc<AnswerQueryUseCase>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    let query = Query::try_new(&request.query)
        .ok_or((StatusCode::BAD_REQUEST, "query must not be empty".to_string()))?;

    let outcome = use_case.execute(&query).await;

    Ok(Json(ChatResponse {
        query: outcome.query,
        response: outcome.answer,
        categories: outcome.labels,
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
