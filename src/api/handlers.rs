//! HTTP request handlers

use crate::api::models::{AccountsGraphResponse, EventAck, GraphQuery};
use crate::error::AppError;
use crate::model::{graph_fallback_path, graph_operation_path, index_candidates};
use crate::response::{not_found, serve_static, try_serve_file, try_serve_first};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Query, Request, State},
    response::Response,
    Json,
};
use std::sync::Arc;
use tracing::debug;

/// Serve the helper script from the root directory
pub async fn proxy_script(
    State(state): State<Arc<AppState>>,
    req: Request,
) -> Result<Response, AppError> {
    let (parts, _body) = req.into_parts();

    try_serve_file(&state.proxy_script, &parts)
        .await
        .ok_or(AppError::ProxyScriptNotFound)
}

/// Serve the model's entry document, preferring `index.modified.html`
pub async fn index(
    State(state): State<Arc<AppState>>,
    req: Request,
) -> Result<Response, AppError> {
    let model_dir = match state.selection.dir() {
        Some(dir) if state.selection.is_configured() => dir,
        _ => return Err(AppError::ModelNotConfigured),
    };

    let (parts, _body) = req.into_parts();
    let candidates = index_candidates(model_dir);
    try_serve_first(&candidates, &parts)
        .await
        .ok_or(AppError::IndexNotFound)
}

/// Telemetry sink. The body is drained (JSON is checked by `json_body`) and dropped.
pub async fn record_event(_body: Bytes) -> Json<EventAck> {
    Json(EventAck::default())
}

/// Accounts graph: there is never a logged-in user
pub async fn accounts_graph(_body: Bytes) -> Json<AccountsGraphResponse> {
    Json(AccountsGraphResponse::default())
}

/// Models graph, answered from captured documents in the model directory.
///
/// `graph_<operationName>.json` wins over the extensionless `graph`; when
/// neither exists the request ends in the terminal 404.
pub async fn models_graph(
    State(state): State<Arc<AppState>>,
    query: Option<Query<GraphQuery>>,
    req: Request,
) -> Result<Response, AppError> {
    let Some(model_dir) = state.selection.dir() else {
        return Err(AppError::NotFound);
    };

    let (parts, _body) = req.into_parts();
    let query = query.map(|Query(q)| q).unwrap_or_default();

    if let Some(operation) = query.operation() {
        match graph_operation_path(model_dir, operation) {
            Some(path) => {
                if let Some(response) = try_serve_file(&path, &parts).await {
                    return Ok(response);
                }
                debug!(operation, "No captured document for graph operation");
            }
            None => debug!(operation, "Rejected unsafe graph operation name"),
        }
    }

    try_serve_file(&graph_fallback_path(model_dir), &parts)
        .await
        .ok_or(AppError::NotFound)
}

/// Everything no route claimed: static assets of the model, then 404
pub async fn static_asset(State(state): State<Arc<AppState>>, req: Request) -> Response {
    match state.selection.dir() {
        Some(model_dir) => serve_static(model_dir, req).await,
        None => not_found().await,
    }
}
