//! HTTP route definitions
//!
//! Precedence mirrors a first-match route list: a path claimed by a route
//! but requested with another method is not answered with 405, it falls
//! through to static assets and then to the terminal 404 like any
//! unmatched request.

use crate::api::{handlers, middleware};
use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.settings.http.max_body_bytes;
    let cors_enabled = state.settings.http.cors_enabled;

    let router = Router::new()
        .route(
            "/JSNetProxy.js",
            get(handlers::proxy_script).fallback(handlers::static_asset),
        )
        .route("/", get(handlers::index).fallback(handlers::static_asset))
        .route(
            "/api/v1/event",
            post(handlers::record_event).fallback(handlers::static_asset),
        )
        .route(
            "/api/mp/accounts/graph",
            post(handlers::accounts_graph).fallback(handlers::static_asset),
        )
        .route("/api/mp/models/graph", any(handlers::models_graph))
        .fallback(handlers::static_asset)
        .layer(axum::middleware::from_fn_with_state(
            max_body_bytes,
            middleware::json_body,
        ))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state);

    let router = if cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
