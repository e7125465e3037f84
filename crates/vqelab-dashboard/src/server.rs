//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{api, ws};

// Embed static files at compile time
const INDEX_HTML: &str = include_str!("../static/index.html");
const APP_JS: &str = include_str!("../static/app.js");
const STYLE_CSS: &str = include_str!("../static/style.css");

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/config",
            get(api::config::get_config).put(api::config::update_config),
        )
        // Run control
        .route("/runs/convergence", post(api::runs::start_convergence))
        .route("/runs/dissociation", post(api::runs::start_dissociation))
        .route("/status", get(api::runs::get_status))
        // Results
        .route("/results", get(api::results::get_result))
        .route("/dissociation", get(api::results::get_dissociation))
        .route("/comparison", get(api::results::get_comparison))
        .route("/export", get(api::export::export));

    // Static file routes
    let static_routes = Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .route("/app.js", get(serve_app_js))
        .route("/style.css", get(serve_style_css));

    // Combine all routes; the page is served from the same origin, so no CORS layer
    Router::new()
        .nest("/api", api_routes)
        .route("/ws", get(ws::ws_handler))
        .merge(static_routes)
        .fallback(serve_index) // SPA fallback
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Static file handlers

async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn serve_app_js() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
}

async fn serve_style_css() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        STYLE_CSS,
    )
}
