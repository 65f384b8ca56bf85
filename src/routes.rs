use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // REST API routes
        .route("/api/languages", get(handlers::list_languages))
        .route("/api/translate", post(handlers::translate))
        .route("/api/seo", post(handlers::generate_seo));

    // Front-end bundle
    match &state.config.system_config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

/// Full application with CORS and per-request tracing spans
pub fn build_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri()
        )
    });

    Router::new()
        .merge(create_routes(&state))
        .layer(trace)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
