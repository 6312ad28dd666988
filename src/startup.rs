use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{handlers, middleware, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration; the API is read-only so only GET is allowed
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("CORS_ORIGIN must be a valid header value"),
        )
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Skill catalog routes
    let skill_routes = Router::new().route("/", get(handlers::skills_handler::get_skills));

    // Diary routes
    let diary_routes = Router::new()
        .route("/", get(handlers::diary_handler::get_diary_entries))
        .route("/{id}", get(handlers::diary_handler::get_diary_entry));

    // Reference catalogs sit directly under /api
    let api_routes = Router::new()
        .nest("/skills", skill_routes)
        .nest("/diary", diary_routes)
        .route("/emotions", get(handlers::references_handler::get_emotions))
        .route("/urges", get(handlers::references_handler::get_urges))
        .route(
            "/custom-fields",
            get(handlers::references_handler::get_custom_fields),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/debug", get(handlers::debug_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api", api_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .layer(from_fn(middleware::track_metrics))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
