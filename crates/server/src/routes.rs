use axum::{
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::observability;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod colors;
pub mod people;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: people, colors, and operational endpoints.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let people_routes = Router::new()
        .route("/people", get(people::list_people))
        .route(
            "/people/:id",
            get(people::get_person)
                .post(people::create_person)
                .delete(people::delete_person),
        );

    let color_routes = Router::new()
        .route("/color", post(colors::upsert_color))
        .route("/color/:id", get(colors::get_color))
        .route("/colors", get(colors::get_colors));

    let ops_routes = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(observability::metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    people_routes
        .merge(color_routes)
        .merge(ops_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        // one INFO span per request, headers left out
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}
