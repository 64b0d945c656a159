use axum::{
    http::{HeaderValue, Method},
    Router,
};
use dioxus_logger::tracing;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        crew::{get_all_crew, get_crew_member},
        dashboard::get_dashboard_stats,
        flight::{get_all_flights, get_flight},
        health::health_check,
        recommendation::get_recommendations,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "CrewSync API",
    description = "Flights, crew roster and ranked crew recommendations"
))]
pub struct ApiDoc;

/// Builds the `/api` routes together with the Swagger UI at `/api/docs`.
pub fn router(cors_origin: Option<&str>) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_dashboard_stats))
        .routes(routes!(health_check))
        .routes(routes!(get_all_flights))
        .routes(routes!(get_flight))
        .routes(routes!(get_all_crew))
        .routes(routes!(get_crew_member))
        .routes(routes!(get_recommendations))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
}

/// Read-only CORS policy. Any origin is allowed unless one is configured.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(err)) => {
            tracing::warn!("Ignoring invalid CORS origin: {}", err);
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}

#[cfg(test)]
mod test;
