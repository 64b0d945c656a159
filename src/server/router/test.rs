use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::*;
use crate::{
    model::{
        api::ErrorDto, crew::CrewMemberDto, dashboard::DashboardStatsDto, flight::FlightDto,
        recommendation::RecommendationDto,
    },
    server::service::backend::{fixture::sample_backend, CrewBackend},
};

fn app() -> Router {
    router(None).with_state(AppState::new(CrewBackend::Fixture(sample_backend())))
}

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

async fn get_json<T: DeserializeOwned>(uri: &str) -> (StatusCode, T) {
    let (status, body) = get(uri).await;

    (status, serde_json::from_slice(&body).unwrap())
}

/// Tests the dashboard counters endpoint.
///
/// Expected: 200 with the counters computed from the fixture data
#[tokio::test]
async fn serves_dashboard_stats() {
    let (status, stats): (_, DashboardStatsDto) = get_json("/api/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats.total_flights, 3);
    assert_eq!(stats.needs_assignment, 1);
}

/// Tests flight lookups.
///
/// Expected: 200 for a known flight, 404 with an error body for an unknown one
#[tokio::test]
async fn serves_flights_by_number() {
    let (status, flights): (_, Vec<FlightDto>) = get_json("/api/flights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flights.len(), 3);

    let (status, flight): (_, FlightDto) = get_json("/api/flights/AI101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight.crew_assigned, 2);
    assert_eq!(flight.crew_required, 4);

    let (status, error): (_, ErrorDto) = get_json("/api/flights/ZZ999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, "Flight not found");
}

/// Tests crew lookups, including an id exported as a number.
///
/// Expected: 200 for known ids, 404 with an error body otherwise
#[tokio::test]
async fn serves_crew_by_id() {
    let (status, crew): (_, Vec<CrewMemberDto>) = get_json("/api/crew").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(crew.len(), 3);

    let (status, member): (_, CrewMemberDto) = get_json("/api/crew/1002").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member.emp_id, "1002");

    let (status, error): (_, ErrorDto) = get_json("/api/crew/E999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, "Crew member not found");
}

/// Tests the recommendations endpoint.
///
/// Expected: ranked list for AI101, empty list for AI202, 404 for an unknown flight
#[tokio::test]
async fn serves_recommendations() {
    let (status, ranked): (_, Vec<RecommendationDto>) =
        get_json("/api/recommendations/AI101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2]);

    let (status, empty): (_, Vec<RecommendationDto>) =
        get_json("/api/recommendations/AI202").await;
    assert_eq!(status, StatusCode::OK);
    assert!(empty.is_empty());

    let (status, _): (_, ErrorDto) = get_json("/api/recommendations/ZZ999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that the OpenAPI document lists the recommendation route.
#[tokio::test]
async fn publishes_openapi_document() {
    let (status, body) = get("/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let document = String::from_utf8(body).unwrap();
    assert!(document.contains("/api/recommendations/{flight_number}"));
}
