use dioxus_logger::tracing;
use reqwest::{header::ACCEPT, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    model::{
        api::ErrorDto,
        crew::CrewMemberDto,
        dashboard::{DashboardStatsDto, HealthDto},
        flight::FlightDto,
        recommendation::RecommendationDto,
    },
    server::error::{upstream::UpstreamError, AppError},
};

/// Forwards every call to the upstream scoring service.
///
/// Payloads are decoded into the shared DTOs before they are passed on, so a
/// shape change upstream surfaces here as a 502 instead of reaching the client.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// `base_url` points at the upstream `/api` root, e.g. `http://localhost:5000/api`.
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        not_found: &str,
    ) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        tracing::debug!("Forwarding GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(UpstreamError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorDto>().await {
                Ok(dto) => dto.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            };

            if status == StatusCode::NOT_FOUND {
                tracing::debug!("Upstream 404 for {}: {}", path, message);
                return Err(AppError::NotFound(not_found.to_string()));
            }

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = response.bytes().await.map_err(UpstreamError::from)?;
        serde_json::from_slice(&body).map_err(|e| {
            UpstreamError::Decode {
                path,
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStatsDto, AppError> {
        self.get(&["dashboard", "stats"], "Dashboard stats not found")
            .await
    }

    pub async fn health(&self) -> Result<HealthDto, AppError> {
        self.get(&["health"], "Health endpoint not found").await
    }

    pub async fn flights(&self) -> Result<Vec<FlightDto>, AppError> {
        self.get(&["flights"], "Flights not found").await
    }

    pub async fn flight(&self, flight_number: &str) -> Result<FlightDto, AppError> {
        self.get(&["flights", flight_number], "Flight not found")
            .await
    }

    pub async fn crew(&self) -> Result<Vec<CrewMemberDto>, AppError> {
        self.get(&["crew"], "Crew not found").await
    }

    pub async fn crew_member(&self, emp_id: &str) -> Result<CrewMemberDto, AppError> {
        self.get(&["crew", emp_id], "Crew member not found").await
    }

    pub async fn recommendations(
        &self,
        flight_number: &str,
    ) -> Result<Vec<RecommendationDto>, AppError> {
        self.get(&["recommendations", flight_number], "Flight not found")
            .await
    }
}
