//! Source of every payload the `/api` routes serve.
//!
//! The server never ranks or scores candidates itself. It either forwards to a
//! running scoring service or serves a data set that was scored ahead of time.

pub mod fixture;
pub mod http;

use crate::{
    model::{
        crew::CrewMemberDto,
        dashboard::{DashboardStatsDto, HealthDto},
        flight::FlightDto,
        recommendation::RecommendationDto,
    },
    server::error::AppError,
};

pub use fixture::FixtureBackend;
pub use http::HttpBackend;

pub enum CrewBackend {
    Upstream(HttpBackend),
    Fixture(FixtureBackend),
}

impl CrewBackend {
    pub async fn dashboard_stats(&self) -> Result<DashboardStatsDto, AppError> {
        match self {
            Self::Upstream(backend) => backend.dashboard_stats().await,
            Self::Fixture(backend) => Ok(backend.dashboard_stats()),
        }
    }

    pub async fn health(&self) -> Result<HealthDto, AppError> {
        match self {
            Self::Upstream(backend) => backend.health().await,
            Self::Fixture(backend) => Ok(backend.health()),
        }
    }

    pub async fn flights(&self) -> Result<Vec<FlightDto>, AppError> {
        match self {
            Self::Upstream(backend) => backend.flights().await,
            Self::Fixture(backend) => Ok(backend.flights()),
        }
    }

    pub async fn flight(&self, flight_number: &str) -> Result<FlightDto, AppError> {
        match self {
            Self::Upstream(backend) => backend.flight(flight_number).await,
            Self::Fixture(backend) => backend.flight(flight_number),
        }
    }

    pub async fn crew(&self) -> Result<Vec<CrewMemberDto>, AppError> {
        match self {
            Self::Upstream(backend) => backend.crew().await,
            Self::Fixture(backend) => Ok(backend.crew()),
        }
    }

    pub async fn crew_member(&self, emp_id: &str) -> Result<CrewMemberDto, AppError> {
        match self {
            Self::Upstream(backend) => backend.crew_member(emp_id).await,
            Self::Fixture(backend) => backend.crew_member(emp_id),
        }
    }

    pub async fn recommendations(
        &self,
        flight_number: &str,
    ) -> Result<Vec<RecommendationDto>, AppError> {
        match self {
            Self::Upstream(backend) => backend.recommendations(flight_number).await,
            Self::Fixture(backend) => backend.recommendations(flight_number),
        }
    }
}
