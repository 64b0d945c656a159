use std::{
    collections::HashMap,
    io::ErrorKind,
    path::Path,
};

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    model::{
        crew::{Availability, CrewMemberDto},
        dashboard::{DashboardStatsDto, HealthDto},
        flight::{FlightDto, FlightStatus},
        recommendation::RecommendationDto,
    },
    server::error::{fixture::FixtureError, AppError},
};

pub const CREW_FILE: &str = "crew.json";
pub const FLIGHTS_FILE: &str = "flights.json";
pub const RECOMMENDATIONS_FILE: &str = "recommendations.json";

/// Names used by exports of the legacy scoring service's `data/` directory.
pub const LEGACY_CREW_FILE: &str = "crew_data.json";
pub const LEGACY_FLIGHTS_FILE: &str = "flights_data.json";

/// Serves a pre-scored data set loaded from disk.
///
/// `recommendations.json` is an object keyed by flight number whose values are
/// the ranked candidate lists exactly as the scoring service would return them.
pub struct FixtureBackend {
    crew: Vec<CrewMemberDto>,
    flights: Vec<FlightDto>,
    recommendations: HashMap<String, Vec<RecommendationDto>>,
}

impl FixtureBackend {
    /// Candidate lists are ordered by rank once, here.
    pub fn new(
        crew: Vec<CrewMemberDto>,
        flights: Vec<FlightDto>,
        mut recommendations: HashMap<String, Vec<RecommendationDto>>,
    ) -> Self {
        for candidates in recommendations.values_mut() {
            candidates.sort_by_key(|candidate| candidate.rank);
        }

        Self {
            crew,
            flights,
            recommendations,
        }
    }

    /// Loads the fixture files from `dir`.
    ///
    /// A missing `recommendations.json` yields an empty table; the crew and
    /// flight files are required, under either their own or their legacy name.
    pub async fn load(dir: &Path) -> Result<Self, FixtureError> {
        let crew: Vec<CrewMemberDto> = read_first(dir, &[CREW_FILE, LEGACY_CREW_FILE]).await?;
        let flights: Vec<FlightDto> =
            read_first(dir, &[FLIGHTS_FILE, LEGACY_FLIGHTS_FILE]).await?;

        let recommendations_path = dir.join(RECOMMENDATIONS_FILE);
        let recommendations = match read_json(&recommendations_path).await {
            Ok(recommendations) => recommendations,
            Err(FixtureError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "{} not found, every flight will have an empty recommendation list",
                    recommendations_path.display()
                );
                HashMap::new()
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            "Loaded {} crew members, {} flights and recommendations for {} flights from {}",
            crew.len(),
            flights.len(),
            recommendations.len(),
            dir.display()
        );

        Ok(Self::new(crew, flights, recommendations))
    }

    /// Aggregate counters over the loaded data set.
    ///
    /// Crew without an availability count as available, only flights reported
    /// as "Crew Needed" count as needing assignment, and the performance
    /// average is rounded to one decimal.
    pub fn dashboard_stats(&self) -> DashboardStatsDto {
        let available_crew = self
            .crew
            .iter()
            .filter(|member| member.availability == Availability::Available)
            .count();
        let needs_assignment = self
            .flights
            .iter()
            .filter(|flight| flight.status == Some(FlightStatus::CrewNeeded))
            .count();

        let avg_performance = if self.crew.is_empty() {
            0.0
        } else {
            let total: f64 = self.crew.iter().map(|member| member.performance_score).sum();
            (total / self.crew.len() as f64 * 10.0).round() / 10.0
        };

        DashboardStatsDto {
            total_flights: self.flights.len() as u32,
            available_crew: available_crew as u32,
            needs_assignment: needs_assignment as u32,
            avg_performance,
        }
    }

    pub fn health(&self) -> HealthDto {
        HealthDto {
            status: "running".to_string(),
            crew_count: self.crew.len() as u32,
            flights_count: self.flights.len() as u32,
        }
    }

    pub fn flights(&self) -> Vec<FlightDto> {
        self.flights.clone()
    }

    pub fn flight(&self, flight_number: &str) -> Result<FlightDto, AppError> {
        self.find_flight(flight_number)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Flight not found".to_string()))
    }

    pub fn crew(&self) -> Vec<CrewMemberDto> {
        self.crew.clone()
    }

    pub fn crew_member(&self, emp_id: &str) -> Result<CrewMemberDto, AppError> {
        self.crew
            .iter()
            .find(|member| member.emp_id == emp_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Crew member not found".to_string()))
    }

    /// Ranked candidates for a flight; a known flight without an entry has none.
    pub fn recommendations(&self, flight_number: &str) -> Result<Vec<RecommendationDto>, AppError> {
        if self.find_flight(flight_number).is_none() {
            return Err(AppError::NotFound("Flight not found".to_string()));
        }

        Ok(self
            .recommendations
            .get(flight_number)
            .cloned()
            .unwrap_or_default())
    }

    fn find_flight(&self, flight_number: &str) -> Option<&FlightDto> {
        self.flights
            .iter()
            .find(|flight| flight.flight_number == flight_number)
    }
}

/// Reads the first of `names` present in `dir`. When none is present the error
/// names the first one.
async fn read_first<T: DeserializeOwned>(dir: &Path, names: &[&str]) -> Result<T, FixtureError> {
    let mut first_missing = None;

    for name in names {
        match read_json(&dir.join(name)).await {
            Err(FixtureError::Read { path, source }) if source.kind() == ErrorKind::NotFound => {
                first_missing.get_or_insert(FixtureError::Read { path, source });
            }
            result => return result,
        }
    }

    Err(first_missing.unwrap_or_else(|| FixtureError::Read {
        path: dir.display().to_string(),
        source: ErrorKind::NotFound.into(),
    }))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| FixtureError::Read {
            path: path.display().to_string(),
            source,
        })?;

    serde_json::from_slice(&bytes).map_err(|source| FixtureError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Small data set used by the backend and router tests.
#[cfg(test)]
pub(crate) fn sample_backend() -> FixtureBackend {
    let crew = serde_json::from_value(serde_json::json!([
        {
            "emp_id": "E001",
            "name": "Jane Doe",
            "designation": "Captain",
            "baseLocation": "DEL",
            "performanceScore": 92.0,
            "availability": "Available"
        },
        {
            "emp_id": 1002,
            "name": "Ravi Kumar",
            "designation": "First Officer",
            "baseLocation": "BOM",
            "performanceScore": 81.0
        },
        {
            "emp_id": "E003",
            "name": "Asha Nair",
            "designation": "Cabin Crew",
            "baseLocation": "DEL",
            "performanceScore": 76.0,
            "availability": "Fatigued"
        }
    ]))
    .unwrap();

    let flights = serde_json::from_value(serde_json::json!([
        {
            "flightNumber": "AI101",
            "route": "DEL → BOM",
            "aircraft": "A320",
            "departure": "06:00",
            "status": "Partially Assigned",
            "priority": "High",
            "crewAssigned": 2,
            "crewRequired": 4
        },
        {
            "flightNumber": "AI202",
            "route": "BOM → BLR",
            "aircraft": "B737",
            "departure": "09:30",
            "status": "Crew Needed",
            "priority": "Medium",
            "crewAssigned": 0,
            "crewRequired": 3
        },
        {
            "flightNumber": "AI303",
            "route": "BLR → DEL",
            "aircraft": "A321",
            "departure": "14:15",
            "priority": "Low",
            "crewAssigned": 0,
            "crewRequired": 2
        }
    ]))
    .unwrap();

    let recommendations = serde_json::from_value(serde_json::json!({
        "AI101": [
            {
                "rank": 2,
                "emp_id": 1002,
                "name": "Ravi Kumar",
                "designation": "First Officer",
                "baseLocation": "BOM",
                "compositeScore": 84.2,
                "keyStrengths": ["Performance"]
            },
            {
                "rank": 1,
                "emp_id": "E001",
                "name": "Jane Doe",
                "designation": "Captain",
                "baseLocation": "DEL",
                "compositeScore": 91.5,
                "keyStrengths": ["Performance", "Reliability"]
            }
        ]
    }))
    .unwrap();

    FixtureBackend::new(crew, flights, recommendations)
}
