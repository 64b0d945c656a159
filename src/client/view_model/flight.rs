use crate::model::flight::{FlightDto, FlightPriority, FlightStatus};

pub fn status_badge_class(status: &FlightStatus) -> &'static str {
    match status {
        FlightStatus::CrewNeeded => "badge-error",
        FlightStatus::PartiallyAssigned => "badge-warning",
        FlightStatus::FullyAssigned => "badge-success",
        FlightStatus::Unknown(_) => "badge-ghost",
    }
}

pub fn priority_badge_class(priority: &FlightPriority) -> &'static str {
    match priority {
        FlightPriority::High => "badge-error badge-outline",
        FlightPriority::Medium => "badge-warning badge-outline",
        FlightPriority::Low => "badge-neutral badge-outline",
        FlightPriority::Unknown(_) => "badge-ghost",
    }
}

/// Assigned over required crew, e.g. `2/4`.
pub fn crew_count_label(flight: &FlightDto) -> String {
    format!("{}/{}", flight.crew_assigned, flight.crew_required)
}

/// Option text for the flight picker: number, route, and open over required seats.
pub fn picker_label(flight: &FlightDto) -> String {
    format!(
        "{} {} ({}/{})",
        flight.flight_number,
        flight.route,
        flight.open_positions(),
        flight.crew_required
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai101() -> FlightDto {
        FlightDto {
            flight_number: "AI101".to_string(),
            route: "DEL-BOM".to_string(),
            aircraft: "A320".to_string(),
            departure: "06:00".to_string(),
            origin: None,
            status: None,
            priority: FlightPriority::High,
            crew_assigned: 2,
            crew_required: 4,
        }
    }

    /// Tests the dashboard row of a half crewed flight.
    ///
    /// Expected: "Partially Assigned" and "2/4"
    #[test]
    fn half_crewed_flight_row() {
        let flight = ai101();

        assert_eq!(flight.effective_status().label(), "Partially Assigned");
        assert_eq!(crew_count_label(&flight), "2/4");
        assert_eq!(status_badge_class(&flight.effective_status()), "badge-warning");
    }

    #[test]
    fn picker_shows_open_positions() {
        assert_eq!(picker_label(&ai101()), "AI101 DEL-BOM (2/4)");
    }

    #[test]
    fn unmapped_values_degrade_to_neutral() {
        assert_eq!(
            status_badge_class(&FlightStatus::Unknown("Delayed".to_string())),
            "badge-ghost"
        );
        assert_eq!(
            priority_badge_class(&FlightPriority::Unknown(String::new())),
            "badge-ghost"
        );
    }
}
