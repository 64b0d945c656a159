pub const SITE_NAME: &str = "CrewSync";
pub const SITE_TAGLINE: &str = "17-Parameter Crew Scheduling";

/// Prefix of every backend endpoint.
pub const API_BASE: &str = "/api";
