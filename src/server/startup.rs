use dioxus_logger::tracing;

use crate::server::{
    config::{BackendSource, Config},
    error::AppError,
    service::backend::{CrewBackend, FixtureBackend, HttpBackend},
};

/// Builds the HTTP client used to reach the upstream scoring service.
///
/// Redirects are disabled so the configured base URL is the only host that is
/// ever contacted.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(crate::server::error::upstream::UpstreamError::from)?)
}

/// Creates the crew backend selected by the configuration.
///
/// # Returns
/// - `Ok(CrewBackend::Upstream)` - Forwarding to `CREWSYNC_API_URL`
/// - `Ok(CrewBackend::Fixture)` - Fixture files loaded from `CREWSYNC_DATA_DIR`
/// - `Err(AppError)` - Client could not be built or fixtures could not be read
pub async fn setup_backend(config: &Config) -> Result<CrewBackend, AppError> {
    match &config.backend {
        BackendSource::Upstream(url) => {
            tracing::info!("Forwarding crew data requests to {}", url);
            let client = setup_reqwest_client()?;
            Ok(CrewBackend::Upstream(HttpBackend::new(client, url.clone())))
        }
        BackendSource::Fixture(dir) => {
            tracing::info!("Serving crew data from fixtures in {}", dir.display());
            Ok(CrewBackend::Fixture(FixtureBackend::load(dir).await?))
        }
    }
}
