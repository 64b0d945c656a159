use std::path::PathBuf;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

pub const API_URL_VAR: &str = "CREWSYNC_API_URL";
pub const DATA_DIR_VAR: &str = "CREWSYNC_DATA_DIR";
pub const CORS_ORIGIN_VAR: &str = "CREWSYNC_CORS_ORIGIN";

/// Where crew, flight and recommendation data comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendSource {
    /// A running scoring service the `/api` routes are forwarded to.
    Upstream(Url),
    /// A directory holding `crew.json`, `flights.json` and `recommendations.json`.
    Fixture(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub backend: BackendSource,
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// `CREWSYNC_API_URL` wins over `CREWSYNC_DATA_DIR` when both are set. Blank
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend = if let Some(api_url) = var(API_URL_VAR) {
            let url = Url::parse(&api_url).map_err(|e| {
                ConfigError::InvalidEnvVar(API_URL_VAR.to_string(), e.to_string())
            })?;
            BackendSource::Upstream(url)
        } else if let Some(data_dir) = var(DATA_DIR_VAR) {
            BackendSource::Fixture(PathBuf::from(data_dir))
        } else {
            return Err(ConfigError::MissingEnvVar(format!(
                "{} or {}",
                API_URL_VAR, DATA_DIR_VAR
            )));
        };

        Ok(Self {
            backend,
            cors_origin: var(CORS_ORIGIN_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    /// Tests that an upstream URL takes precedence over a fixture directory.
    ///
    /// Expected: Ok with BackendSource::Upstream
    #[test]
    fn prefers_upstream_url() {
        let config = Config::from_lookup(lookup(&[
            (API_URL_VAR, "http://localhost:5000/api/"),
            (DATA_DIR_VAR, "./data"),
        ]))
        .unwrap();

        assert_eq!(
            config.backend,
            BackendSource::Upstream(Url::parse("http://localhost:5000/api/").unwrap())
        );
        assert_eq!(config.cors_origin, None);
    }

    #[test]
    fn falls_back_to_fixture_dir() {
        let config = Config::from_lookup(lookup(&[
            (API_URL_VAR, "  "),
            (DATA_DIR_VAR, "./data"),
            (CORS_ORIGIN_VAR, "http://localhost:3000"),
        ]))
        .unwrap();

        assert_eq!(config.backend, BackendSource::Fixture(PathBuf::from("./data")));
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    /// Tests configuration without any backend source.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar)
    #[test]
    fn requires_a_backend_source() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    /// Tests an upstream URL that does not parse.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar) naming the variable
    #[test]
    fn rejects_invalid_upstream_url() {
        let result = Config::from_lookup(lookup(&[(API_URL_VAR, "not a url")]));

        match result {
            Err(ConfigError::InvalidEnvVar(name, _)) => assert_eq!(name, API_URL_VAR),
            other => panic!("expected InvalidEnvVar, got {:?}", other),
        }
    }
}
