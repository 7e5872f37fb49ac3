use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/telemetry/ingest";
pub const DEFAULT_INTERVAL: &str = "5s";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api_url: String,
    #[serde(with = "humantime_serde")]
    interval: Duration,
    #[serde(default)]
    simulation_seed: Option<u64>,
}

impl AppConfig {
    /// Resolves the configuration from the defaults, an optional `config` file and the process environment.
    pub fn load() -> Result<Self, AppConfigError> {
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self, AppConfigError> {
        let config: AppConfig = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("interval", DEFAULT_INTERVAL)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(environment.ignore_empty(true))
            .build()?
            .try_deserialize()?;

        if config.interval.is_zero() {
            return Err(AppConfigError::ZeroInterval);
        }

        Ok(config)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn simulation_seed(&self) -> Option<u64> {
        self.simulation_seed
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: interval must be greater than zero")]
    ZeroInterval,
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api_url: DEFAULT_API_URL.to_string(),
                interval: Duration::from_secs(5),
                simulation_seed: Some(42),
            },
        }
    }

    pub fn api_url(mut self, url: String) -> Self {
        self.config.api_url = url;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<AppConfig, AppConfigError> {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        AppConfig::from_environment(Environment::default().source(Some(vars)))
    }

    #[test]
    fn load_falls_back_to_the_defaults() -> Result<(), AppConfigError> {
        let config = from_vars(&[])?;

        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert_eq!(config.simulation_seed(), None);
        Ok(())
    }

    #[test]
    fn load_treats_empty_variables_as_unset() -> Result<(), AppConfigError> {
        let config = from_vars(&[("API_URL", ""), ("INTERVAL", "")])?;

        assert_eq!(config.api_url(), DEFAULT_API_URL);
        assert_eq!(config.interval(), Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn load_reads_overrides_from_the_environment() -> Result<(), AppConfigError> {
        let config = from_vars(&[
            ("API_URL", "http://ingest.local:8080/api/telemetry/ingest"),
            ("INTERVAL", "250ms"),
            ("SIMULATION_SEED", "7"),
        ])?;

        assert_eq!(config.api_url(), "http://ingest.local:8080/api/telemetry/ingest");
        assert_eq!(config.interval(), Duration::from_millis(250));
        assert_eq!(config.simulation_seed(), Some(7));
        Ok(())
    }

    #[rstest]
    #[case("5s", Duration::from_secs(5))]
    #[case("500ms", Duration::from_millis(500))]
    #[case("2m", Duration::from_secs(120))]
    #[case("1m 30s", Duration::from_secs(90))]
    fn load_parses_the_interval(#[case] interval: &str, #[case] expected: Duration) -> Result<(), AppConfigError> {
        let config = from_vars(&[("INTERVAL", interval)])?;

        assert_eq!(config.interval(), expected);
        Ok(())
    }

    #[rstest]
    #[case("abc")]
    #[case("5")]
    #[case("-5s")]
    fn load_fails_for_an_invalid_interval(#[case] interval: &str) {
        let result = from_vars(&[("INTERVAL", interval)]);

        assert!(matches!(result, Err(AppConfigError::Config(_))), "expected a config error, found {:?}", result);
    }

    #[test]
    fn load_fails_for_a_zero_interval() {
        let result = from_vars(&[("INTERVAL", "0s")]);

        assert!(matches!(result, Err(AppConfigError::ZeroInterval)));
    }
}
