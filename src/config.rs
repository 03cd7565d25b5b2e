use std::env;
use url::Url;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const BASE_URL_VAR: &str = "PREDICT_API_BASE_URL";
const API_KEY_VAR: &str = "PREDICT_API_KEY";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Missing configuration: {0}")]
  MissingVar(&'static str),

  #[error("Invalid {0}: {1}")]
  InvalidUrl(&'static str, url::ParseError),
}

/// ---------------------------------------------------------------------------
/// Prediction Service Configuration
/// ---------------------------------------------------------------------------

/// Where and how to reach the prediction service.
///
/// The base URL is normalized to end with a slash so endpoint paths join
/// below it instead of replacing the final path segment.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
  pub base_url: Url,
  pub api_key: Option<String>,
}

impl PredictorConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let mut raw = env::var(BASE_URL_VAR).map_err(|_| ConfigError::MissingVar(BASE_URL_VAR))?;
    if !raw.ends_with('/') {
      raw.push('/');
    }

    let base_url = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(BASE_URL_VAR, e))?;

    let api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());

    Ok(Self { base_url, api_key })
  }

  /// Resolve an endpoint path against the configured base URL.
  pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
    self.base_url.join(path)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_from_env_requires_base_url() {
    temp_env::with_var(BASE_URL_VAR, None::<&str>, || {
      let result = PredictorConfig::from_env();
      assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    });
  }

  #[test]
  #[serial]
  fn test_from_env_normalizes_trailing_slash() {
    temp_env::with_vars(
      [
        (BASE_URL_VAR, Some("http://localhost:8000/api")),
        (API_KEY_VAR, None),
      ],
      || {
        let config = PredictorConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/api/");

        let endpoint = config.endpoint("model/predict").unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8000/api/model/predict");
      },
    );
  }

  #[test]
  #[serial]
  fn test_from_env_rejects_invalid_url() {
    temp_env::with_var(BASE_URL_VAR, Some("not a url"), || {
      let result = PredictorConfig::from_env();
      assert!(matches!(result, Err(ConfigError::InvalidUrl(_, _))));
    });
  }

  #[test]
  #[serial]
  fn test_api_key_is_optional_and_blank_is_ignored() {
    temp_env::with_vars(
      [
        (BASE_URL_VAR, Some("http://localhost:8000")),
        (API_KEY_VAR, Some("")),
      ],
      || {
        let config = PredictorConfig::from_env().unwrap();
        assert!(config.api_key.is_none());
      },
    );

    temp_env::with_vars(
      [
        (BASE_URL_VAR, Some("http://localhost:8000")),
        (API_KEY_VAR, Some("secret")),
      ],
      || {
        let config = PredictorConfig::from_env().unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
      },
    );
  }
}
