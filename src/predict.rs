//! Client for the remote marathon prediction service.
//!
//! One request per call: no retry, no timeout, no cancellation. Failures
//! surface as [`PredictError`] and the caller decides how to present them.

use crate::config::{ConfigError, PredictorConfig};
use crate::models::{PredictionResult, TrainingPayload};
use reqwest::Client;
use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Endpoints
/// ---------------------------------------------------------------------------

const SIMPLE_ENDPOINT: &str = "model/predict";
const ADVANCED_ENDPOINT: &str = "model/predict2";

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
  #[error("Configuration error: {0}")]
  Config(#[from] ConfigError),

  #[error("Invalid endpoint URL: {0}")]
  Endpoint(String),

  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("Prediction service error: {0}")]
  Api(String),

  #[error("Failed to parse prediction: {0}")]
  Parse(String),
}

impl Serialize for PredictError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Prediction Client
/// ---------------------------------------------------------------------------

pub struct PredictClient {
  client: Client,
  config: PredictorConfig,
}

impl PredictClient {
  pub fn new(config: PredictorConfig) -> Self {
    Self {
      client: Client::new(),
      config,
    }
  }

  /// Create a client configured from the environment.
  pub fn from_env() -> Result<Self, PredictError> {
    Ok(Self::new(PredictorConfig::from_env()?))
  }

  /// Submit training data and return the service's prediction.
  ///
  /// The endpoint is selected by the payload's tag, so which model answers
  /// is an explicit function of the variant the caller submitted.
  pub async fn predict(&self, payload: &TrainingPayload) -> Result<PredictionResult, PredictError> {
    match payload {
      TrainingPayload::Simple(input) => self.post(SIMPLE_ENDPOINT, input).await,
      TrainingPayload::Advanced(input) => self.post(ADVANCED_ENDPOINT, input).await,
    }
  }

  async fn post<T: Serialize>(
    &self,
    path: &str,
    body: &T,
  ) -> Result<PredictionResult, PredictError> {
    let url = self
      .config
      .endpoint(path)
      .map_err(|e| PredictError::Endpoint(e.to_string()))?;

    let mut request = self.client.post(url).json(body);
    if let Some(key) = &self.config.api_key {
      request = request.header("Authorization", format!("Bearer {}", key));
    }

    let response = request.send().await?;

    let status = response.status();
    let text = response.text().await?;

    // 4xx and 5xx are not distinguished: both end up as the same generic
    // notice in the UI
    if !status.is_success() {
      return Err(PredictError::Api(format!("HTTP {}: {}", status, text)));
    }

    serde_json::from_str(&text).map_err(|e| PredictError::Parse(e.to_string()))
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
