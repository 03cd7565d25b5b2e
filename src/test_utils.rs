//! Test utilities and mock-data factories shared across module tests.

use crate::config::PredictorConfig;
use crate::models::{AdvancedTrainingInput, Gender, PredictionResult, TrainingInput};
use url::Url;

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A plausible simple-variant submission.
pub fn mock_training_input() -> TrainingInput {
  TrainingInput {
    km4week: 42.0,
    sp4week: 11.5,
    cross_training: true,
    time: 14400.0,
  }
}

/// A plausible advanced-variant submission.
pub fn mock_advanced_input() -> AdvancedTrainingInput {
  AdvancedTrainingInput {
    gender: Gender::Female,
    age: 31.0,
    atmos_pressure_mbar: 1013.0,
    avg_temp_c: 20.0,
    time: 14400.0,
  }
}

/// The prediction that [`prediction_response_body`] deserializes to.
pub fn mock_prediction() -> PredictionResult {
  PredictionResult {
    predicted_time: "3:53:21".to_string(),
    category: "Intermediate".to_string(),
  }
}

/// A raw service response body in the documented wire shape.
pub fn prediction_response_body() -> &'static str {
  r#"{"time": "3:53:21", "category": "Intermediate"}"#
}

/// ---------------------------------------------------------------------------
/// Configuration Helpers
/// ---------------------------------------------------------------------------

/// Build a config pointing at a test server (e.g. a mockito URL).
pub fn test_config(base: &str) -> PredictorConfig {
  let mut raw = base.to_string();
  if !raw.ends_with('/') {
    raw.push('/');
  }

  PredictorConfig {
    base_url: Url::parse(&raw).expect("test base URL should parse"),
    api_key: None,
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let input = mock_training_input();
    assert!(input.km4week <= 150.0);
    assert!(input.sp4week <= 90.0);

    let advanced = mock_advanced_input();
    assert!((800.0..=1100.0).contains(&advanced.atmos_pressure_mbar));

    let prediction: PredictionResult =
      serde_json::from_str(prediction_response_body()).expect("response body should parse");
    assert_eq!(prediction, mock_prediction());
  }

  #[test]
  fn test_test_config_normalizes_base_url() {
    let config = test_config("http://127.0.0.1:1234");
    assert_eq!(
      config.endpoint("model/predict").unwrap().as_str(),
      "http://127.0.0.1:1234/model/predict"
    );
  }
}
