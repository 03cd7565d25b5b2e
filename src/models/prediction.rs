use serde::{Deserialize, Serialize};

/// Prediction returned by the remote service. Never constructed locally;
/// this type only ever deserializes a service response.
///
/// The service responds with `{"time": ..., "category": ...}`; some
/// deployments name the field `predictedTime` instead, so both are accepted.
/// Toward the frontend the field is always serialized as `predictedTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
  #[serde(
    rename(serialize = "predictedTime", deserialize = "time"),
    alias = "predictedTime"
  )]
  pub predicted_time: String,
  pub category: String,
}
