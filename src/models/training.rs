use serde::{Deserialize, Serialize};

/// Which of the two form configurations is active.
///
/// Each variant renders a distinct field set and targets its own prediction
/// endpoint. The active variant is explicit state passed through the command
/// layer, never inferred from ambient flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  Simple,
  Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
  Male,
  Female,
}

impl Gender {
  /// Parse the wire string, falling back to the form default.
  pub fn from_choice(value: &str) -> Self {
    match value {
      "female" => Gender::Female,
      _ => Gender::Male,
    }
  }
}

/// Request body for the simple model endpoint (model/predict)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingInput {
  pub km4week: f64,
  pub sp4week: f64,
  pub cross_training: bool,
  pub time: f64,
}

/// Request body for the advanced model endpoint (model/predict2).
/// Field names follow the service's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedTrainingInput {
  #[serde(rename = "GENDER")]
  pub gender: Gender,
  #[serde(rename = "AGE")]
  pub age: f64,
  #[serde(rename = "ATMOS_PRESS_mbar")]
  pub atmos_pressure_mbar: f64,
  #[serde(rename = "AVG_TEMP_C")]
  pub avg_temp_c: f64,
  pub time: f64,
}

/// Tagged union of the two input shapes.
///
/// The submission client picks the endpoint by matching on the tag, so the
/// target is always an explicit function of the variant the caller built the
/// payload from, never a guess based on payload shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingPayload {
  Simple(TrainingInput),
  Advanced(AdvancedTrainingInput),
}

impl TrainingPayload {
  pub fn variant(&self) -> Variant {
    match self {
      TrainingPayload::Simple(_) => Variant::Simple,
      TrainingPayload::Advanced(_) => Variant::Advanced,
    }
  }
}
