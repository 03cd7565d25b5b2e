//! Declarative field schemas for the two form variants.
//!
//! Each variant is described by a flat list of [`FieldSpec`] entries. The
//! form session and the frontend are both driven by these lists, so adding a
//! field means adding one entry here rather than touching every layer.

use crate::models::Variant;
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Field Values
/// ---------------------------------------------------------------------------

/// A coerced, typed form value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
  Number(f64),
  Flag(bool),
  Choice(String),
}

/// ---------------------------------------------------------------------------
/// Field Specifications
/// ---------------------------------------------------------------------------

/// What a single form field accepts, with its default value.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
  /// Numeric input with inclusive bounds.
  Number {
    min: f64,
    max: f64,
    default: f64,
    too_low: &'static str,
    too_high: &'static str,
  },
  /// Boolean checkbox.
  Flag { default: bool },
  /// Enumerated choice, stored as its wire string.
  Choice {
    options: &'static [&'static str],
    default: &'static str,
  },
}

/// One entry in a variant's field schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
  pub name: &'static str,
  pub kind: FieldKind,
}

impl FieldSpec {
  pub fn default_value(&self) -> FieldValue {
    match self.kind {
      FieldKind::Number { default, .. } => FieldValue::Number(default),
      FieldKind::Flag { default } => FieldValue::Flag(default),
      FieldKind::Choice { default, .. } => FieldValue::Choice(default.to_string()),
    }
  }

  /// Coerce raw frontend input to a typed value, or explain why it is
  /// invalid. Bounds are inclusive. Blank input means "unset" and reverts
  /// the field to its default.
  pub fn coerce(&self, raw: &str) -> Result<FieldValue, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Ok(self.default_value());
    }

    match self.kind {
      FieldKind::Number {
        min,
        max,
        too_low,
        too_high,
        ..
      } => {
        let value: f64 = trimmed.parse().map_err(|_| "Must be a number".to_string())?;
        // "NaN" and "inf" parse successfully, reject them here
        if !value.is_finite() {
          return Err("Must be a number".to_string());
        }
        if value < min {
          return Err(too_low.to_string());
        }
        if value > max {
          return Err(too_high.to_string());
        }
        Ok(FieldValue::Number(value))
      }
      FieldKind::Flag { .. } => match trimmed {
        "true" => Ok(FieldValue::Flag(true)),
        "false" => Ok(FieldValue::Flag(false)),
        _ => Err("Must be true or false".to_string()),
      },
      FieldKind::Choice { options, .. } => {
        if options.contains(&trimmed) {
          Ok(FieldValue::Choice(trimmed.to_string()))
        } else {
          Err(format!("Must be one of: {}", options.join(", ")))
        }
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Variant Schemas
/// ---------------------------------------------------------------------------

pub const SIMPLE_FIELDS: &[FieldSpec] = &[
  FieldSpec {
    name: "km4week",
    kind: FieldKind::Number {
      min: 0.0,
      max: 150.0,
      default: 0.0,
      too_low: "Must be a positive number",
      too_high: "Seems too high, are you sure?",
    },
  },
  FieldSpec {
    name: "sp4week",
    kind: FieldKind::Number {
      min: 0.0,
      max: 90.0,
      default: 0.0,
      too_low: "Must be a positive number",
      too_high: "Seems too high, are you sure?",
    },
  },
  FieldSpec {
    name: "cross_training",
    kind: FieldKind::Flag { default: false },
  },
  FieldSpec {
    name: "time",
    kind: FieldKind::Number {
      min: 0.0,
      max: f64::INFINITY,
      default: 0.0,
      too_low: "Must be a non-negative number",
      too_high: "Seems too high, are you sure?",
    },
  },
];

pub const ADVANCED_FIELDS: &[FieldSpec] = &[
  FieldSpec {
    name: "gender",
    kind: FieldKind::Choice {
      options: &["male", "female"],
      default: "male",
    },
  },
  FieldSpec {
    name: "age",
    kind: FieldKind::Number {
      min: 0.0,
      max: f64::INFINITY,
      default: 0.0,
      too_low: "Must be a non-negative number",
      too_high: "Seems too high, are you sure?",
    },
  },
  FieldSpec {
    name: "atmos_pressure_mbar",
    kind: FieldKind::Number {
      min: 800.0,
      max: 1100.0,
      default: 1013.0,
      too_low: "Unlikely atmospheric pressure",
      too_high: "Unlikely atmospheric pressure",
    },
  },
  FieldSpec {
    name: "avg_temp_c",
    kind: FieldKind::Number {
      min: -30.0,
      max: 50.0,
      default: 20.0,
      too_low: "Too low",
      too_high: "Too high",
    },
  },
  FieldSpec {
    name: "time",
    kind: FieldKind::Number {
      min: 0.0,
      max: f64::INFINITY,
      default: 0.0,
      too_low: "Must be a non-negative number",
      too_high: "Seems too high, are you sure?",
    },
  },
];

pub fn fields_for(variant: Variant) -> &'static [FieldSpec] {
  match variant {
    Variant::Simple => SIMPLE_FIELDS,
    Variant::Advanced => ADVANCED_FIELDS,
  }
}

pub fn field(variant: Variant, name: &str) -> Option<&'static FieldSpec> {
  fields_for(variant).iter().find(|spec| spec.name == name)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  fn simple_field(name: &str) -> &'static FieldSpec {
    field(Variant::Simple, name).expect("field should exist")
  }

  fn advanced_field(name: &str) -> &'static FieldSpec {
    field(Variant::Advanced, name).expect("field should exist")
  }

  #[test]
  fn test_variant_schemas_list_expected_fields() {
    let simple: Vec<&str> = SIMPLE_FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(simple, vec!["km4week", "sp4week", "cross_training", "time"]);

    let advanced: Vec<&str> = ADVANCED_FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(
      advanced,
      vec!["gender", "age", "atmos_pressure_mbar", "avg_temp_c", "time"]
    );
  }

  #[test]
  fn test_in_range_values_coerce() {
    assert_eq!(
      simple_field("km4week").coerce("42.5"),
      Ok(FieldValue::Number(42.5))
    );
    assert_eq!(
      simple_field("sp4week").coerce("11"),
      Ok(FieldValue::Number(11.0))
    );
    assert_eq!(
      simple_field("cross_training").coerce("true"),
      Ok(FieldValue::Flag(true))
    );
    assert_eq!(
      advanced_field("gender").coerce("female"),
      Ok(FieldValue::Choice("female".to_string()))
    );
  }

  #[test]
  fn test_bounds_are_inclusive() {
    assert_eq!(
      simple_field("km4week").coerce("150"),
      Ok(FieldValue::Number(150.0))
    );
    assert_eq!(
      simple_field("km4week").coerce("0"),
      Ok(FieldValue::Number(0.0))
    );
    assert_eq!(
      advanced_field("avg_temp_c").coerce("-30"),
      Ok(FieldValue::Number(-30.0))
    );
  }

  #[test]
  fn test_km4week_over_150_is_too_high() {
    let err = simple_field("km4week").coerce("200").unwrap_err();
    assert_eq!(err, "Seems too high, are you sure?");
  }

  #[test]
  fn test_unlikely_atmospheric_pressure_is_rejected() {
    let err = advanced_field("atmos_pressure_mbar").coerce("500").unwrap_err();
    assert_eq!(err, "Unlikely atmospheric pressure");

    let err = advanced_field("atmos_pressure_mbar").coerce("1200").unwrap_err();
    assert_eq!(err, "Unlikely atmospheric pressure");
  }

  #[test]
  fn test_negative_distance_is_rejected() {
    let err = simple_field("km4week").coerce("-5").unwrap_err();
    assert_eq!(err, "Must be a positive number");
  }

  #[test]
  fn test_blank_input_reverts_to_default() {
    assert_eq!(simple_field("km4week").coerce(""), Ok(FieldValue::Number(0.0)));
    assert_eq!(simple_field("time").coerce("   "), Ok(FieldValue::Number(0.0)));
    // Defaults are per-field, not uniformly zero
    assert_eq!(
      advanced_field("atmos_pressure_mbar").coerce(""),
      Ok(FieldValue::Number(1013.0))
    );
    assert_eq!(
      advanced_field("avg_temp_c").coerce(""),
      Ok(FieldValue::Number(20.0))
    );
  }

  #[test]
  fn test_non_numeric_and_non_finite_input_is_rejected() {
    assert!(simple_field("km4week").coerce("abc").is_err());
    assert!(simple_field("km4week").coerce("NaN").is_err());
    assert!(simple_field("km4week").coerce("inf").is_err());
  }

  #[test]
  fn test_invalid_flag_and_choice_are_rejected() {
    assert!(simple_field("cross_training").coerce("yes").is_err());
    assert!(advanced_field("gender").coerce("other").is_err());
  }
}
