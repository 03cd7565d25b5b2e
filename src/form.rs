//! Form session state: current values, per-field errors, and submission
//! status for the active variant.
//!
//! The session is the single owner of form state. Commands mutate it behind
//! the managed [`AppState`] mutex and hand the frontend a [`FormSnapshot`]
//! to render; the frontend never holds state of its own.

use crate::models::{
  AdvancedTrainingInput, Gender, PredictionResult, TrainingInput, TrainingPayload, Variant,
};
use crate::schema::{self, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Generic failure notice shown to the user. Transport and service failures
/// are deliberately indistinguishable here.
pub const FAILURE_NOTICE: &str = "An error occurred, please try again later";

/// Application state managed by Tauri.
pub struct AppState {
  pub form: Mutex<FormSession>,
}

/// ---------------------------------------------------------------------------
/// Submission Status
/// ---------------------------------------------------------------------------

/// Display state: idle, or the outcome of the last completed submission.
/// Success/Failure return to Idle on the next field edit. Whether a request
/// is currently outstanding is tracked separately, see [`FormSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
  Idle,
  Success(PredictionResult),
  Failure,
}

/// Why a submit attempt did not start a request.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
  /// A request is already outstanding; the attempt is a no-op.
  InFlight,
  /// At least one field is invalid.
  Validation,
}

/// A submission handed out by [`FormSession::begin_submit`]. The token must
/// be passed back when the request resolves so the session can tell the
/// outcome of the current request from that of a superseded one.
#[derive(Debug, PartialEq)]
pub struct PendingSubmit {
  pub payload: TrainingPayload,
  pub token: u64,
}

/// The outstanding request, if any. Survives a variant switch so the
/// in-flight guard keeps holding, but loses its display claim: a form that
/// was reset must not render the outcome of a request it no longer owns.
#[derive(Debug, Clone, Copy)]
struct Pending {
  token: u64,
  display: bool,
}

/// ---------------------------------------------------------------------------
/// Form Session
/// ---------------------------------------------------------------------------

pub struct FormSession {
  variant: Variant,
  values: BTreeMap<&'static str, FieldValue>,
  errors: BTreeMap<&'static str, String>,
  status: SubmitStatus,
  next_token: u64,
  pending: Option<Pending>,
}

impl FormSession {
  /// Create a session for the given variant with every field at its
  /// schema default.
  pub fn new(variant: Variant) -> Self {
    let values = schema::fields_for(variant)
      .iter()
      .map(|spec| (spec.name, spec.default_value()))
      .collect();

    Self {
      variant,
      values,
      errors: BTreeMap::new(),
      status: SubmitStatus::Idle,
      next_token: 0,
      pending: None,
    }
  }

  pub fn variant(&self) -> Variant {
    self.variant
  }

  /// Switch the active variant. All fields reset to defaults and any
  /// displayed result is cleared. Re-selecting the current variant leaves
  /// the session untouched.
  ///
  /// An outstanding request is carried over with its display claim revoked:
  /// it still blocks resubmission until it resolves, but its outcome will
  /// be dropped instead of rendered on the fresh form.
  pub fn set_variant(&mut self, variant: Variant) {
    if variant == self.variant {
      return;
    }

    let next_token = self.next_token;
    let pending = self
      .pending
      .map(|p| Pending { display: false, ..p });

    *self = FormSession::new(variant);
    self.next_token = next_token;
    self.pending = pending;
  }

  /// Apply raw frontend input to a field. Coercion failures are recorded as
  /// the field's inline error and leave the previous value in place; the
  /// command still succeeds because the error is part of form state.
  ///
  /// Any displayed result returns to idle on edit.
  pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), String> {
    let spec = schema::field(self.variant, name)
      .ok_or_else(|| format!("Unknown field for the active form: {}", name))?;

    if matches!(self.status, SubmitStatus::Success(_) | SubmitStatus::Failure) {
      self.status = SubmitStatus::Idle;
    }

    match spec.coerce(raw) {
      Ok(value) => {
        self.values.insert(spec.name, value);
        self.errors.remove(spec.name);
      }
      Err(message) => {
        self.errors.insert(spec.name, message);
      }
    }

    Ok(())
  }

  /// Begin a submission: returns the payload to send plus its token, or the
  /// reason the attempt is blocked. While a request is outstanding this is
  /// a no-op guard, not a queue.
  pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitBlocked> {
    if self.pending.is_some() {
      return Err(SubmitBlocked::InFlight);
    }
    if !self.errors.is_empty() {
      return Err(SubmitBlocked::Validation);
    }

    let token = self.next_token;
    self.next_token += 1;
    self.pending = Some(Pending {
      token,
      display: true,
    });

    Ok(PendingSubmit {
      payload: self.payload(),
      token,
    })
  }

  /// Record a successful submission. Outcomes whose token does not match
  /// the outstanding request, or whose display claim was revoked by a
  /// variant switch, release the guard without touching the display.
  pub fn complete_success(&mut self, token: u64, result: PredictionResult) {
    if let Some(displayed) = self.resolve(token) {
      if displayed {
        self.status = SubmitStatus::Success(result);
      }
    }
  }

  /// Record a failed submission. Any previously displayed prediction is
  /// discarded along with it. Stale outcomes are dropped as in
  /// [`Self::complete_success`].
  pub fn complete_failure(&mut self, token: u64) {
    if let Some(displayed) = self.resolve(token) {
      if displayed {
        self.status = SubmitStatus::Failure;
      }
    }
  }

  /// Clear the outstanding request if `token` matches it. Returns whether
  /// the outcome may be displayed, or `None` for a token the session does
  /// not recognize.
  fn resolve(&mut self, token: u64) -> Option<bool> {
    match self.pending {
      Some(pending) if pending.token == token => {
        self.pending = None;
        Some(pending.display)
      }
      _ => None,
    }
  }

  /// Build the request payload for the active variant. The tagged result is
  /// what makes endpoint selection explicit downstream.
  fn payload(&self) -> TrainingPayload {
    match self.variant {
      Variant::Simple => TrainingPayload::Simple(TrainingInput {
        km4week: self.number("km4week"),
        sp4week: self.number("sp4week"),
        cross_training: self.flag("cross_training"),
        time: self.number("time"),
      }),
      Variant::Advanced => TrainingPayload::Advanced(AdvancedTrainingInput {
        gender: Gender::from_choice(self.choice("gender")),
        age: self.number("age"),
        atmos_pressure_mbar: self.number("atmos_pressure_mbar"),
        avg_temp_c: self.number("avg_temp_c"),
        time: self.number("time"),
      }),
    }
  }

  // Values are seeded from the schema at construction, so the fallback arms
  // only cover a field/variant mismatch.

  fn number(&self, name: &str) -> f64 {
    match self.values.get(name) {
      Some(FieldValue::Number(n)) => *n,
      _ => 0.0,
    }
  }

  fn flag(&self, name: &str) -> bool {
    match self.values.get(name) {
      Some(FieldValue::Flag(b)) => *b,
      _ => false,
    }
  }

  fn choice(&self, name: &str) -> &str {
    match self.values.get(name) {
      Some(FieldValue::Choice(s)) => s,
      _ => "",
    }
  }

  /// Render the session for the frontend. `result` and `notice` are only
  /// populated in their respective terminal display states, so the frontend
  /// renders nothing for them the rest of the time.
  pub fn snapshot(&self) -> FormSnapshot {
    let (result, notice) = match &self.status {
      SubmitStatus::Success(prediction) => (Some(prediction.clone()), None),
      SubmitStatus::Failure => (None, Some(FAILURE_NOTICE.to_string())),
      SubmitStatus::Idle => (None, None),
    };

    FormSnapshot {
      variant: self.variant,
      values: self.values.clone(),
      errors: self.errors.clone(),
      submitting: self.pending.is_some(),
      result,
      notice,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Form Snapshot (what the frontend renders)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
  pub variant: Variant,
  pub values: BTreeMap<&'static str, FieldValue>,
  pub errors: BTreeMap<&'static str, String>,
  pub submitting: bool,
  pub result: Option<PredictionResult>,
  pub notice: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
