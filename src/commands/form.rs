use super::lock_form;
use crate::form::{AppState, FormSnapshot, SubmitBlocked};
use crate::models::Variant;
use crate::predict::PredictClient;
use std::sync::Arc;
use tauri::State;

/// ---------------------------------------------------------------------------
/// Field Edits
/// ---------------------------------------------------------------------------

/// Apply a single field edit and return the updated snapshot. Validation
/// failures land in the snapshot's error map, not in the command error.
#[tauri::command]
pub fn set_field(
  state: State<'_, Arc<AppState>>,
  name: String,
  value: String,
) -> Result<FormSnapshot, String> {
  let mut session = lock_form(&state)?;
  session.set_field(&name, &value)?;
  Ok(session.snapshot())
}

/// ---------------------------------------------------------------------------
/// Variant Switching
/// ---------------------------------------------------------------------------

/// Switch between the simple and advanced forms. Switching resets every
/// field to its default and clears any displayed result.
#[tauri::command]
pub fn set_variant(
  state: State<'_, Arc<AppState>>,
  variant: Variant,
) -> Result<FormSnapshot, String> {
  let mut session = lock_form(&state)?;
  session.set_variant(variant);
  Ok(session.snapshot())
}

/// ---------------------------------------------------------------------------
/// Submission
/// ---------------------------------------------------------------------------

/// Submit the current form to the prediction service.
///
/// Blocked submits (request already in flight, or validation errors
/// outstanding) are no-ops that just return the current snapshot.
#[tauri::command]
pub async fn submit_training(state: State<'_, Arc<AppState>>) -> Result<FormSnapshot, String> {
  let pending = {
    let mut session = lock_form(&state)?;
    match session.begin_submit() {
      Ok(pending) => pending,
      Err(SubmitBlocked::InFlight) | Err(SubmitBlocked::Validation) => {
        return Ok(session.snapshot());
      }
    }
  };

  // The lock is released while the request is outstanding; the pending
  // token in the session is what blocks concurrent resubmission.
  let outcome = match PredictClient::from_env() {
    Ok(client) => client.predict(&pending.payload).await,
    Err(e) => Err(e),
  };

  // The session decides whether the outcome still belongs to the current
  // form: a variant switch in the meantime revokes its display claim.
  let mut session = lock_form(&state)?;
  match outcome {
    Ok(result) => {
      println!(
        "Prediction received: {} ({})",
        result.predicted_time, result.category
      );
      session.complete_success(pending.token, result);
    }
    Err(e) => {
      eprintln!("Prediction request failed: {}", e);
      session.complete_failure(pending.token);
    }
  }

  Ok(session.snapshot())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
