pub mod form;

use crate::form::{AppState, FormSession, FormSnapshot};
use std::sync::{Arc, MutexGuard};
use tauri::State;

/// Lock the form session, turning a poisoned mutex into a command error.
pub(crate) fn lock_form<'a>(
  state: &'a State<'_, Arc<AppState>>,
) -> Result<MutexGuard<'a, FormSession>, String> {
  state
    .form
    .lock()
    .map_err(|e| format!("Form state unavailable: {}", e))
}

#[tauri::command]
pub fn get_form_state(state: State<'_, Arc<AppState>>) -> Result<FormSnapshot, String> {
  Ok(lock_form(&state)?.snapshot())
}
