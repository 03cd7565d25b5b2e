mod commands;
mod config;
mod form;
mod models;
mod predict;
mod schema;
#[cfg(test)]
mod test_utils;

use form::{AppState, FormSession};
use models::Variant;
use std::sync::{Arc, Mutex};
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tauri::Builder::default()
    .setup(|app| {
      // The form starts on the simple variant with every field at default
      let state = Arc::new(AppState {
        form: Mutex::new(FormSession::new(Variant::Simple)),
      });
      app.manage(state);
      println!("Form session ready");
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_form_state,
      commands::form::set_field,
      commands::form::set_variant,
      commands::form::submit_training,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
