use tracing::{error, info};

use crate::adapters::http::app_state::AppState;

/// Startup work done once before serving: apply the stored debug mode,
/// make sure a site secret exists and attempt the pending registration.
///
/// Failures are logged; the service still starts.
pub async fn run_startup_activation(app_state: &AppState) {
    match app_state.settings_use_cases.apply_debug_mode().await {
        Ok(enabled) => info!(debug_mode = enabled, "Log verbosity applied"),
        Err(e) => error!(error = ?e, "Failed to read debug mode"),
    }

    if let Err(e) = app_state.registration_use_cases.activate().await {
        error!(error = ?e, "Activation failed");
        return;
    }

    match app_state.registration_use_cases.auto_register().await {
        Ok(true) => info!("Auto-registration attempted"),
        Ok(false) => {}
        Err(e) => error!(error = ?e, "Auto-registration could not run"),
    }
}
