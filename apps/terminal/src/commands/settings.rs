//! # Settings Commands
//!
//! ```text
//! settings                                         ──► every model
//! set financial-forecasting confidence-threshold 0.85
//!                                                  ──► the updated parameter
//! reset-settings                                   ──► factory values
//! ```

use tillbook_core::{AiModel, AiParameter, ParameterValue};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Lists every model with its current parameter values.
pub fn get_settings(state: &AppState) -> Result<Vec<AiModel>, ApiError> {
    debug!("get_settings command");
    state.settings.with_settings(|s| s.models().to_vec())
}

/// Sets one parameter after checking it against the parameter's bounds.
///
/// ## Errors
/// - `NOT_FOUND` for an unknown model or parameter
/// - `VALIDATION_ERROR` for a value of the wrong kind, out of range, off
///   the slider step, or not among the options
pub fn set_parameter(
    state: &AppState,
    model_id: &str,
    param_id: &str,
    value: ParameterValue,
) -> Result<AiParameter, ApiError> {
    debug!(model_id, param_id, %value, "set_parameter command");

    let param = state
        .settings
        .with_settings_mut(|s| s.set_parameter(model_id, param_id, value).cloned())??;

    info!(model_id, param_id, value = %param.value, "AI setting changed");
    Ok(param)
}

/// Restores the factory settings.
pub fn reset_settings(state: &AppState) -> Result<Vec<AiModel>, ApiError> {
    debug!("reset_settings command");
    state.settings.with_settings_mut(|s| {
        s.reset();
        s.models().to_vec()
    })
}
