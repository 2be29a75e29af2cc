//! # Config Commands

use tracing::debug;

use crate::state::{AppState, ConfigState};

/// Gets the current application configuration.
pub fn get_config(state: &AppState) -> ConfigState {
    debug!("get_config command");
    state.config.clone()
}
