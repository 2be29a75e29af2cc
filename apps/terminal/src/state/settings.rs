//! # Settings State
//!
//! The AI model settings for this screen. Edits live for the session only.

use std::sync::{Arc, Mutex};

use tillbook_core::AiSettings;

use crate::error::ApiError;

/// Shared AI settings, starting from the factory defaults.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    settings: Arc<Mutex<AiSettings>>,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the settings.
    pub fn with_settings<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&AiSettings) -> R,
    {
        let settings = self
            .settings
            .lock()
            .map_err(|_| ApiError::internal("Settings lock poisoned"))?;
        Ok(f(&settings))
    }

    /// Executes a function with write access to the settings.
    pub fn with_settings_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut AiSettings) -> R,
    {
        let mut settings = self
            .settings
            .lock()
            .map_err(|_| ApiError::internal("Settings lock poisoned"))?;
        Ok(f(&mut settings))
    }
}
