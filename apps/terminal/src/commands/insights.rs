//! # Insights Commands

use tillbook_core::{Impact, Insight};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Lists insights, optionally only those with the given impact.
pub fn list_insights(state: &AppState, impact: Option<Impact>) -> Result<Vec<Insight>, ApiError> {
    debug!(?impact, "list_insights command");
    Ok(state
        .catalog
        .insights
        .filter(impact)
        .into_iter()
        .cloned()
        .collect())
}
