//! Shared helpers for command handlers.

use std::path::Path;

use chrono::{DateTime, Utc};

use amc_core::State;

use crate::error::CliError;

/// Read a state snapshot in the active mode service's JSON shape.
pub fn read_state(path: &Path) -> Result<State, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    let raw: amc_api::types::State = serde_json::from_str(&contents)?;
    Ok(State::from(raw))
}

/// `--now` as a timestamp, or the current time.
pub fn resolve_now(epoch: Option<i64>) -> Result<DateTime<Utc>, CliError> {
    match epoch {
        None => Ok(Utc::now()),
        Some(secs) => DateTime::from_timestamp(secs, 0).ok_or_else(|| CliError::Validation {
            field: "now".into(),
            reason: format!("{secs} is out of range"),
        }),
    }
}

pub fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.into()
}
