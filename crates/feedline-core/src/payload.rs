//! Decoding helpers for activity-service payloads.
//!
//! The fetch service delivers either a bare JSON array of activities or an
//! object wrapping it in an `activities` field; both shapes are accepted.

use std::path::Path;

use serde::Deserialize;

use crate::error::FeedError;
use crate::model::activity::Activity;
use crate::model::project::ProjectInfo;

#[derive(Deserialize)]
#[serde(untagged)]
enum ActivitiesPayload {
    List(Vec<Activity>),
    Wrapped { activities: Vec<Activity> },
}

/// Decode an activities payload from a JSON string.
///
/// # Errors
///
/// Returns [`FeedError::Json`] when the payload matches neither accepted
/// shape.
pub fn parse_activities(raw: &str) -> Result<Vec<Activity>, FeedError> {
    let payload: ActivitiesPayload = serde_json::from_str(raw)?;
    Ok(match payload {
        ActivitiesPayload::List(activities)
        | ActivitiesPayload::Wrapped { activities } => activities,
    })
}

/// Read and decode an activities payload from a file.
///
/// # Errors
///
/// Returns [`FeedError::Io`] when the file cannot be read and
/// [`FeedError::Json`] when it cannot be decoded.
pub fn load_activities(path: &Path) -> Result<Vec<Activity>, FeedError> {
    let raw = std::fs::read_to_string(path)?;
    parse_activities(&raw)
}

/// Decode project metadata from a JSON string.
///
/// # Errors
///
/// Returns [`FeedError::Json`] on malformed input.
pub fn parse_project_info(raw: &str) -> Result<ProjectInfo, FeedError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and decode project metadata from a file.
///
/// # Errors
///
/// Returns [`FeedError::Io`] when the file cannot be read and
/// [`FeedError::Json`] when it cannot be decoded.
pub fn load_project_info(path: &Path) -> Result<ProjectInfo, FeedError> {
    let raw = std::fs::read_to_string(path)?;
    parse_project_info(&raw)
}
