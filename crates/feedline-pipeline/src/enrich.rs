//! Status enricher: stage 1.
//!
//! Decorates `status.change` activities with `old_status`/`new_status`
//! resolved by name from the project status catalog. The found status
//! record is overlaid with the literal name from the payload, so a name
//! with no catalog match still yields a name-only reference. Without
//! project metadata the stage is a pass-through.
//!
//! The stage is idempotent: enrichment is recomputed from `activity_data`,
//! never from a previous pass's output.

use feedline_core::{Activity, ActivityType, ProjectInfo, StatusRef};

/// Resolve status metadata for every `status.change` activity.
///
/// Same length and order as the input; non-status activities are untouched.
#[must_use]
pub fn resolve_statuses(
    activities: Vec<Activity>,
    project_info: Option<&ProjectInfo>,
) -> Vec<Activity> {
    let Some(project) = project_info else {
        return activities;
    };

    activities
        .into_iter()
        .map(|mut activity| {
            if activity.activity_type == ActivityType::StatusChange {
                let old_name = activity.activity_data.old_value.clone();
                let new_name = activity.activity_data.new_value.clone();
                let old_found = old_name.as_deref().and_then(|name| project.status(name));
                let new_found = new_name.as_deref().and_then(|name| project.status(name));
                activity.old_status = Some(StatusRef::resolved(old_found, old_name));
                activity.new_status = Some(StatusRef::resolved(new_found, new_name));
            }
            activity
        })
        .collect()
}
