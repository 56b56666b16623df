//! Similar-activity merger: stage 4.
//!
//! Collapses a consecutive run of same-type, same-author activities into
//! one representative record. Scanning the chronologically sorted input,
//! the open accumulator keeps the earliest activity's new side
//! (`new_value`/`new_status`) while each later member of the run overwrites
//! the old side (`old_value`/`old_status`) and the pagination markers, so
//! the merged record spans the whole run and "load more" can resume from
//! the most recent cursor.
//!
//! A run whose folded payload nets to no change (`old_value == new_value`)
//! is dropped entirely: a status change that nets to no change is noise.
//! Missing payload values compare unequal, so a run lacking data is never
//! suppressed.

use feedline_core::{Activity, ActivityType};

/// Collapse consecutive same-author runs of `target`-typed activities.
#[must_use]
pub fn merge_similar(activities: Vec<Activity>, target: &ActivityType) -> Vec<Activity> {
    let mut merged: Vec<Activity> = Vec::with_capacity(activities.len());
    // Open accumulator for the current run; None outside a run.
    let mut open: Option<Activity> = None;

    for activity in activities {
        if activity.activity_type == *target {
            match open.take() {
                None => open = Some(activity),
                Some(mut run) if run.same_author(&activity) => {
                    run.old_status = activity.old_status;
                    run.activity_data.old_value = activity.activity_data.old_value;
                    run.has_previous_page = activity.has_previous_page;
                    run.cursor = activity.cursor;
                    open = Some(run);
                }
                Some(run) => {
                    push_unless_noop(&mut merged, run);
                    open = Some(activity);
                }
            }
        } else {
            if let Some(run) = open.take() {
                push_unless_noop(&mut merged, run);
            }
            merged.push(activity);
        }
    }

    // A run still open at end of input. The id guard keeps a run from being
    // emitted twice.
    if let Some(run) = open.take() {
        if !merged.iter().any(|a| a.activity_id == run.activity_id) {
            push_unless_noop(&mut merged, run);
        }
    }

    merged
}

fn push_unless_noop(out: &mut Vec<Activity>, run: Activity) {
    if !run.activity_data.is_net_noop() {
        out.push(run);
    }
}
