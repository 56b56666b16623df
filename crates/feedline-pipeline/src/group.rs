//! Minor-activity grouper: stage 5.
//!
//! Accumulates consecutive runs of low-significance activity types and
//! collapses any run longer than two into a single group item. The very
//! first run of the sequence keeps its head standalone and groups only the
//! tail, so the feed never hides its edge activity inside a collapsed
//! group. Runs of one or two activities stay standalone.
//!
//! Group ids are `group-<n>` with `n` from a counter scoped to this
//! invocation. They are deterministic for identical input but not stable
//! across partial re-renders or overlapping pagination slices.

use feedline_core::{Activity, ActivityGroup, ActivityType, FeedItem};

/// Runs strictly longer than this collapse into a group.
const MAX_STANDALONE_RUN: usize = 2;

/// Cluster consecutive runs of minor activities into group items.
#[must_use]
pub fn group_minor(activities: Vec<Activity>, minor_types: &[ActivityType]) -> Vec<FeedItem> {
    let mut out: Vec<FeedItem> = Vec::with_capacity(activities.len());
    let mut run: Vec<Activity> = Vec::new();
    let mut next_group_index = 0usize;

    for activity in activities {
        if minor_types.contains(&activity.activity_type) {
            run.push(activity);
        } else {
            flush_run(&mut out, &mut run, &mut next_group_index);
            out.push(FeedItem::Activity(activity));
        }
    }
    flush_run(&mut out, &mut run, &mut next_group_index);

    out
}

/// Emit the pending run and reset it.
fn flush_run(out: &mut Vec<FeedItem>, run: &mut Vec<Activity>, next_group_index: &mut usize) {
    let mut items = std::mem::take(run);
    if items.len() > MAX_STANDALONE_RUN {
        // First run of the whole sequence: keep the head visible.
        if out.is_empty() {
            let head = items.remove(0);
            out.push(FeedItem::Activity(head));
        }
        out.push(FeedItem::Group(ActivityGroup::new(*next_group_index, items)));
        *next_group_index += 1;
    } else {
        out.extend(items.into_iter().map(FeedItem::Activity));
    }
}
