//! Version-publish grouper: stage 6.
//!
//! Clusters consecutive `version.publish` activities into a batch when the
//! candidate has the same author and its `created_at` is within the window
//! of the batch's anchor. The anchor is the batch's first publish, not the
//! immediately preceding one, so a batch spans at most one window from its
//! first publish and never slides indefinitely. Any other item closes the
//! open batch and passes through; a batch still open at end of input is
//! flushed.
//!
//! An unparseable timestamp is never within the window, so a malformed
//! publish starts its own batch instead of being absorbed.

use feedline_core::{Activity, ActivityType, FeedItem, VersionBatch};

/// Batch consecutive version publishes by author and time proximity.
#[must_use]
pub fn group_versions(items: Vec<FeedItem>, window_minutes: i64) -> Vec<FeedItem> {
    let mut out: Vec<FeedItem> = Vec::with_capacity(items.len());
    let mut open: Option<VersionBatch> = None;

    for item in items {
        match item {
            FeedItem::Activity(activity)
                if activity.activity_type == ActivityType::VersionPublish =>
            {
                match open.take() {
                    None => open = Some(VersionBatch::start(activity)),
                    Some(mut batch) if joins_batch(&batch, &activity, window_minutes) => {
                        batch.push(&activity);
                        open = Some(batch);
                    }
                    Some(batch) => {
                        out.push(FeedItem::VersionBatch(batch));
                        open = Some(VersionBatch::start(activity));
                    }
                }
            }
            other => {
                if let Some(batch) = open.take() {
                    out.push(FeedItem::VersionBatch(batch));
                }
                out.push(other);
            }
        }
    }

    if let Some(batch) = open.take() {
        out.push(FeedItem::VersionBatch(batch));
    }

    out
}

/// Same author, and within the window measured from the batch anchor.
fn joins_batch(batch: &VersionBatch, candidate: &Activity, window_minutes: i64) -> bool {
    batch.activity.same_author(candidate)
        && batch
            .activity
            .created_at
            .minutes_between(&candidate.created_at)
            .is_some_and(|minutes| minutes <= window_minutes)
}
