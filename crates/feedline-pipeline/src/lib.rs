//! Activity feed transformation pipeline.
//!
//! Converts a raw, paginated stream of heterogeneous activity events into a
//! display-ready ordered sequence. Six pure stages, composed left to right
//! with no feedback loop:
//!
//! 1. [`enrich::resolve_statuses`] — decorate status changes with resolved
//!    status metadata.
//! 2. [`relations::filter_relations`] — drop cross-entity relation
//!    references for configured entity types.
//! 3. [`sort::sort_chronological`] — stable sort, oldest first.
//! 4. [`merge::merge_similar`] — collapse consecutive same-type same-author
//!    runs, suppressing net no-ops.
//! 5. [`group::group_minor`] — cluster long runs of minor activities into
//!    group items.
//! 6. [`versions::group_versions`] — batch consecutive version publishes by
//!    author within a time window.
//!
//! Every stage is a pure function of its input; re-running the pipeline on
//! identical input yields a structurally equal result, so callers may
//! memoize freely.

pub mod enrich;
pub mod group;
pub mod merge;
pub mod options;
pub mod relations;
pub mod sort;
pub mod versions;

pub use options::PipelineOptions;

use feedline_core::{Activity, EntityType, FeedItem, ProjectInfo};
use tracing::debug;

/// Run the full pipeline over an already-fetched activity list.
///
/// `project_info` is optional; without it status enrichment is skipped.
/// `entity_type` identifies the entity the feed is attached to and only
/// affects relation filtering.
#[must_use]
pub fn transform_activities(
    activities: Vec<Activity>,
    project_info: Option<&ProjectInfo>,
    entity_type: &EntityType,
    opts: &PipelineOptions,
) -> Vec<FeedItem> {
    let input_len = activities.len();

    let enriched = enrich::resolve_statuses(activities, project_info);
    let filtered = relations::filter_relations(enriched, &opts.relation_excluded, entity_type);
    let filtered_len = filtered.len();
    let sorted = sort::sort_chronological(filtered);
    let merged = merge::merge_similar(sorted, &opts.merge_type);
    let merged_len = merged.len();
    let grouped = group::group_minor(merged, &opts.minor_types);
    let feed = versions::group_versions(grouped, opts.version_window_minutes);

    debug!(
        input = input_len,
        after_filter = filtered_len,
        after_merge = merged_len,
        output = feed.len(),
        entity_type = %entity_type,
        "transformed activity feed"
    );

    feed
}
