use chrono::{TimeZone, Utc};
use feedline_core::{
    Activity, ActivityData, ActivityType, Origin, Timestamp, VersionContext,
};
use proptest::prelude::*;

/// Blueprint for one generated activity; ids are assigned at build time so
/// they are unique within a feed.
#[derive(Debug, Clone)]
pub struct ActivitySpec {
    pub ty: ActivityType,
    pub author: String,
    pub secs: i64,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

pub fn arb_author() -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        Just("alice".to_string()),
        Just("bob".to_string()),
        Just("carol".to_string()),
    ]
}

pub fn arb_status_name() -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        Just("Ready".to_string()),
        Just("Doing".to_string()),
        Just("Done".to_string()),
    ]
}

/// Activity types that are never dropped by any stage (no `status.change`,
/// so no merge suppression can occur).
pub fn arb_lossless_type() -> impl Strategy<Value = ActivityType> + Clone {
    prop_oneof![
        Just(ActivityType::Comment),
        Just(ActivityType::AssigneeAdd),
        Just(ActivityType::AssigneeRemove),
        Just(ActivityType::VersionPublish),
        Just(ActivityType::Checklist),
        Just(ActivityType::Untyped),
        Just(ActivityType::Other("reviewable.created".to_string())),
    ]
}

/// The full type catalog, including `status.change` (which the merger may
/// legitimately drop as a net no-op).
pub fn arb_any_type() -> impl Strategy<Value = ActivityType> + Clone {
    prop_oneof![
        arb_lossless_type(),
        Just(ActivityType::StatusChange),
    ]
}

pub fn arb_spec(
    ty: impl Strategy<Value = ActivityType> + Clone,
) -> impl Strategy<Value = ActivitySpec> {
    (
        ty,
        arb_author(),
        0i64..7_200,
        arb_status_name(),
        arb_status_name(),
    )
        .prop_map(|(ty, author, secs, old_value, new_value)| ActivitySpec {
            ty,
            author,
            secs,
            old_value: Some(old_value),
            new_value: Some(new_value),
        })
}

pub fn arb_feed(
    ty: impl Strategy<Value = ActivityType> + Clone,
) -> impl Strategy<Value = Vec<ActivitySpec>> {
    prop::collection::vec(arb_spec(ty), 0..40)
}

/// Materialize specs into activities with unique ids.
///
/// Publishes get an `origin.id` of `v-<activityId>` so batch membership
/// stays countable after projection into version entries.
pub fn build_activities(specs: &[ActivitySpec]) -> Vec<Activity> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let id = format!("a-{index}");
            let created = Timestamp::new(
                Utc.timestamp_opt(1_709_280_000 + spec.secs, 0)
                    .unwrap()
                    .to_rfc3339(),
            );
            let is_publish = spec.ty == ActivityType::VersionPublish;
            let is_status = spec.ty == ActivityType::StatusChange;
            Activity {
                activity_id: id.clone(),
                activity_type: spec.ty.clone(),
                created_at: created.clone(),
                updated_at: created,
                author_name: Some(spec.author.clone()),
                origin: is_publish.then(|| Origin {
                    id: Some(format!("v-{id}")),
                    name: Some(format!("{id}-name")),
                    entity_type: None,
                }),
                activity_data: ActivityData {
                    old_value: is_status.then(|| spec.old_value.clone()).flatten(),
                    new_value: is_status.then(|| spec.new_value.clone()).flatten(),
                    context: is_publish.then(VersionContext::default),
                    extra: serde_json::Map::new(),
                },
                reference_type: None,
                has_previous_page: None,
                cursor: None,
                old_status: None,
                new_status: None,
            }
        })
        .collect()
}
