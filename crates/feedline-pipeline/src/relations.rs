//! Relation filter: stage 2.
//!
//! A feed can contain activities surfaced only because of a link to a
//! different entity (`referenceType: "relation"`). On excluded entity types
//! those are removed — a version detail view must not show comments posted
//! on a parent task. For any other entity type the input passes through
//! unchanged.

use feedline_core::{Activity, EntityType};

/// Drop relation references when `entity_type` is in the excluded set.
#[must_use]
pub fn filter_relations(
    activities: Vec<Activity>,
    excluded: &[EntityType],
    entity_type: &EntityType,
) -> Vec<Activity> {
    if !excluded.contains(entity_type) {
        return activities;
    }
    activities
        .into_iter()
        .filter(|activity| !activity.is_relation())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedline_core::{ActivityData, ActivityType, Timestamp};

    fn comment(id: &str, reference_type: Option<&str>) -> Activity {
        Activity {
            activity_id: id.to_string(),
            activity_type: ActivityType::Comment,
            created_at: Timestamp::from("2024-03-01T10:00:00Z"),
            updated_at: Timestamp::from("2024-03-01T10:00:00Z"),
            author_name: Some("alice".to_string()),
            origin: None,
            activity_data: ActivityData::default(),
            reference_type: reference_type.map(str::to_string),
            has_previous_page: None,
            cursor: None,
            old_status: None,
            new_status: None,
        }
    }

    #[test]
    fn drops_relations_on_excluded_entity() {
        let input = vec![
            comment("a-1", None),
            comment("a-2", Some("relation")),
            comment("a-3", Some("origin")),
        ];
        let out = filter_relations(input, &[EntityType::Version], &EntityType::Version);
        let ids: Vec<&str> = out.iter().map(|a| a.activity_id.as_str()).collect();
        assert_eq!(ids, vec!["a-1", "a-3"]);
    }

    #[test]
    fn passes_through_on_other_entities() {
        let input = vec![comment("a-1", Some("relation"))];
        let out = filter_relations(input.clone(), &[EntityType::Version], &EntityType::Task);
        assert_eq!(out, input);
    }

    #[test]
    fn empty_excluded_set_never_filters() {
        let input = vec![comment("a-1", Some("relation"))];
        let out = filter_relations(input.clone(), &[], &EntityType::Version);
        assert_eq!(out, input);
    }
}
