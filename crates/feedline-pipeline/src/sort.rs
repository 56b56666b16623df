//! Chronological sorter: stage 3.
//!
//! Oldest first, because the rendering layer draws the feed bottom-up
//! (newest at top via reverse visual flow). The sort must be stable:
//! same-instant activities keep their input order so repeated renders never
//! reorder them. Unparseable timestamps sort before parseable ones, stable
//! among themselves — see `Timestamp::cmp_instant`.

use feedline_core::Activity;

/// Stable sort by parsed `created_at`, ascending.
#[must_use]
pub fn sort_chronological(mut activities: Vec<Activity>) -> Vec<Activity> {
    activities.sort_by(|a, b| a.created_at.cmp_instant(&b.created_at));
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedline_core::{ActivityData, ActivityType, Timestamp};

    fn at(id: &str, created: &str) -> Activity {
        Activity {
            activity_id: id.to_string(),
            activity_type: ActivityType::Comment,
            created_at: Timestamp::from(created),
            updated_at: Timestamp::from(created),
            author_name: None,
            origin: None,
            activity_data: ActivityData::default(),
            reference_type: None,
            has_previous_page: None,
            cursor: None,
            old_status: None,
            new_status: None,
        }
    }

    fn ids(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.activity_id.as_str()).collect()
    }

    #[test]
    fn oldest_first() {
        let out = sort_chronological(vec![
            at("new", "2024-03-01T12:00:00Z"),
            at("old", "2024-03-01T08:00:00Z"),
            at("mid", "2024-03-01T10:00:00Z"),
        ]);
        assert_eq!(ids(&out), vec!["old", "mid", "new"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let out = sort_chronological(vec![
            at("first", "2024-03-01T10:00:00Z"),
            at("second", "2024-03-01T10:00:00Z"),
            at("third", "2024-03-01T10:00:00Z"),
        ]);
        assert_eq!(ids(&out), vec!["first", "second", "third"]);
    }

    #[test]
    fn malformed_timestamps_sort_first_in_input_order() {
        let out = sort_chronological(vec![
            at("good", "2024-03-01T10:00:00Z"),
            at("bad-1", "yesterday"),
            at("bad-2", ""),
        ]);
        assert_eq!(ids(&out), vec!["bad-1", "bad-2", "good"]);
    }
}
