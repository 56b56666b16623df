//! Pipeline configuration.
//!
//! Defaults match the production feed: status changes merge, the four minor
//! types group, relation references are hidden on version detail views, and
//! version batches span at most 30 minutes from their first publish. Every
//! field has a serde default so a TOML override file may set any subset.

use feedline_core::{ActivityType, EntityType, FeedError};
use serde::{Deserialize, Serialize};

/// Parameters for one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Activity type collapsed by the similar-activity merger.
    #[serde(default = "default_merge_type")]
    pub merge_type: ActivityType,

    /// Activity types considered minor by the grouper.
    #[serde(default = "default_minor_types")]
    pub minor_types: Vec<ActivityType>,

    /// Entity types whose feeds hide relation references.
    #[serde(default = "default_relation_excluded")]
    pub relation_excluded: Vec<EntityType>,

    /// Maximum whole minutes between a version batch's first publish and any
    /// member.
    #[serde(default = "default_version_window_minutes")]
    pub version_window_minutes: i64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            merge_type: default_merge_type(),
            minor_types: default_minor_types(),
            relation_excluded: default_relation_excluded(),
            version_window_minutes: default_version_window_minutes(),
        }
    }
}

impl PipelineOptions {
    /// Parse an override file.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Config`] on malformed TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self, FeedError> {
        toml::from_str(raw).map_err(|err| FeedError::Config(err.to_string()))
    }
}

fn default_merge_type() -> ActivityType {
    ActivityType::StatusChange
}

fn default_minor_types() -> Vec<ActivityType> {
    vec![
        ActivityType::StatusChange,
        ActivityType::AssigneeAdd,
        ActivityType::AssigneeRemove,
        ActivityType::Untyped,
    ]
}

fn default_relation_excluded() -> Vec<EntityType> {
    vec![EntityType::Version]
}

const fn default_version_window_minutes() -> i64 {
    30
}
