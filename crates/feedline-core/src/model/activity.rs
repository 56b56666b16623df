//! The raw activity record flowing through the pipeline.
//!
//! `Activity` maps 1:1 to one element of the paginated activity payload.
//! Field names on the wire are camelCase. Payload fields the model does not
//! name explicitly are carried in flattened catch-all maps so that records
//! survive a decode/encode round-trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::activity_type::ActivityType;
use crate::model::entity_type::EntityType;
use crate::model::project::Status;
use crate::model::timestamp::Timestamp;

/// The `referenceType` marker for activities surfaced via a cross-entity
/// link rather than a direct event on the entity.
pub const RELATION_REFERENCE: &str = "relation";

/// One recorded event on a project entity.
///
/// # Fields
///
/// - `activity_id` — unique id, stable across pagination.
/// - `activity_type` — dotted wire name, open catalog.
/// - `created_at` / `updated_at` — RFC 3339 wire timestamps.
/// - `author_name` — acting user; authorship equality is on this field.
/// - `origin` — the entity the activity concerns (e.g. the published
///   version for a `version.publish`).
/// - `activity_data` — type-specific payload.
/// - `reference_type` — `"relation"` when surfaced via a cross-entity link.
/// - `has_previous_page` / `cursor` — pagination continuation markers owned
///   by the fetch service; merge stages forward the most recently
///   encountered values so "load more" can resume.
/// - `old_status` / `new_status` — enrichment output, absent on the wire;
///   resolved from project metadata for `status.change` activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_id: String,
    #[serde(default)]
    pub activity_type: ActivityType,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(default)]
    pub activity_data: ActivityData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_previous_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_status: Option<StatusRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status: Option<StatusRef>,
}

impl Activity {
    /// Whether this activity was surfaced via a cross-entity relation.
    #[must_use]
    pub fn is_relation(&self) -> bool {
        self.reference_type.as_deref() == Some(RELATION_REFERENCE)
    }

    /// Authorship equality: two activities are "same author" iff their
    /// `author_name` fields are equal.
    #[must_use]
    pub fn same_author(&self, other: &Self) -> bool {
        self.author_name == other.author_name
    }
}

/// Reference to the entity an activity concerns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Origin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<EntityType>,
}

/// Type-specific activity payload.
///
/// `old_value`/`new_value` carry status names for `status.change`;
/// `context` carries product metadata for `version.publish`. Everything
/// else rides in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<VersionContext>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ActivityData {
    /// Whether the payload nets to no change.
    ///
    /// A missing side compares unequal, so a record lacking payload data is
    /// never suppressed as a no-op.
    #[must_use]
    pub fn is_net_noop(&self) -> bool {
        match (&self.old_value, &self.new_value) {
            (Some(old), Some(new)) => old == new,
            _ => false,
        }
    }
}

/// Product context carried by `version.publish` payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A status reference resolved by the enricher.
///
/// The found status record is overlaid with the literal name from the
/// payload, so a name with no match in the project catalog still yields a
/// name-only reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatusRef {
    /// Overlay a resolved status record (if any) with the literal name.
    #[must_use]
    pub fn resolved(found: Option<&Status>, name: Option<String>) -> Self {
        Self {
            name,
            icon: found.and_then(|s| s.icon.clone()),
            color: found.and_then(|s| s.color.clone()),
            extra: found.map(|s| s.extra.clone()).unwrap_or_default(),
        }
    }
}
