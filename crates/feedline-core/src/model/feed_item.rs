//! Display-ready feed items produced by the transformation pipeline.
//!
//! The pipeline output is a sum type with three variants rather than one
//! loosely-typed record with optional fields: a renderer discriminates on
//! the variant, and the serialized shape keeps the wire contract (`group`
//! items carry `activityType: "group"`, version batches are the anchor
//! activity's fields plus a `versions` array).

use serde::ser::SerializeStruct;
use serde::Serialize;

use crate::model::activity::Activity;
use crate::model::timestamp::Timestamp;

/// The `activityType` value groups carry on the wire.
pub const GROUP_ACTIVITY_TYPE: &str = "group";

/// One item of the transformed feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedItem {
    /// A real activity passed through standalone.
    Activity(Activity),
    /// A collapsed cluster of consecutive minor activities.
    Group(ActivityGroup),
    /// A cluster of version publishes by one author within the batch window.
    VersionBatch(VersionBatch),
}

impl FeedItem {
    /// The id a renderer keys this item by.
    #[must_use]
    pub fn activity_id(&self) -> &str {
        match self {
            Self::Activity(activity) => &activity.activity_id,
            Self::Group(group) => &group.activity_id,
            Self::VersionBatch(batch) => &batch.activity.activity_id,
        }
    }

    /// The `activityType` string a renderer discriminates on.
    #[must_use]
    pub fn activity_type_str(&self) -> &str {
        match self {
            Self::Activity(activity) => activity.activity_type.as_str(),
            Self::Group(_) => GROUP_ACTIVITY_TYPE,
            Self::VersionBatch(batch) => batch.activity.activity_type.as_str(),
        }
    }

    /// The standalone activity, when this item is one.
    #[must_use]
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            Self::Activity(activity) => Some(activity),
            _ => None,
        }
    }
}

/// A collapsed visual cluster of three or more consecutive minor activities.
///
/// Ids are `group-<n>` with `n` from a counter scoped to a single pipeline
/// invocation: deterministic for identical input, but not stable across
/// partial re-renders or overlapping pagination slices.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityGroup {
    pub activity_id: String,
    /// Member activities in encounter order.
    pub items: Vec<Activity>,
}

impl ActivityGroup {
    /// Build a group from its invocation-scoped index and members.
    #[must_use]
    pub fn new(index: usize, items: Vec<Activity>) -> Self {
        Self {
            activity_id: format!("group-{index}"),
            items,
        }
    }
}

impl Serialize for ActivityGroup {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ActivityGroup", 3)?;
        state.serialize_field("activityType", GROUP_ACTIVITY_TYPE)?;
        state.serialize_field("activityId", &self.activity_id)?;
        state.serialize_field("items", &self.items)?;
        state.end()
    }
}

/// A batch of consecutive version publishes by one author.
///
/// Serializes as the anchor activity's fields plus the `versions` array, so
/// renderers can tell a batch from a plain publish by the presence of
/// `versions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionBatch {
    /// The first publish of the batch; the batch window is anchored on its
    /// `created_at`.
    #[serde(flatten)]
    pub activity: Activity,
    pub versions: Vec<VersionItem>,
}

impl VersionBatch {
    /// Open a batch from its first publish.
    #[must_use]
    pub fn start(activity: Activity) -> Self {
        let first = VersionItem::from_activity(&activity);
        Self {
            activity,
            versions: vec![first],
        }
    }

    /// Add a publish to the batch.
    pub fn push(&mut self, activity: &Activity) {
        self.versions.push(VersionItem::from_activity(activity));
    }
}

/// Projection of one `version.publish` activity into a batch entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    pub updated_at: Timestamp,
}

impl VersionItem {
    /// Extract the version entry from a publish activity's `origin` and
    /// `activityData.context`.
    #[must_use]
    pub fn from_activity(activity: &Activity) -> Self {
        let origin = activity.origin.as_ref();
        let context = activity.activity_data.context.as_ref();
        Self {
            name: origin.and_then(|o| o.name.clone()),
            id: origin.and_then(|o| o.id.clone()),
            product_name: context.and_then(|c| c.product_name.clone()),
            product_type: context.and_then(|c| c.product_type.clone()),
            updated_at: activity.updated_at.clone(),
        }
    }
}
