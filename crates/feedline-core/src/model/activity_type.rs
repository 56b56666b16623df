//! Activity type enum covering the known activity catalog.
//!
//! The string representation uses the `<noun>.<verb>` dotted format used by
//! the activity service (`status.change`, `assignee.add`, …). The catalog is
//! open-ended: unknown wire names round-trip through [`ActivityType::Other`]
//! so that new event kinds introduced server-side flow through the pipeline
//! as plain standalone items instead of failing to decode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The type of a single activity record.
///
/// `Untyped` is the empty string on the wire: system entries that carry no
/// explicit type. Anything outside the known catalog lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// A status transition on the entity.
    StatusChange,
    /// An assignee was added.
    AssigneeAdd,
    /// An assignee was removed.
    AssigneeRemove,
    /// A user comment.
    Comment,
    /// A version was published on the entity.
    VersionPublish,
    /// A checklist item was changed.
    Checklist,
    /// Untyped/system entry (empty string on the wire).
    Untyped,
    /// Any activity type outside the known catalog.
    Other(String),
}

impl ActivityType {
    /// Return the wire string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::StatusChange => "status.change",
            Self::AssigneeAdd => "assignee.add",
            Self::AssigneeRemove => "assignee.remove",
            Self::Comment => "comment",
            Self::VersionPublish => "version.publish",
            Self::Checklist => "checklist",
            Self::Untyped => "",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for ActivityType {
    fn default() -> Self {
        Self::Untyped
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ActivityType {
    fn from(s: &str) -> Self {
        match s {
            "status.change" => Self::StatusChange,
            "assignee.add" => Self::AssigneeAdd,
            "assignee.remove" => Self::AssigneeRemove,
            "comment" => Self::Comment,
            "version.publish" => Self::VersionPublish,
            "checklist" => Self::Checklist,
            "" => Self::Untyped,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for ActivityType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

// Custom serde: serialize as the wire string.
impl Serialize for ActivityType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        let expected = [
            (ActivityType::StatusChange, "status.change"),
            (ActivityType::AssigneeAdd, "assignee.add"),
            (ActivityType::AssigneeRemove, "assignee.remove"),
            (ActivityType::Comment, "comment"),
            (ActivityType::VersionPublish, "version.publish"),
            (ActivityType::Checklist, "checklist"),
            (ActivityType::Untyped, ""),
        ];
        for (ty, name) in expected {
            assert_eq!(ty.as_str(), name);
            assert_eq!(ActivityType::from(name), ty);
        }
    }

    #[test]
    fn unknown_wire_name_is_preserved() {
        let ty = ActivityType::from("reviewable.created");
        assert_eq!(ty, ActivityType::Other("reviewable.created".to_string()));
        assert_eq!(ty.as_str(), "reviewable.created");
    }

    #[test]
    fn serde_uses_wire_string() {
        let json = serde_json::to_string(&ActivityType::StatusChange).expect("serialize");
        assert_eq!(json, "\"status.change\"");
        let back: ActivityType = serde_json::from_str("\"version.publish\"").expect("deserialize");
        assert_eq!(back, ActivityType::VersionPublish);
    }

    #[test]
    fn empty_string_is_untyped() {
        let back: ActivityType = serde_json::from_str("\"\"").expect("deserialize");
        assert_eq!(back, ActivityType::Untyped);
    }
}
