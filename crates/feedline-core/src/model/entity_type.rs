//! Entity type of the record a feed is attached to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of project entity an activity feed belongs to.
///
/// Only the relation filter branches on this; the set is open-ended, so
/// unknown kinds are carried in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    Task,
    Version,
    Folder,
    Product,
    Other(String),
}

impl EntityType {
    /// Return the wire string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Task => "task",
            Self::Version => "version",
            Self::Folder => "folder",
            Self::Product => "product",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntityType {
    fn from(s: &str) -> Self {
        match s {
            "task" => Self::Task,
            "version" => Self::Version,
            "folder" => Self::Folder,
            "product" => Self::Product,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for EntityType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}
