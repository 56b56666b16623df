//! Read-only project metadata used by the status enricher.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project metadata supplied by the project-metadata service.
///
/// Only the status catalog is consumed here; anything else the service
/// sends rides in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectInfo {
    /// Resolve a status definition by name.
    #[must_use]
    pub fn status(&self, name: &str) -> Option<&Status> {
        self.statuses.iter().find(|status| status.name == name)
    }
}

/// One status definition from the project anatomy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
