//! End-to-end CLI tests: feed a JSON fixture through `fl transform`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const ACTIVITIES: &str = r#"[
  {
    "activityId": "s-1",
    "activityType": "status.change",
    "createdAt": "2024-03-01T09:00:00Z",
    "updatedAt": "2024-03-01T09:00:00Z",
    "authorName": "alice",
    "activityData": {"oldValue": "Ready", "newValue": "Done"}
  },
  {
    "activityId": "c-1",
    "activityType": "comment",
    "createdAt": "2024-03-01T10:00:00Z",
    "updatedAt": "2024-03-01T10:00:00Z",
    "authorName": "bob",
    "activityData": {"body": "looks good"}
  },
  {
    "activityId": "c-rel",
    "activityType": "comment",
    "createdAt": "2024-03-01T10:30:00Z",
    "updatedAt": "2024-03-01T10:30:00Z",
    "authorName": "bob",
    "referenceType": "relation"
  }
]"#;

const PROJECT_INFO: &str = r##"{
  "statuses": [
    {"name": "Ready", "icon": "fiber_new", "color": "#fcb339"},
    {"name": "Done", "icon": "task_alt", "color": "#00f0b4"}
  ]
}"##;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

#[test]
fn transforms_a_task_feed() {
    let activities = write_temp(ACTIVITIES);
    Command::cargo_bin("fl")
        .expect("binary exists")
        .arg("transform")
        .arg(activities.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("status.change"))
        .stdout(predicate::str::contains("comment"))
        // relation reference kept on task feeds
        .stdout(predicate::str::contains("c-rel"));
}

#[test]
fn version_feed_drops_relations() {
    let activities = write_temp(ACTIVITIES);
    Command::cargo_bin("fl")
        .expect("binary exists")
        .arg("transform")
        .arg(activities.path())
        .arg("--entity-type")
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("c-rel").not());
}

#[test]
fn json_output_carries_enriched_statuses() {
    let activities = write_temp(ACTIVITIES);
    let project = write_temp(PROJECT_INFO);
    let output = Command::cargo_bin("fl")
        .expect("binary exists")
        .arg("transform")
        .arg(activities.path())
        .arg("--project-info")
        .arg(project.path())
        .arg("--json")
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let feed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let items = feed.as_array().expect("JSON array");
    assert_eq!(items.len(), 3);
    // Oldest first: the status change leads.
    assert_eq!(items[0]["activityId"], "s-1");
    assert_eq!(items[0]["newStatus"]["icon"], "task_alt");
}

#[test]
fn missing_file_fails_with_context() {
    Command::cargo_bin("fl")
        .expect("binary exists")
        .arg("transform")
        .arg("/nonexistent/activities.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading activities"));
}
