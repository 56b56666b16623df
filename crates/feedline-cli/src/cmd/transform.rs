//! `fl transform`: run the pipeline over a JSON payload.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use feedline_core::{payload, EntityType};
use feedline_pipeline::{transform_activities, PipelineOptions};
use tracing::debug;

use crate::output::{render_feed, OutputMode};

#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Path to the activities payload (JSON array or `{"activities": [...]}`).
    #[arg(value_name = "ACTIVITIES")]
    pub activities: PathBuf,

    /// Optional project metadata file; without it status enrichment is
    /// skipped.
    #[arg(long, value_name = "FILE")]
    pub project_info: Option<PathBuf>,

    /// Entity type the feed is attached to (task, version, folder, ...).
    #[arg(long, value_name = "TYPE", default_value = "task")]
    pub entity_type: String,

    /// Optional TOML file overriding pipeline options.
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,
}

pub fn run(args: &TransformArgs, mode: OutputMode) -> anyhow::Result<()> {
    let activities = payload::load_activities(&args.activities)
        .with_context(|| format!("loading activities from {}", args.activities.display()))?;

    let project_info = args
        .project_info
        .as_deref()
        .map(|path| {
            payload::load_project_info(path)
                .with_context(|| format!("loading project info from {}", path.display()))
        })
        .transpose()?;

    let opts = args
        .options
        .as_deref()
        .map(|path| {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading options from {}", path.display()))?;
            PipelineOptions::from_toml_str(&raw)
                .with_context(|| format!("parsing options from {}", path.display()))
        })
        .transpose()?
        .unwrap_or_default();

    let entity_type = EntityType::from(args.entity_type.as_str());
    debug!(
        activities = activities.len(),
        entity_type = %entity_type,
        "running transform"
    );

    let feed = transform_activities(activities, project_info.as_ref(), &entity_type, &opts);
    render_feed(&feed, mode)
}
