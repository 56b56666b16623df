//! Output layer: human-readable lines or stable JSON.

use std::io::{self, Write};

use feedline_core::FeedItem;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable, one line per feed item.
    Human,
    /// Machine-readable JSON array of feed items.
    Json,
}

/// Render the transformed feed to stdout.
pub fn render_feed(feed: &[FeedItem], mode: OutputMode) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut w, feed)?;
            writeln!(w)?;
        }
        OutputMode::Human => {
            for item in feed {
                writeln!(w, "{}", summary_line(item))?;
            }
        }
    }
    Ok(())
}

/// One human-readable line per item.
fn summary_line(item: &FeedItem) -> String {
    match item {
        FeedItem::Activity(activity) => format!(
            "{:<18} {:<24} {:<10} {}",
            activity.activity_type.as_str(),
            activity.created_at.as_str(),
            activity.author_name.as_deref().unwrap_or("-"),
            activity.activity_id,
        ),
        FeedItem::Group(group) => format!(
            "{:<18} {:<24} {:<10} {} ({} activities)",
            "group",
            group
                .items
                .first()
                .map_or("-", |a| a.created_at.as_str()),
            "-",
            group.activity_id,
            group.items.len(),
        ),
        FeedItem::VersionBatch(batch) => format!(
            "{:<18} {:<24} {:<10} {} ({} versions)",
            batch.activity.activity_type.as_str(),
            batch.activity.created_at.as_str(),
            batch.activity.author_name.as_deref().unwrap_or("-"),
            batch.activity.activity_id,
            batch.versions.len(),
        ),
    }
}
