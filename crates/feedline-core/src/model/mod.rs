//! Model types for activities, project metadata, and transformed feed items.

pub mod activity;
pub mod activity_type;
pub mod entity_type;
pub mod feed_item;
pub mod project;
pub mod timestamp;
