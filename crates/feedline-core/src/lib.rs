//! feedline-core library.
//!
//! Data model for the activity feed: raw [`Activity`] records as fetched
//! from the activity service, the project-metadata lookup types, and the
//! [`FeedItem`] sum type produced by the transformation pipeline.
//!
//! # Conventions
//!
//! - **Errors**: typed [`FeedError`] at decode boundaries; the transformation
//!   itself has no fatal paths and degrades per-record.
//! - **Serde**: wire names are camelCase (`activityId`, `createdAt`, …) to
//!   match the activity service payloads.

pub mod error;
pub mod model;
pub mod payload;

pub use error::FeedError;
pub use model::activity::{Activity, ActivityData, Origin, StatusRef, VersionContext};
pub use model::activity_type::ActivityType;
pub use model::entity_type::EntityType;
pub use model::feed_item::{ActivityGroup, FeedItem, VersionBatch, VersionItem};
pub use model::project::{ProjectInfo, Status};
pub use model::timestamp::Timestamp;
