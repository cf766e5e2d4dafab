//! Snapshot store: schema normalization and staleness-aware caching
//!
//! The activity log is a single flat JSON file owned by the capture client;
//! this module only reads it.

pub(crate) mod cache;
pub(crate) mod parser;

pub(crate) use cache::SnapshotCache;
