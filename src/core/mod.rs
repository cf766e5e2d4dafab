//! Core aggregation engine: canonical records, filtering, pure views,
//! and interval merging.

pub(crate) mod aggregate;
pub(crate) mod filter;
pub(crate) mod merge;
pub(crate) mod types;

pub(crate) use types::Session;
