//! Interval merging for timeline blocks
//!
//! Coalesces consecutive or overlapping same-app sessions into continuous
//! usage blocks. Unlike the duration sums, this works purely from the
//! start/end timestamps. The overlap test is inclusive: sessions that only
//! touch at a boundary are merged.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::core::types::{Session, TIMESTAMP_FORMAT};

/// A maximal run of same-app sessions whose timestamps chain together.
/// Derived per query, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MergedBlock {
    /// Lower-cased; merging compares apps case-insensitively.
    pub(crate) app_name: String,
    pub(crate) start: NaiveDateTime,
    pub(crate) end: NaiveDateTime,
}

pub(crate) fn merge_blocks(sessions: &[&Session]) -> Vec<MergedBlock> {
    let mut ordered: Vec<&Session> = sessions.to_vec();
    // Stable sort: equal start timestamps keep capture order.
    ordered.sort_by(|a, b| a.start.cmp(&b.start));

    let mut blocks = Vec::new();
    let mut iter = ordered.into_iter();
    let Some(first) = iter.next() else {
        return blocks;
    };
    let mut current = MergedBlock {
        app_name: first.app_key(),
        start: first.start,
        end: first.end,
    };

    for s in iter {
        let key = s.app_key();
        if key == current.app_name && s.start <= current.end {
            current.end = current.end.max(s.end);
        } else {
            blocks.push(current);
            current = MergedBlock {
                app_name: key,
                start: s.start,
                end: s.end,
            };
        }
    }
    blocks.push(current);
    blocks
}

/// Regroup emitted blocks into app -> formatted "start - end" lines,
/// preserving emission order within each app.
pub(crate) fn group_blocks(blocks: Vec<MergedBlock>) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for block in blocks {
        let line = format!(
            "{} - {}",
            block.start.format(TIMESTAMP_FORMAT),
            block.end.format(TIMESTAMP_FORMAT)
        );
        grouped.entry(block.app_name).or_default().push(line);
    }
    grouped
}
