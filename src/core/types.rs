//! Canonical session records and the derived view types
//!
//! Every source shape normalizes to [`Session`]; every query returns one of
//! the serializable view structs below.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// One continuous period during which an application held foreground focus.
///
/// `duration_secs` is reported by the capture client and is not guaranteed
/// to equal `end - start`; aggregation sums use the reported value while
/// interval merging works from the timestamps. `end >= start` is expected
/// but never enforced.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Session {
    pub(crate) app_name: String,
    pub(crate) window_title: String,
    /// Calendar bucket the capture client filed this session under.
    pub(crate) date: NaiveDate,
    pub(crate) start: NaiveDateTime,
    pub(crate) end: NaiveDateTime,
    pub(crate) duration_secs: i64,
    pub(crate) end_reason: String,
}

impl Session {
    /// Canonical grouping key; app names compare case-insensitively.
    pub(crate) fn app_key(&self) -> String {
        self.app_name.to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DateRange {
    pub(crate) start: String,
    pub(crate) end: String,
}

/// Overall summary statistics. An empty input yields the all-zero value
/// with a null range, never an error.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Summary {
    pub(crate) total_sessions: usize,
    pub(crate) total_time_hours: f64,
    pub(crate) average_session_minutes: f64,
    pub(crate) unique_apps: usize,
    pub(crate) date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AppUsageRow {
    pub(crate) app_name: String,
    pub(crate) sessions: usize,
    pub(crate) total_time_seconds: i64,
    pub(crate) total_time_hours: f64,
    pub(crate) average_session_minutes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TopAppRow {
    pub(crate) name: String,
    /// Minutes, one decimal.
    pub(crate) time: f64,
    /// Share of the filtered total, rounded to a whole percent.
    pub(crate) percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DailyPoint {
    pub(crate) date: String,
    pub(crate) total_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct HourlyPoint {
    pub(crate) hour: u32,
    pub(crate) total_minutes: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CategoryUsage {
    pub(crate) category: String,
    pub(crate) hours: f64,
    pub(crate) percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProductivityReport {
    pub(crate) total_time_hours: f64,
    /// Configured categories in order, then `"other"`. Always complete and
    /// zero-filled so an empty window reports 0% everywhere.
    pub(crate) breakdown: Vec<CategoryUsage>,
    pub(crate) productivity_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TitleEntry {
    pub(crate) window_title: String,
    pub(crate) app_name: String,
    pub(crate) last_seen: String,
    pub(crate) duration_seconds: i64,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WindowTitleReport {
    pub(crate) app_name: String,
    pub(crate) window_titles: Vec<TitleEntry>,
    pub(crate) total_unique_titles: usize,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SessionDetail {
    pub(crate) timestamp: String,
    pub(crate) date: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) app_name: String,
    pub(crate) window_title: String,
    pub(crate) duration_seconds: i64,
    pub(crate) duration_minutes: f64,
    pub(crate) end_reason: String,
}
