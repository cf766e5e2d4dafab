//! Query facade over the snapshot cache
//!
//! One `Analyzer` per source file, constructed by the serving layer and
//! threaded into each query. Missing or malformed sources degrade to
//! empty results; only invalid caller input surfaces as an error.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::CategoryRule;
use crate::core::Session;
use crate::core::aggregate::{
    app_usage, daily_usage, detailed_sessions, hourly_usage, productivity, summarize, top_apps,
    window_titles,
};
use crate::core::filter::TimeFilter;
use crate::core::merge::{group_blocks, merge_blocks};
use crate::core::types::{
    AppUsageRow, DailyPoint, HourlyPoint, ProductivityReport, SessionDetail, Summary, TopAppRow,
    WindowTitleReport,
};
use crate::error::AppError;
use crate::store::SnapshotCache;
use crate::utils::{Timezone, parse_debug_enabled};

pub(crate) struct Analyzer {
    cache: SnapshotCache,
    categories: Vec<CategoryRule>,
    timezone: Timezone,
}

/// Field-level borrow helper so callers can keep using the other analyzer
/// fields while the record slice is alive.
fn cached_records(cache: &mut SnapshotCache) -> &[Session] {
    // Formatted up front: the record borrow stays live through the match.
    let path = cache.path().display().to_string();
    match cache.records() {
        Ok(records) => records,
        Err(e) => {
            if parse_debug_enabled() {
                eprintln!("{path}: {e}");
            }
            &[]
        }
    }
}

impl Analyzer {
    pub(crate) fn new(
        data_file: PathBuf,
        categories: Vec<CategoryRule>,
        timezone: Timezone,
    ) -> Self {
        Analyzer {
            cache: SnapshotCache::new(data_file),
            categories,
            timezone,
        }
    }

    pub(crate) fn get_summary(&mut self, days: Option<i64>) -> Summary {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::last_days(days).apply(records, now);
        summarize(&filtered)
    }

    pub(crate) fn get_app_usage(
        &mut self,
        days: Option<i64>,
        limit: Option<usize>,
    ) -> Vec<AppUsageRow> {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::last_days(days).apply(records, now);
        app_usage(&filtered, limit)
    }

    pub(crate) fn get_top_apps(
        &mut self,
        days: Option<i64>,
        limit: Option<usize>,
    ) -> Vec<TopAppRow> {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::last_days(days).apply(records, now);
        top_apps(&filtered, limit)
    }

    pub(crate) fn get_daily_usage(&mut self, days: i64) -> Vec<DailyPoint> {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::LastDays(days).apply(records, now);
        daily_usage(&filtered, days, now.date())
    }

    pub(crate) fn get_hourly_usage(&mut self, days: i64) -> Vec<HourlyPoint> {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::LastDays(days).apply(records, now);
        hourly_usage(&filtered)
    }

    pub(crate) fn get_productivity(&mut self, days: i64) -> ProductivityReport {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::LastDays(days).apply(records, now);
        productivity(&filtered, &self.categories)
    }

    pub(crate) fn get_window_titles(
        &mut self,
        app: &str,
        days: Option<i64>,
        limit: usize,
    ) -> WindowTitleReport {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::last_days(days).apply(records, now);
        window_titles(&filtered, app, limit)
    }

    pub(crate) fn get_detailed_sessions(
        &mut self,
        days: Option<i64>,
        limit: usize,
    ) -> Vec<SessionDetail> {
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = TimeFilter::last_days(days).apply(records, now);
        detailed_sessions(&filtered, limit)
    }

    /// Validates the date string before any file access, so a malformed
    /// filter is distinguishable from an empty or missing source.
    pub(crate) fn get_merged_sessions(
        &mut self,
        days: Option<i64>,
        date: Option<&str>,
    ) -> Result<BTreeMap<String, Vec<String>>, AppError> {
        let filter = TimeFilter::from_query(days, date)?;
        let now = self.timezone.now_naive();
        let records = cached_records(&mut self.cache);
        let filtered = filter.apply(records, now);
        Ok(group_blocks(merge_blocks(&filtered)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn analyzer_for(path: &Path) -> Analyzer {
        Analyzer::new(
            path.to_path_buf(),
            vec![CategoryRule {
                name: "productive".to_string(),
                apps: vec!["code".to_string()],
            }],
            Timezone::Local,
        )
    }

    fn today_str() -> String {
        Timezone::Local.today().format("%Y-%m-%d").to_string()
    }

    #[test]
    fn missing_source_degrades_to_empty_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut analyzer = analyzer_for(&dir.path().join("nope.json"));

        let summary = analyzer.get_summary(None);
        assert_eq!(summary.total_sessions, 0);
        assert!(summary.date_range.is_none());

        assert!(analyzer.get_app_usage(None, None).is_empty());
        assert!(analyzer.get_top_apps(None, None).is_empty());
        assert_eq!(analyzer.get_daily_usage(5).len(), 5);
        assert_eq!(analyzer.get_hourly_usage(7).len(), 24);
        assert_eq!(analyzer.get_productivity(7).productivity_score, 0.0);
        assert!(analyzer.get_merged_sessions(None, None).unwrap().is_empty());
    }

    #[test]
    fn invalid_date_is_distinct_from_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let mut analyzer = analyzer_for(&dir.path().join("nope.json"));
        let err = analyzer.get_merged_sessions(None, Some("31-12-2026")).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_usage.json");
        let today = today_str();
        fs::write(
            &path,
            format!(
                r#"{{"{today}": [
                    {{"start": "10:00:00", "end": "10:05:00", "app": "code.exe", "duration": 300}},
                    {{"start": "10:05:00", "end": "10:07:00", "app": "chrome.exe", "duration": 120}}
                ]}}"#
            ),
        )
        .unwrap();
        let mut analyzer = analyzer_for(&path);

        let first = analyzer.get_summary(Some(7));
        let second = analyzer.get_summary(Some(7));
        assert_eq!(first.total_sessions, second.total_sessions);
        assert_eq!(first.total_time_hours, second.total_time_hours);

        let merged = analyzer.get_merged_sessions(Some(7), None).unwrap();
        assert_eq!(merged.len(), 2);
        // boundary-touching sessions belong to different apps, so no merge
        assert_eq!(merged["code.exe"].len(), 1);
    }

    #[test]
    fn source_change_is_reflected_on_next_query() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_usage.json");
        let today = today_str();
        fs::write(
            &path,
            format!(
                r#"{{"{today}": [{{"start": "10:00:00", "end": "10:05:00", "app": "a", "duration": 300}}]}}"#
            ),
        )
        .unwrap();
        let mut analyzer = analyzer_for(&path);
        assert_eq!(analyzer.get_summary(None).total_sessions, 1);

        fs::write(
            &path,
            format!(
                r#"{{"{today}": [
                    {{"start": "10:00:00", "end": "10:05:00", "app": "a", "duration": 300}},
                    {{"start": "11:00:00", "end": "11:05:00", "app": "a", "duration": 300}}
                ]}}"#
            ),
        )
        .unwrap();
        assert_eq!(analyzer.get_summary(None).total_sessions, 2);
    }

    #[test]
    fn exact_date_filter_reaches_merger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_usage.json");
        fs::write(
            &path,
            r#"{
                "2026-01-05": [{"start": "10:00:00", "end": "10:05:00", "app": "a", "duration": 300}],
                "2026-01-06": [{"start": "10:00:00", "end": "10:05:00", "app": "b", "duration": 300}]
            }"#,
        )
        .unwrap();
        let mut analyzer = analyzer_for(&path);
        let merged = analyzer.get_merged_sessions(None, Some("2026-01-05")).unwrap();
        assert_eq!(merged.len(), 1);
        assert!(merged.contains_key("a"));
    }
}
