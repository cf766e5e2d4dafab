//! Pure aggregation views over filtered sessions
//!
//! Every function here is a pure transform of an already-filtered slice;
//! nothing touches the store. Duration sums use the client-reported
//! `duration_secs`, not `end - start`.

use chrono::{Duration, NaiveDate, Timelike};
use std::collections::{HashMap, HashSet};

use crate::config::CategoryRule;
use crate::core::types::{
    AppUsageRow, CategoryUsage, DATE_FORMAT, DailyPoint, DateRange, HourlyPoint,
    ProductivityReport, Session, SessionDetail, Summary, TIMESTAMP_FORMAT, TitleEntry,
    TopAppRow, WindowTitleReport,
};
use crate::utils::format::{round1, round2};

pub(crate) const OTHER_CATEGORY: &str = "other";
pub(crate) const PRODUCTIVE_CATEGORY: &str = "productive";

/// Display form of a canonical app key: trailing extension stripped,
/// first letter capitalized. An empty key renders as "Unknown".
pub(crate) fn display_app_name(key: &str) -> String {
    let base = key.split('.').next().unwrap_or(key);
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Unknown".to_string(),
    }
}

pub(crate) fn summarize(sessions: &[&Session]) -> Summary {
    if sessions.is_empty() {
        return Summary {
            total_sessions: 0,
            total_time_hours: 0.0,
            average_session_minutes: 0.0,
            unique_apps: 0,
            date_range: None,
        };
    }

    let total_secs: i64 = sessions.iter().map(|s| s.duration_secs).sum();
    let unique_apps = sessions
        .iter()
        .map(|s| s.app_key())
        .collect::<HashSet<_>>()
        .len();

    let first = sessions.iter().map(|s| s.start).min();
    let last = sessions.iter().map(|s| s.start).max();
    let date_range = match (first, last) {
        (Some(a), Some(b)) => Some(DateRange {
            start: a.format(DATE_FORMAT).to_string(),
            end: b.format(DATE_FORMAT).to_string(),
        }),
        _ => None,
    };

    Summary {
        total_sessions: sessions.len(),
        total_time_hours: round2(total_secs as f64 / 3600.0),
        average_session_minutes: round1(total_secs as f64 / sessions.len() as f64 / 60.0),
        unique_apps,
        date_range,
    }
}

struct AppGroup {
    key: String,
    sessions: usize,
    total_secs: i64,
}

/// Group by canonical app key, sorted descending by total duration.
/// The sort is stable, so ties keep first-seen order.
fn group_by_app(sessions: &[&Session]) -> Vec<AppGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<AppGroup> = Vec::new();

    for s in sessions {
        let key = s.app_key();
        let i = match index.get(&key) {
            Some(&i) => i,
            None => {
                let i = groups.len();
                groups.push(AppGroup {
                    key: key.clone(),
                    sessions: 0,
                    total_secs: 0,
                });
                index.insert(key, i);
                i
            }
        };
        groups[i].sessions += 1;
        groups[i].total_secs += s.duration_secs;
    }

    groups.sort_by(|a, b| b.total_secs.cmp(&a.total_secs));
    groups
}

pub(crate) fn app_usage(sessions: &[&Session], limit: Option<usize>) -> Vec<AppUsageRow> {
    let groups = group_by_app(sessions);
    let mut rows: Vec<AppUsageRow> = groups
        .into_iter()
        .map(|g| AppUsageRow {
            app_name: display_app_name(&g.key),
            sessions: g.sessions,
            total_time_seconds: g.total_secs,
            total_time_hours: round2(g.total_secs as f64 / 3600.0),
            average_session_minutes: round1(g.total_secs as f64 / g.sessions as f64 / 60.0),
        })
        .collect();
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

pub(crate) fn top_apps(sessions: &[&Session], limit: Option<usize>) -> Vec<TopAppRow> {
    let groups = group_by_app(sessions);
    let total: i64 = groups.iter().map(|g| g.total_secs).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut rows: Vec<TopAppRow> = groups
        .into_iter()
        .map(|g| TopAppRow {
            name: display_app_name(&g.key),
            time: round1(g.total_secs as f64 / 60.0),
            percentage: (g.total_secs as f64 / total as f64 * 100.0).round() as u32,
        })
        .collect();
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    rows
}

/// Always exactly `days` points, oldest first, ending today, zero-filled.
pub(crate) fn daily_usage(sessions: &[&Session], days: i64, today: NaiveDate) -> Vec<DailyPoint> {
    let mut by_date: HashMap<NaiveDate, i64> = HashMap::new();
    for s in sessions {
        *by_date.entry(s.start.date()).or_insert(0) += s.duration_secs;
    }

    let days = days.max(1);
    let first = today - Duration::days(days - 1);
    (0..days)
        .map(|i| {
            let date = first + Duration::days(i);
            let secs = by_date.get(&date).copied().unwrap_or(0);
            DailyPoint {
                date: date.format(DATE_FORMAT).to_string(),
                total_hours: round2(secs as f64 / 3600.0),
            }
        })
        .collect()
}

/// Always all 24 hour-of-day slots, in order, zero-filled.
pub(crate) fn hourly_usage(sessions: &[&Session]) -> Vec<HourlyPoint> {
    let mut by_hour = [0i64; 24];
    for s in sessions {
        by_hour[s.start.hour() as usize] += s.duration_secs;
    }
    (0..24)
        .map(|hour| HourlyPoint {
            hour,
            total_minutes: round1(by_hour[hour as usize] as f64 / 60.0),
        })
        .collect()
}

/// First matching category wins; unmatched time lands in `"other"`. The
/// breakdown always lists every configured category so an empty window
/// reports 0% everywhere instead of dividing by zero.
pub(crate) fn productivity(
    sessions: &[&Session],
    categories: &[CategoryRule],
) -> ProductivityReport {
    let mut totals: Vec<i64> = vec![0; categories.len() + 1];
    let other = categories.len();
    let mut total_secs = 0i64;

    for s in sessions {
        total_secs += s.duration_secs;
        let app = s.app_key();
        let idx = categories
            .iter()
            .position(|c| c.apps.iter().any(|p| app.contains(&p.to_lowercase())))
            .unwrap_or(other);
        totals[idx] += s.duration_secs;
    }

    let pct = |secs: i64| {
        if total_secs > 0 {
            round1(secs as f64 / total_secs as f64 * 100.0)
        } else {
            0.0
        }
    };

    let mut breakdown: Vec<CategoryUsage> = categories
        .iter()
        .zip(&totals)
        .map(|(c, &secs)| CategoryUsage {
            category: c.name.clone(),
            hours: round2(secs as f64 / 3600.0),
            percentage: pct(secs),
        })
        .collect();
    breakdown.push(CategoryUsage {
        category: OTHER_CATEGORY.to_string(),
        hours: round2(totals[other] as f64 / 3600.0),
        percentage: pct(totals[other]),
    });

    let productivity_score = breakdown
        .iter()
        .find(|c| c.category == PRODUCTIVE_CATEGORY)
        .map(|c| c.percentage)
        .unwrap_or(0.0);

    ProductivityReport {
        total_time_hours: round2(total_secs as f64 / 3600.0),
        breakdown,
        productivity_score,
    }
}

/// Distinct window titles for one app: exact case-insensitive app match,
/// deduplicated by first-seen title, then newest first.
pub(crate) fn window_titles(sessions: &[&Session], app: &str, limit: usize) -> WindowTitleReport {
    let app_key = app.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut entries: Vec<(&Session, TitleEntry)> = Vec::new();

    for s in sessions {
        if s.app_key() != app_key {
            continue;
        }
        let title = s.window_title.as_str();
        if title.is_empty() || !seen.insert(title) {
            continue;
        }
        entries.push((
            s,
            TitleEntry {
                window_title: title.to_string(),
                app_name: s.app_name.clone(),
                last_seen: s.start.format(TIMESTAMP_FORMAT).to_string(),
                duration_seconds: s.duration_secs,
            },
        ));
    }

    entries.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    let window_titles: Vec<TitleEntry> =
        entries.into_iter().map(|(_, e)| e).take(limit).collect();
    let total_unique_titles = window_titles.len();

    WindowTitleReport {
        app_name: app.to_string(),
        window_titles,
        total_unique_titles,
    }
}

/// Raw sessions with derived per-row fields, newest first.
pub(crate) fn detailed_sessions(sessions: &[&Session], limit: usize) -> Vec<SessionDetail> {
    let mut ordered: Vec<&&Session> = sessions.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));
    ordered
        .into_iter()
        .take(limit)
        .map(|s| SessionDetail {
            timestamp: s.start.format(TIMESTAMP_FORMAT).to_string(),
            date: s.date.format(DATE_FORMAT).to_string(),
            start_time: s.start.format("%H:%M:%S").to_string(),
            end_time: s.end.format("%H:%M:%S").to_string(),
            app_name: s.app_name.clone(),
            window_title: s.window_title.clone(),
            duration_seconds: s.duration_secs,
            duration_minutes: round1(s.duration_secs as f64 / 60.0),
            end_reason: s.end_reason.clone(),
        })
        .collect()
}
