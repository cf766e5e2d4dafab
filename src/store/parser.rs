//! Dual-schema activity log parser
//!
//! The capture client has written two historical shapes:
//!
//! - an object keyed by `YYYY-MM-DD`, each day holding flat entries with
//!   `start`/`end` time-of-day strings, `app`, `title`, `duration`;
//! - a flat array of entries carrying their own `date` plus a nested
//!   `time` sub-object, with `app_name`/`window_title`/`session_end_reason`.
//!
//! Both normalize to [`Session`]. Shape is detected from the document
//! structure and per-entry field presence. A malformed document is a
//! [`StoreError::Parse`]; a malformed individual entry is skipped (or its
//! optional fields defaulted) without aborting the load.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::Value;

use crate::core::types::{DATE_FORMAT, Session};
use crate::error::StoreError;
use crate::utils::parse_debug_enabled;

#[derive(Debug, Deserialize)]
struct DayEntry {
    start: Option<String>,
    end: Option<String>,
    app: Option<String>,
    title: Option<String>,
    duration: Option<i64>,
    end_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlatEntry {
    date: Option<String>,
    time: Option<TimeSpan>,
    app_name: Option<String>,
    window_title: Option<String>,
    duration: Option<i64>,
    session_end_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeSpan {
    start: Option<String>,
    end: Option<String>,
}

pub(crate) fn parse_document(raw: &str) -> Result<Vec<Session>, StoreError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| StoreError::Parse(e.to_string()))?;

    match value {
        Value::Object(days) => {
            let mut sessions = Vec::new();
            for (date_str, entries) in days {
                let Ok(date) = NaiveDate::parse_from_str(&date_str, DATE_FORMAT) else {
                    if parse_debug_enabled() {
                        eprintln!("Skipping day bucket with invalid date key {date_str:?}");
                    }
                    continue;
                };
                let Value::Array(entries) = entries else {
                    if parse_debug_enabled() {
                        eprintln!("Skipping day bucket {date_str}: not an array");
                    }
                    continue;
                };
                for entry in entries {
                    match serde_json::from_value::<DayEntry>(entry) {
                        Ok(entry) => sessions.push(day_session(date, entry)),
                        Err(e) => {
                            if parse_debug_enabled() {
                                eprintln!("Skipping entry in {date_str}: {e}");
                            }
                        }
                    }
                }
            }
            Ok(sessions)
        }
        Value::Array(entries) => {
            let mut sessions = Vec::new();
            for entry in entries {
                match serde_json::from_value::<FlatEntry>(entry) {
                    Ok(entry) => {
                        if let Some(session) = flat_session(entry) {
                            sessions.push(session);
                        }
                    }
                    Err(e) => {
                        if parse_debug_enabled() {
                            eprintln!("Skipping entry: {e}");
                        }
                    }
                }
            }
            Ok(sessions)
        }
        _ => Err(StoreError::Parse(
            "expected an object keyed by date or an array of entries".to_string(),
        )),
    }
}

fn day_session(date: NaiveDate, entry: DayEntry) -> Session {
    Session {
        app_name: entry.app.unwrap_or_default(),
        window_title: entry.title.unwrap_or_default(),
        date,
        start: date.and_time(parse_time(entry.start.as_deref())),
        end: date.and_time(parse_time(entry.end.as_deref())),
        duration_secs: entry.duration.unwrap_or(0).max(0),
        end_reason: entry.end_reason.unwrap_or_else(|| "unknown".to_string()),
    }
}

fn flat_session(entry: FlatEntry) -> Option<Session> {
    let date_str = entry.date?;
    let Ok(date) = NaiveDate::parse_from_str(&date_str, DATE_FORMAT) else {
        if parse_debug_enabled() {
            eprintln!("Skipping entry with invalid date {date_str:?}");
        }
        return None;
    };
    let (start, end) = match entry.time {
        Some(span) => (
            parse_time(span.start.as_deref()),
            parse_time(span.end.as_deref()),
        ),
        None => (NaiveTime::MIN, NaiveTime::MIN),
    };
    Some(Session {
        app_name: entry.app_name.unwrap_or_default(),
        window_title: entry.window_title.unwrap_or_default(),
        date,
        start: date.and_time(start),
        end: date.and_time(end),
        duration_secs: entry.duration.unwrap_or(0).max(0),
        end_reason: entry
            .session_end_reason
            .unwrap_or_else(|| "unknown".to_string()),
    })
}

/// Missing or garbled time-of-day strings default to midnight so a single
/// bad field never drops the whole entry.
fn parse_time(value: Option<&str>) -> NaiveTime {
    let Some(raw) = value else {
        return NaiveTime::MIN;
    };
    match NaiveTime::parse_from_str(raw, "%H:%M:%S") {
        Ok(t) => t,
        Err(_) => {
            if parse_debug_enabled() {
                eprintln!("Invalid time {raw:?}, defaulting to 00:00:00");
            }
            NaiveTime::MIN
        }
    }
}
