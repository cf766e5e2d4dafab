//! Time-window filtering of canonical records
//!
//! Two mutually exclusive modes: a relative day window anchored at "now",
//! or an exact calendar date matched against each session's owning bucket.
//! Date strings are validated before any file access.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::core::Session;
use crate::error::AppError;
use crate::utils::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeFilter {
    All,
    LastDays(i64),
    Date(NaiveDate),
}

impl TimeFilter {
    pub(crate) fn last_days(days: Option<i64>) -> Self {
        match days {
            Some(n) => TimeFilter::LastDays(n),
            None => TimeFilter::All,
        }
    }

    /// A malformed date string is rejected even when the day window takes
    /// precedence over it.
    pub(crate) fn from_query(days: Option<i64>, date: Option<&str>) -> Result<Self, AppError> {
        let date = date.map(parse_date).transpose()?;
        if let Some(n) = days {
            return Ok(TimeFilter::LastDays(n));
        }
        match date {
            Some(d) => Ok(TimeFilter::Date(d)),
            None => Ok(TimeFilter::All),
        }
    }

    pub(crate) fn apply<'a>(
        &self,
        sessions: &'a [Session],
        now: NaiveDateTime,
    ) -> Vec<&'a Session> {
        match self {
            TimeFilter::All => sessions.iter().collect(),
            TimeFilter::LastDays(n) => {
                let cutoff = now - Duration::days(*n);
                sessions.iter().filter(|s| s.start >= cutoff).collect()
            }
            TimeFilter::Date(d) => sessions.iter().filter(|s| s.date == *d).collect(),
        }
    }
}
