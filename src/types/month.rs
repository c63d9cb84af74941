//! Month keys and the three-period comparison window

use chrono::{Datelike, Local, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static MONTH_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").unwrap());

/// A year + 1-based month, canonical text `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a key; `None` unless `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Parse a canonical `YYYY-MM` string. `None` when malformed.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = MONTH_KEY_RE.captures(s.trim())?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        Self::new(year, month)
    }

    /// Parse a month selection, falling back to the current calendar month
    /// when the value is absent or malformed.
    pub fn parse_or_current(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_else(Self::current)
    }

    /// The current calendar month in local time.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    fn first_day(&self) -> NaiveDate {
        // month is validated at construction; the default only covers years
        // outside chrono's representable range
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Previous month, rolling the year backward at January.
    pub fn previous(&self) -> Self {
        let prev = self.first_day() - Months::new(1);
        Self {
            year: prev.year(),
            month: prev.month(),
        }
    }

    /// Same month, previous year.
    pub fn year_ago(&self) -> Self {
        Self {
            year: self.year - 1,
            month: self.month,
        }
    }

    /// Display label, e.g. `Feb 2026`.
    pub fn label(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }

    /// True when `date` (canonical `YYYY-MM-DD`) falls within this month.
    pub fn contains(&self, date: &str) -> bool {
        date.starts_with(&self.to_string())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One comparison period: canonical key plus display label.
#[derive(Debug, Clone, Serialize)]
pub struct MonthPeriod {
    pub key: MonthKey,
    pub label: String,
}

impl From<MonthKey> for MonthPeriod {
    fn from(key: MonthKey) -> Self {
        Self {
            label: key.label(),
            key,
        }
    }
}

/// The three periods the detail view compares: previous month, selected
/// month, and the same month one year earlier.
#[derive(Debug, Clone, Serialize)]
pub struct MonthWindow {
    pub previous: MonthPeriod,
    pub current: MonthPeriod,
    pub year_ago: MonthPeriod,
}

impl MonthWindow {
    pub fn around(current: MonthKey) -> Self {
        Self {
            previous: current.previous().into(),
            current: current.into(),
            year_ago: current.year_ago().into(),
        }
    }
}
