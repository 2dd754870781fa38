//! Period keys for summary bucketing
//!
//! Expenses are bucketed into calendar months or calendar weeks. A
//! `PeriodKey` is derived from an expense date and never persisted.
//!
//! Week numbering follows the strftime `%W` rule: weeks start on Monday
//! and the days before a year's first Monday form week 0. The same rule
//! is used for bucketing and for filtering, so period listings and
//! period totals can never disagree.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregation mode selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Calendar-month buckets (default)
    #[default]
    Monthly,
    /// Calendar-week buckets
    Weekly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "weekly" | "week" => Ok(Self::Weekly),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical identifier for a summary bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKey {
    /// A calendar month (e.g. July 2025)
    Month { year: i32, month: u32 },
    /// A calendar week, `%W`-numbered 0-53
    Week { year: i32, week: u32 },
}

impl PeriodKey {
    /// Resolve the bucket containing `date` at the given granularity
    pub fn for_date(date: NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Monthly => Self::Month {
                year: date.year(),
                month: date.month(),
            },
            Granularity::Weekly => Self::Week {
                year: date.year(),
                week: week_of_year(date),
            },
        }
    }

    /// The bucket containing today's date
    pub fn current(granularity: Granularity) -> Self {
        Self::for_date(Local::now().date_naive(), granularity)
    }

    /// Which granularity this key belongs to
    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Month { .. } => Granularity::Monthly,
            Self::Week { .. } => Granularity::Weekly,
        }
    }

    /// Human-readable label: "July 2025" or "Week 29 2025".
    ///
    /// The year is always part of the label, so two distinct keys in one
    /// listing never share a label even when week numbers repeat across
    /// year boundaries.
    pub fn label(&self) -> String {
        match self {
            Self::Month { year, month } => {
                format!("{} {}", MONTH_NAMES[(*month - 1) as usize], year)
            }
            Self::Week { year, week } => format!("Week {} {}", week, year),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Week { year, week } => write!(f, "{:04}-W{:02}", year, week),
        }
    }
}

/// `%W` week number: complete weeks since the year's first Monday, with
/// the days before it in week 0
pub fn week_of_year(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_monday()) / 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_key() {
        let key = PeriodKey::for_date(date(2025, 7, 15), Granularity::Monthly);
        assert_eq!(
            key,
            PeriodKey::Month {
                year: 2025,
                month: 7
            }
        );
        assert_eq!(key.label(), "July 2025");
        assert_eq!(key.to_string(), "2025-07");
    }

    #[test]
    fn test_week_zero_before_first_monday() {
        // 2025-01-01 is a Wednesday; the first Monday is Jan 6
        assert_eq!(week_of_year(date(2025, 1, 1)), 0);
        assert_eq!(week_of_year(date(2025, 1, 5)), 0);
        assert_eq!(week_of_year(date(2025, 1, 6)), 1);
    }

    #[test]
    fn test_week_one_when_year_starts_on_monday() {
        // 2024-01-01 is a Monday, so there is no week 0
        assert_eq!(week_of_year(date(2024, 1, 1)), 1);
        assert_eq!(week_of_year(date(2024, 1, 7)), 1);
        assert_eq!(week_of_year(date(2024, 1, 8)), 2);
    }

    #[test]
    fn test_week_key_stays_in_calendar_year() {
        // Dec 31 and Jan 1 land in different years even when they share
        // a Monday-started week; the year keeps their labels distinct.
        let dec = PeriodKey::for_date(date(2024, 12, 31), Granularity::Weekly);
        let jan = PeriodKey::for_date(date(2025, 1, 1), Granularity::Weekly);
        assert_ne!(dec, jan);
        assert_ne!(dec.label(), jan.label());
    }

    #[test]
    fn test_weekly_label_unpadded() {
        let key = PeriodKey::Week {
            year: 2025,
            week: 3,
        };
        assert_eq!(key.label(), "Week 3 2025");
        assert_eq!(key.to_string(), "2025-W03");
    }

    #[test]
    fn test_bucketing_and_filtering_agree() {
        // Every date in a Monday-started week resolves to the same key
        let monday = date(2025, 7, 14);
        let key = PeriodKey::for_date(monday, Granularity::Weekly);
        for offset in 0..7 {
            let d = monday + chrono::Duration::days(offset);
            assert_eq!(PeriodKey::for_date(d, Granularity::Weekly), key);
        }
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!("monthly".parse::<Granularity>(), Ok(Granularity::Monthly));
        assert_eq!("Weekly".parse::<Granularity>(), Ok(Granularity::Weekly));
        assert!("daily".parse::<Granularity>().is_err());
    }
}
