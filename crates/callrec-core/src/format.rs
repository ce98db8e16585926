//! Display formatting for durations, dates and times.
//!
//! All date helpers take an explicit `now` and compare calendar days in
//! `now`'s time zone.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;
use crate::models::parse_iso_date;

/// Language used for labels and date/time rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Short language code, as accepted by `FromStr`
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    /// Weekday label, Sunday first
    #[must_use]
    pub fn weekday_label(self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match self {
            Self::Arabic => [
                "الأحد",
                "الإثنين",
                "الثلاثاء",
                "الأربعاء",
                "الخميس",
                "الجمعة",
                "السبت",
            ][index],
            Self::English => [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ][index],
        }
    }

    #[must_use]
    pub const fn today_label(self) -> &'static str {
        match self {
            Self::Arabic => "اليوم",
            Self::English => "Today",
        }
    }

    #[must_use]
    pub const fn yesterday_label(self) -> &'static str {
        match self {
            Self::Arabic => "أمس",
            Self::English => "Yesterday",
        }
    }

    const fn meridiem(self, pm: bool) -> &'static str {
        match (self, pm) {
            (Self::Arabic, false) => "ص",
            (Self::Arabic, true) => "م",
            (Self::English, false) => "AM",
            (Self::English, true) => "PM",
        }
    }

    /// Absolute calendar date: `dd/mm/yyyy` in Arabic, `m/d/yyyy` in English
    #[must_use]
    pub fn format_date(self, date: NaiveDate) -> String {
        let layout = match self {
            Self::Arabic => "%d/%m/%Y",
            Self::English => "%-m/%-d/%Y",
        };
        date.format(layout).to_string()
    }

    /// Clock time as `h:MM` plus a meridiem marker
    #[must_use]
    pub fn format_clock(self, hour: u32, minute: u32) -> String {
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{display_hour}:{minute:02} {}", self.meridiem(hour >= 12))
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            other => Err(Error::InvalidInput(format!("unsupported locale '{other}'"))),
        }
    }
}

/// `H:MM:SS` from one hour up, `M:SS` below
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Always `HH:MM:SS`
#[must_use]
pub fn format_total_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Calendar day of `date` in the time zone of `now`
pub fn local_day<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> NaiveDate {
    date.with_timezone(&now.timezone()).date_naive()
}

/// "Today", "Yesterday" or an absolute date
pub fn format_relative_date<Tz: TimeZone>(
    date: &DateTime<Utc>,
    now: &DateTime<Tz>,
    locale: Locale,
) -> String {
    let day = local_day(date, now);
    let today = now.date_naive();

    if day == today {
        locale.today_label().to_string()
    } else if today.checked_sub_days(Days::new(1)) == Some(day) {
        locale.yesterday_label().to_string()
    } else {
        locale.format_date(day)
    }
}

/// Hour and minute of `date` in time zone `tz`
pub fn format_time<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz, locale: Locale) -> String {
    let local = date.with_timezone(tz);
    locale.format_clock(local.hour(), local.minute())
}

/// Parse a user-supplied ISO-8601 timestamp into UTC
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, Error> {
    parse_iso_date(raw).ok_or_else(|| Error::InvalidInput(format!("invalid date '{raw}'")))
}

/// Weekday of `date` using the Sunday-first numbering of the weekly chart
#[must_use]
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}
