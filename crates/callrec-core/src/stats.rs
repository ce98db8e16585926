//! Aggregate statistics over the full recording list.
//!
//! Everything is recomputed from scratch on each call; the data is local and
//! small so no incremental bookkeeping is kept.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, DateTime, Days, Local, TimeZone, Weekday};
use serde::Serialize;

use crate::format::{local_day, weekday_index, Locale};
use crate::models::{avatar_for, CallType, Recording};

/// Maximum number of entries in [`RecordingStats::top_contacts`]
pub const TOP_CONTACTS_LIMIT: usize = 4;

/// A frequently called counterparty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopContact {
    /// Name from the first recording seen for this number
    pub name: String,
    pub number: String,
    pub calls: usize,
    pub avatar: String,
}

/// Call count for one weekday of the trailing week
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyBucket {
    pub weekday: Weekday,
    /// Localized weekday label
    pub day: String,
    pub calls: usize,
}

/// Share of one call type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub call_type: CallType,
    pub count: usize,
    /// Rounded percentage of all calls
    pub percentage: u32,
}

/// Summary of the current recordings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingStats {
    pub total_calls: usize,
    /// Sum of durations in seconds
    pub total_duration: u64,
    pub today_calls: usize,
    pub incoming_calls: usize,
    pub outgoing_calls: usize,
    pub missed_calls: usize,
    /// Distinct phone numbers
    pub unique_contacts: usize,
    pub top_contacts: Vec<TopContact>,
    /// Sunday through Saturday
    pub weekly_data: Vec<WeeklyBucket>,
}

impl RecordingStats {
    /// Count of calls with the given type
    #[must_use]
    pub const fn count_for(&self, call_type: CallType) -> usize {
        match call_type {
            CallType::Incoming => self.incoming_calls,
            CallType::Outgoing => self.outgoing_calls,
            CallType::Missed => self.missed_calls,
        }
    }

    /// Per-type counts and rounded percentages; all zero when empty
    #[must_use]
    pub fn breakdown(&self) -> Vec<BreakdownEntry> {
        CallType::ALL
            .into_iter()
            .map(|call_type| {
                let count = self.count_for(call_type);
                BreakdownEntry {
                    call_type,
                    count,
                    percentage: percentage(count, self.total_calls),
                }
            })
            .collect()
    }
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (part * 100 + total / 2) / total;
    u32::try_from(rounded).unwrap_or(100)
}

/// Compute statistics relative to `now`, in `now`'s time zone
pub fn compute_stats<Tz: TimeZone>(
    recordings: &[Recording],
    now: &DateTime<Tz>,
    locale: Locale,
) -> RecordingStats {
    let today = now.date_naive();
    let days: Vec<_> = recordings
        .iter()
        .map(|recording| local_day(&recording.date, now))
        .collect();

    let count_type = |call_type: CallType| {
        recordings
            .iter()
            .filter(|recording| recording.call_type == call_type)
            .count()
    };

    let weekly_data = (0..7)
        .map(|index| {
            // Most recent date on or before today falling on weekday `index`.
            let back = (weekday_index(today) + 7 - index) % 7;
            let day = today
                .checked_sub_days(Days::new(u64::from(back)))
                .unwrap_or(today);
            let weekday = day.weekday();
            WeeklyBucket {
                weekday,
                day: locale.weekday_label(weekday).to_string(),
                calls: days.iter().filter(|&&d| d == day).count(),
            }
        })
        .collect();

    RecordingStats {
        total_calls: recordings.len(),
        total_duration: recordings
            .iter()
            .map(|recording| u64::from(recording.duration))
            .sum(),
        today_calls: days.iter().filter(|&&d| d == today).count(),
        incoming_calls: count_type(CallType::Incoming),
        outgoing_calls: count_type(CallType::Outgoing),
        missed_calls: count_type(CallType::Missed),
        unique_contacts: recordings
            .iter()
            .map(|recording| recording.number.as_str())
            .collect::<HashSet<_>>()
            .len(),
        top_contacts: top_contacts(recordings, TOP_CONTACTS_LIMIT),
        weekly_data,
    }
}

/// Compute statistics relative to the local clock
pub fn compute_stats_now(recordings: &[Recording], locale: Locale) -> RecordingStats {
    compute_stats(recordings, &Local::now(), locale)
}

/// Most frequent numbers, descending by count.
///
/// Ties keep the order in which numbers first appear in `recordings`.
#[must_use]
pub fn top_contacts(recordings: &[Recording], limit: usize) -> Vec<TopContact> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut contacts: Vec<TopContact> = Vec::new();

    for recording in recordings {
        if let Some(&position) = positions.get(recording.number.as_str()) {
            contacts[position].calls += 1;
        } else {
            positions.insert(&recording.number, contacts.len());
            contacts.push(TopContact {
                name: recording.name.clone(),
                number: recording.number.clone(),
                calls: 1,
                avatar: avatar_for(&recording.name),
            });
        }
    }

    contacts.sort_by(|a, b| b.calls.cmp(&a.calls));
    contacts.truncate(limit);
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewRecording, RecordingId};
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    // Tuesday
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap()
    }

    fn recording(name: &str, number: &str, call_type: CallType, date: DateTime<Utc>) -> Recording {
        NewRecording::new(name, number, call_type, 60, date).into_recording(RecordingId::new())
    }

    #[test]
    fn test_empty_stats() {
        let stats = compute_stats(&[], &now(), Locale::English);
        assert_eq!(stats.total_calls, 0);
        assert_eq!(stats.total_duration, 0);
        assert!(stats.top_contacts.is_empty());
        assert_eq!(stats.weekly_data.len(), 7);
        assert!(stats.weekly_data.iter().all(|bucket| bucket.calls == 0));
        assert!(stats.breakdown().iter().all(|entry| entry.percentage == 0));
    }

    #[test]
    fn test_counts_by_type_and_today() {
        let today = now() - Duration::hours(2);
        let recordings = vec![
            recording("A", "1", CallType::Incoming, today),
            recording("B", "2", CallType::Outgoing, today),
            recording("C", "3", CallType::Missed, today),
        ];

        let stats = compute_stats(&recordings, &now(), Locale::English);
        assert_eq!(stats.total_calls, 3);
        assert_eq!(stats.today_calls, 3);
        assert_eq!(stats.incoming_calls, 1);
        assert_eq!(stats.outgoing_calls, 1);
        assert_eq!(stats.missed_calls, 1);
        assert_eq!(stats.total_duration, 180);
        assert_eq!(stats.unique_contacts, 3);
    }

    #[test]
    fn test_top_contacts_group_by_number() {
        let date = now();
        let recordings = vec![
            recording("Ahmed Mohammed", "+966501234567", CallType::Incoming, date),
            recording("Sara", "+966559876543", CallType::Outgoing, date),
            recording("Ahmad M.", "+966501234567", CallType::Missed, date),
        ];

        let stats = compute_stats(&recordings, &now(), Locale::English);
        assert_eq!(stats.unique_contacts, 2);
        assert_eq!(
            stats.top_contacts[0],
            TopContact {
                name: "Ahmed Mohammed".to_string(),
                number: "+966501234567".to_string(),
                calls: 2,
                avatar: "A".to_string(),
            }
        );
        assert_eq!(stats.top_contacts[1].calls, 1);
    }

    #[test]
    fn test_top_contacts_limit_and_tie_order() {
        let date = now();
        let recordings: Vec<Recording> = ["5", "1", "2", "3", "4", "5"]
            .iter()
            .map(|number| recording(number, number, CallType::Incoming, date))
            .collect();

        let top = top_contacts(&recordings, TOP_CONTACTS_LIMIT);
        let numbers: Vec<&str> = top.iter().map(|c| c.number.as_str()).collect();
        assert_eq!(numbers, vec!["5", "1", "2", "3"]);
    }

    #[test]
    fn test_weekly_data_counts_trailing_week() {
        let recordings = vec![
            // Tuesday (today)
            recording("A", "1", CallType::Incoming, now() - Duration::hours(1)),
            // Monday
            recording("B", "2", CallType::Incoming, now() - Duration::days(1)),
            recording("C", "3", CallType::Incoming, now() - Duration::days(1)),
            // Wednesday of the previous week: inside the window
            recording("D", "4", CallType::Incoming, now() - Duration::days(6)),
            // Tuesday one week ago: outside the window
            recording("E", "5", CallType::Incoming, now() - Duration::days(7)),
        ];

        let stats = compute_stats(&recordings, &now(), Locale::English);
        let calls: Vec<usize> = stats.weekly_data.iter().map(|b| b.calls).collect();
        assert_eq!(calls, vec![0, 2, 1, 1, 0, 0, 0]);

        let labels: Vec<&str> = stats.weekly_data.iter().map(|b| b.day.as_str()).collect();
        assert_eq!(labels[0], "Sunday");
        assert_eq!(labels[6], "Saturday");
        assert_eq!(stats.weekly_data[2].weekday, Weekday::Tue);
    }

    #[test]
    fn test_breakdown_percentages() {
        let date = now();
        let recordings = vec![
            recording("A", "1", CallType::Incoming, date),
            recording("B", "2", CallType::Incoming, date),
            recording("C", "3", CallType::Outgoing, date),
        ];

        let breakdown = compute_stats(&recordings, &now(), Locale::English).breakdown();
        let shares: Vec<(CallType, usize, u32)> = breakdown
            .iter()
            .map(|e| (e.call_type, e.count, e.percentage))
            .collect();
        assert_eq!(
            shares,
            vec![
                (CallType::Incoming, 2, 67),
                (CallType::Outgoing, 1, 33),
                (CallType::Missed, 0, 0),
            ]
        );
    }
}
