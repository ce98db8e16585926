//! Display-ready call list: formatted rows grouped under relative date labels.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::format::{format_duration, format_relative_date, format_time, Locale};
use crate::models::Recording;

/// A recording plus its rendered display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRecording {
    #[serde(flatten)]
    pub recording: Recording,
    pub formatted_duration: String,
    pub formatted_date: String,
    pub formatted_time: String,
    pub is_recorded: bool,
}

impl FormattedRecording {
    pub fn new<Tz: TimeZone>(recording: Recording, now: &DateTime<Tz>, locale: Locale) -> Self {
        Self {
            formatted_duration: format_duration(u64::from(recording.duration)),
            formatted_date: format_relative_date(&recording.date, now, locale),
            formatted_time: format_time(&recording.date, &now.timezone(), locale),
            is_recorded: recording.is_recorded(),
            recording,
        }
    }

    /// Whether the name or number contains `query`
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.recording.name.contains(query) || self.recording.number.contains(query)
    }
}

/// Recordings sharing one relative date label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateGroup {
    pub label: String,
    pub recordings: Vec<FormattedRecording>,
}

/// Format every recording, keeping store order
pub fn format_recordings<Tz: TimeZone>(
    recordings: Vec<Recording>,
    now: &DateTime<Tz>,
    locale: Locale,
) -> Vec<FormattedRecording> {
    recordings
        .into_iter()
        .map(|recording| FormattedRecording::new(recording, now, locale))
        .collect()
}

/// Group rows by `formatted_date`.
///
/// Groups appear in order of their first row; rows keep their input order
/// inside a group.
#[must_use]
pub fn group_by_date(recordings: Vec<FormattedRecording>) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for recording in recordings {
        match groups
            .iter_mut()
            .find(|group| group.label == recording.formatted_date)
        {
            Some(group) => group.recordings.push(recording),
            None => groups.push(DateGroup {
                label: recording.formatted_date.clone(),
                recordings: vec![recording],
            }),
        }
    }

    groups
}

/// Keep rows whose name or number contains `query`, dropping emptied groups.
///
/// An empty query keeps everything.
#[must_use]
pub fn filter_groups(groups: Vec<DateGroup>, query: &str) -> Vec<DateGroup> {
    if query.is_empty() {
        return groups;
    }

    groups
        .into_iter()
        .filter_map(|group| {
            let recordings: Vec<FormattedRecording> = group
                .recordings
                .into_iter()
                .filter(|recording| recording.matches(query))
                .collect();
            (!recordings.is_empty()).then_some(DateGroup {
                label: group.label,
                recordings,
            })
        })
        .collect()
}
