//! Call recording model

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

const ID_PREFIX: &str = "rec";
const ID_SUFFIX_LEN: usize = 9;

const LOCAL_DATE_TIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A unique identifier for a recording: `rec_<unix-millis>_<random suffix>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordingId(String);

impl RecordingId {
    /// Create a new identifier stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self::with_timestamp(Utc::now().timestamp_millis())
    }

    /// Create a new identifier for the given Unix timestamp in milliseconds
    #[must_use]
    pub fn with_timestamp(timestamp_ms: i64) -> Self {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(ID_SUFFIX_LEN)
            .collect();
        Self(format!("{ID_PREFIX}_{timestamp_ms}_{suffix}"))
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordingId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("recording id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Direction of a logged call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallType {
    Incoming,
    Outgoing,
    Missed,
}

impl CallType {
    /// All call types in display order
    pub const ALL: [Self; 3] = [Self::Incoming, Self::Outgoing, Self::Missed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
            Self::Missed => "missed",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CallType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incoming" => Ok(Self::Incoming),
            "outgoing" => Ok(Self::Outgoing),
            "missed" => Ok(Self::Missed),
            other => Err(Error::InvalidInput(format!("unknown call type '{other}'"))),
        }
    }
}

/// A logged call as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    /// Unique identifier
    pub id: RecordingId,
    /// Display name of the counterparty
    pub name: String,
    /// Phone number, stored as entered
    pub number: String,
    /// Call direction
    #[serde(rename = "type")]
    pub call_type: CallType,
    /// Length in seconds; 0 means nothing was recorded
    pub duration: u32,
    /// When the call happened
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub date: DateTime<Utc>,
    /// Local audio asset, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<String>,
}

impl Recording {
    /// Whether any audio was captured for this call
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        self.duration > 0
    }
}

/// A recording that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecording {
    pub name: String,
    pub number: String,
    #[serde(rename = "type")]
    pub call_type: CallType,
    pub duration: u32,
    #[serde(deserialize_with = "deserialize_iso_date")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<String>,
}

impl NewRecording {
    /// Build a recording without an audio asset
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        number: impl Into<String>,
        call_type: CallType,
        duration: u32,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            call_type,
            duration,
            date,
            audio_path: None,
        }
    }

    /// Attach the given id, producing a stored recording
    #[must_use]
    pub fn into_recording(self, id: RecordingId) -> Recording {
        Recording {
            id,
            name: self.name,
            number: self.number,
            call_type: self.call_type,
            duration: self.duration,
            date: self.date,
            audio_path: self.audio_path,
        }
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 with any offset. Date-times without an offset are read
/// in local time; a bare `YYYY-MM-DD` is midnight UTC.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    if let Some(naive) = LOCAL_DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
    {
        let date = Local
            .from_local_datetime(&naive)
            .earliest()
            .map_or_else(|| Utc.from_utc_datetime(&naive), |local| local.with_timezone(&Utc));
        return Some(date);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

fn deserialize_iso_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 date '{raw}'")))
}

/// First character of `name`, or an empty string for an empty name
#[must_use]
pub fn avatar_for(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
