use std::env;
use std::path::{Path, PathBuf};

use callrec_core::format::{format_total_duration, Locale};
use callrec_core::listing::{DateGroup, FormattedRecording};
use callrec_core::stats::RecordingStats;
use callrec_core::store::{FileStore, RecordingStore};
use callrec_core::{AppSettings, CallType, RecordingId};

use crate::config::CliConfig;
use crate::error::CliError;

pub const STORE_DIR_ENV: &str = "CALLREC_STORE_DIR";
pub const LOCALE_ENV: &str = "CALLREC_LOCALE";

/// Resolved location and language for one CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub store_dir: PathBuf,
    pub locale: Locale,
}

impl AppContext {
    pub fn resolve(
        cli_store_dir: Option<PathBuf>,
        cli_locale: Option<Locale>,
    ) -> Result<Self, CliError> {
        let config = CliConfig::load()?;

        let env_store_dir = env::var_os(STORE_DIR_ENV).map(PathBuf::from);
        let store_dir = match pick_store_dir(cli_store_dir, env_store_dir, &config) {
            Some(dir) => dir,
            None => default_store_dir()?,
        };

        let env_locale = match env::var(LOCALE_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(value.parse::<Locale>()?),
            _ => None,
        };
        let locale = pick_locale(cli_locale, env_locale, &config);

        tracing::debug!(store_dir = %store_dir.display(), ?locale, "Resolved CLI context");
        Ok(Self { store_dir, locale })
    }

    pub fn open_store(&self) -> RecordingStore<FileStore> {
        open_store(&self.store_dir)
    }
}

pub fn pick_store_dir(
    cli_store_dir: Option<PathBuf>,
    env_store_dir: Option<PathBuf>,
    config: &CliConfig,
) -> Option<PathBuf> {
    cli_store_dir
        .or(env_store_dir)
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| config.store_dir.clone())
}

pub fn pick_locale(
    cli_locale: Option<Locale>,
    env_locale: Option<Locale>,
    config: &CliConfig,
) -> Locale {
    cli_locale.or(env_locale).or(config.locale).unwrap_or_default()
}

pub fn default_store_dir() -> Result<PathBuf, CliError> {
    dirs::data_dir()
        .map(|dir| dir.join("callrec"))
        .ok_or_else(|| CliError::Config("Failed to resolve CLI data directory".to_string()))
}

pub fn open_store(store_dir: &Path) -> RecordingStore<FileStore> {
    RecordingStore::new(FileStore::new(store_dir))
}

pub fn normalize_recording_identifier(id: &str) -> Result<RecordingId, CliError> {
    if id.trim().is_empty() {
        return Err(CliError::EmptyRecordingId);
    }
    Ok(id.parse()?)
}

pub const fn call_type_marker(call_type: CallType) -> &'static str {
    match call_type {
        CallType::Incoming => "<-",
        CallType::Outgoing => "->",
        CallType::Missed => "x ",
    }
}

pub fn format_recording_line(row: &FormattedRecording) -> String {
    let recording = &row.recording;
    let duration = if row.is_recorded {
        row.formatted_duration.as_str()
    } else {
        "-"
    };
    format!(
        "{}  {}  {:<20}  {:<16}  {:>8}  {} {}",
        recording.id,
        call_type_marker(recording.call_type),
        recording.name,
        recording.number,
        duration,
        row.formatted_date,
        row.formatted_time
    )
}

pub fn format_recording_lines(rows: &[FormattedRecording]) -> Vec<String> {
    rows.iter().map(format_recording_line).collect()
}

pub fn format_group_lines(groups: &[DateGroup]) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", group.label, group.recordings.len()));
        lines.extend(
            group
                .recordings
                .iter()
                .map(|row| format!("  {}", format_recording_line(row))),
        );
    }
    lines
}

pub fn format_stats_lines(stats: &RecordingStats) -> Vec<String> {
    let mut lines = vec![
        format!("Total calls:     {}", stats.total_calls),
        format!(
            "Recorded time:   {}",
            format_total_duration(stats.total_duration)
        ),
        format!("Calls today:     {}", stats.today_calls),
        format!("Contacts:        {}", stats.unique_contacts),
        String::new(),
        "Breakdown".to_string(),
    ];

    for entry in stats.breakdown() {
        lines.push(format!(
            "  {:<9} {:>4}  {:>3}%",
            entry.call_type, entry.count, entry.percentage
        ));
    }

    lines.push(String::new());
    lines.push("This week".to_string());
    let max_calls = stats
        .weekly_data
        .iter()
        .map(|bucket| bucket.calls)
        .max()
        .unwrap_or(0);
    for bucket in &stats.weekly_data {
        lines.push(format!(
            "  {:<10} {:>3}  {}",
            bucket.day,
            bucket.calls,
            weekly_bar(bucket.calls, max_calls)
        ));
    }

    if !stats.top_contacts.is_empty() {
        lines.push(String::new());
        lines.push("Top contacts".to_string());
        for contact in &stats.top_contacts {
            lines.push(format!(
                "  [{}] {:<20} {:<16} {}",
                contact.avatar, contact.name, contact.number, contact.calls
            ));
        }
    }

    lines
}

pub fn weekly_bar(calls: usize, max_calls: usize) -> String {
    const WIDTH: usize = 20;
    if max_calls == 0 {
        return String::new();
    }
    "#".repeat((calls * WIDTH).div_ceil(max_calls))
}

pub fn format_settings_lines(settings: &AppSettings) -> Vec<String> {
    vec![
        format!("auto_record:   {}", settings.auto_record),
        format!("audio_quality: {}", settings.audio_quality),
        format!("theme:         {}", settings.theme),
    ]
}
