//! Recording export helpers shared by all clients.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::Recording;

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Render recordings as a pretty-printed JSON array in the persisted layout.
pub fn render_json_export(recordings: &[Recording]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(recordings)
}

/// Render recordings as CSV with a header row.
#[must_use]
pub fn render_csv_export(recordings: &[Recording]) -> String {
    let mut output = String::from("id,name,number,type,duration,date\n");

    for recording in recordings {
        let _ = writeln!(
            output,
            "{},{},{},{},{},{}",
            csv_field(recording.id.as_str()),
            csv_field(&recording.name),
            csv_field(&recording.number),
            recording.call_type,
            recording.duration,
            recording.date.to_rfc3339(),
        );
    }

    output
}

/// Render recordings based on selected export format.
pub fn render_recordings_export(
    recordings: &[Recording],
    format: ExportFormat,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(recordings),
        ExportFormat::Csv => Ok(render_csv_export(recordings)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("callrec-export-{timestamp_ms}.{}", format.extension())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
