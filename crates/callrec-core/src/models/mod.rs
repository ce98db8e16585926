//! Data models for callrec

mod recording;
mod settings;

pub use recording::{avatar_for, parse_iso_date, CallType, NewRecording, Recording, RecordingId};
pub use settings::{AppSettings, AudioQuality, SettingsPatch, ThemeMode};
