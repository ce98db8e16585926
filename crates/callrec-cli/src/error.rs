use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] callrec_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Recording ID cannot be empty")]
    EmptyRecordingId,
    #[error("Recording not found: {0}")]
    RecordingNotFound(String),
    #[error("Refusing to delete all recordings without --yes")]
    ClearNotConfirmed,
    #[error("No settings given; pass --auto-record, --audio-quality or --theme")]
    EmptySettingsUpdate,
    #[error("Configuration error: {0}")]
    Config(String),
}
