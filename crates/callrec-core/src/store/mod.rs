//! Persistence layer for callrec
//!
//! Recordings and settings live as two JSON blobs in a key-value medium.
//! The medium is injected through [`KeyValueStore`] so the same store logic
//! runs over memory in tests and over files on a device.

mod backend;
mod recording_store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use recording_store::{
    RecordingRepository, RecordingStore, SettingsRepository, RECORDINGS_KEY, SETTINGS_KEY,
};
