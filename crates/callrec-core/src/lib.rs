//! callrec-core - Core library for callrec
//!
//! This crate contains the recording models, the key-value backed store,
//! the statistics aggregator and the display formatting helpers used by the
//! callrec interfaces.

pub mod demo;
pub mod error;
pub mod export;
pub mod format;
pub mod listing;
pub mod models;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
pub use models::{AppSettings, CallType, NewRecording, Recording, RecordingId};
