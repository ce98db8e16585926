//! Recording and settings store over a key-value backend

use serde_json::Value;

use crate::error::Result;
use crate::models::{AppSettings, NewRecording, Recording, RecordingId, SettingsPatch};
use crate::store::KeyValueStore;

/// Storage key holding the JSON array of recordings
pub const RECORDINGS_KEY: &str = "call_recordings";
/// Storage key holding the JSON settings object
pub const SETTINGS_KEY: &str = "app_settings";

/// Trait for recording storage operations
pub trait RecordingRepository {
    /// All recordings in stored order, newest insertion first.
    ///
    /// Never fails: an absent or unreadable blob reads as empty.
    fn list(&self) -> Vec<Recording>;

    /// Look up a single recording
    fn get(&self, id: &RecordingId) -> Option<Recording> {
        self.list().into_iter().find(|recording| &recording.id == id)
    }

    /// Assign a fresh id, prepend, persist and return the stored recording
    fn add(&self, recording: NewRecording) -> Result<Recording>;

    /// Remove a recording by id; unknown ids are a no-op
    fn remove(&self, id: &RecordingId) -> Result<()>;

    /// Remove every recording
    fn remove_all(&self) -> Result<()>;
}

/// Trait for settings storage operations
pub trait SettingsRepository {
    /// Stored settings merged over the defaults; never fails
    fn get_settings(&self) -> AppSettings;

    /// Merge `patch` over the current settings and persist the full object
    fn update_settings(&self, patch: &SettingsPatch) -> Result<AppSettings>;
}

/// Key-value implementation of both repositories
#[derive(Debug)]
pub struct RecordingStore<S> {
    backend: S,
}

impl<S: KeyValueStore> RecordingStore<S> {
    /// Create a store over the given backend
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Access the underlying backend
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Raw stored entries for a read-modify-write.
    ///
    /// Backend failures propagate so a write never replaces data it could
    /// not read. Entries are kept as JSON values, so rows that fail to decode
    /// as a `Recording` survive the write untouched.
    fn load_for_write(&self) -> Result<Vec<Value>> {
        Ok(self
            .backend
            .get(RECORDINGS_KEY)?
            .map(|raw| parse_entries(&raw))
            .unwrap_or_default())
    }

    fn save_entries(&self, entries: &[Value]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.backend.put(RECORDINGS_KEY, &raw)
    }
}

/// Split a stored blob into entries; anything but a JSON array reads as empty
fn parse_entries(raw: &str) -> Vec<Value> {
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Stored recordings are unreadable, treating as empty: {error}");
        Vec::new()
    })
}

fn decode_recordings(entries: Vec<Value>) -> Vec<Recording> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(recording) => Some(recording),
            Err(error) => {
                tracing::warn!("Skipping unreadable recording: {error}");
                None
            }
        })
        .collect()
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

impl<S: KeyValueStore> RecordingRepository for RecordingStore<S> {
    fn list(&self) -> Vec<Recording> {
        let raw = match self.backend.get(RECORDINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!("Failed to read recordings, treating as empty: {error}");
                return Vec::new();
            }
        };

        decode_recordings(parse_entries(&raw))
    }

    fn add(&self, recording: NewRecording) -> Result<Recording> {
        let mut entries = self.load_for_write()?;
        let recording = recording.into_recording(RecordingId::new());
        entries.insert(0, serde_json::to_value(&recording)?);
        self.save_entries(&entries)?;

        tracing::debug!(id = %recording.id, total = entries.len(), "Added recording");
        Ok(recording)
    }

    fn remove(&self, id: &RecordingId) -> Result<()> {
        let entries = self.load_for_write()?;
        let before = entries.len();
        let remaining: Vec<Value> = entries
            .into_iter()
            .filter(|entry| entry_id(entry) != Some(id.as_str()))
            .collect();
        self.save_entries(&remaining)?;

        tracing::debug!(%id, removed = before - remaining.len(), "Removed recording");
        Ok(())
    }

    fn remove_all(&self) -> Result<()> {
        self.save_entries(&[])?;
        tracing::debug!("Removed all recordings");
        Ok(())
    }
}

impl<S: KeyValueStore> SettingsRepository for RecordingStore<S> {
    fn get_settings(&self) -> AppSettings {
        let raw = match self.backend.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AppSettings::default(),
            Err(error) => {
                tracing::warn!("Failed to read settings, using defaults: {error}");
                return AppSettings::default();
            }
        };

        AppSettings::from_json_over_defaults(&raw).unwrap_or_else(|error| {
            tracing::warn!("Stored settings are unreadable, using defaults: {error}");
            AppSettings::default()
        })
    }

    fn update_settings(&self, patch: &SettingsPatch) -> Result<AppSettings> {
        let settings = self.get_settings().merged(patch);
        let raw = serde_json::to_string(&settings)?;
        self.backend.put(SETTINGS_KEY, &raw)?;

        tracing::debug!(?settings, "Updated settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{AudioQuality, CallType, ThemeMode};
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::collections::HashSet;

    fn setup() -> RecordingStore<MemoryStore> {
        RecordingStore::new(MemoryStore::new())
    }

    fn sample(name: &str, number: &str) -> NewRecording {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
        NewRecording::new(name, number, CallType::Incoming, 60, date)
    }

    /// Backend whose reads and writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("unavailable".into()))
        }

        fn put(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("unavailable".into()))
        }
    }

    /// In-memory backend whose next `get` fails once.
    #[derive(Default)]
    struct FlakyReads {
        inner: MemoryStore,
        fail_next_get: Cell<bool>,
    }

    impl KeyValueStore for FlakyReads {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_next_get.replace(false) {
                return Err(Error::Storage("read timed out".into()));
            }
            self.inner.get(key)
        }

        fn put(&self, key: &str, value: &str) -> Result<()> {
            self.inner.put(key, value)
        }
    }

    #[test]
    fn test_list_empty_store() {
        let store = setup();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let store = setup();

        let first = store.add(sample("First", "100")).unwrap();
        let second = store.add(sample("Second", "200")).unwrap();
        let third = store.add(sample("Third", "300")).unwrap();

        let listed = store.list();
        let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Third", "Second", "First"]);

        let ids: HashSet<_> = [&first.id, &second.id, &third.id].into_iter().collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(listed[0], third);
    }

    #[test]
    fn test_add_does_not_sort_by_date() {
        let store = setup();
        let mut older = sample("Older", "1");
        older.date -= Duration::days(3);

        store.add(sample("Newer", "2")).unwrap();
        store.add(older).unwrap();

        assert_eq!(store.list()[0].name, "Older");
    }

    #[test]
    fn test_remove() {
        let store = setup();
        let keep = store.add(sample("Keep", "1")).unwrap();
        let gone = store.add(sample("Gone", "2")).unwrap();

        store.remove(&gone.id).unwrap();

        let listed = store.list();
        assert!(listed.iter().all(|r| r.id != gone.id));
        assert_eq!(listed, vec![keep]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let store = setup();
        store.add(sample("A", "1")).unwrap();
        store.add(sample("B", "2")).unwrap();
        let before = store.list();

        store.remove(&"rec_0_missing".parse().unwrap()).unwrap();

        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_all() {
        let store = setup();
        store.add(sample("A", "1")).unwrap();
        store.add(sample("B", "2")).unwrap();

        store.remove_all().unwrap();

        assert!(store.list().is_empty());
        assert_eq!(
            store.backend().get(RECORDINGS_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_list_is_idempotent() {
        let store = setup();
        store.add(sample("A", "1")).unwrap();
        assert_eq!(store.list(), store.list());
    }

    #[test]
    fn test_get_by_id() {
        let store = setup();
        let added = store.add(sample("A", "1")).unwrap();
        assert_eq!(store.get(&added.id), Some(added));
        assert_eq!(store.get(&"rec_0_none".parse().unwrap()), None);
    }

    #[test]
    fn test_corrupt_recordings_read_as_empty() {
        let store = RecordingStore::new(MemoryStore::with_entries([(RECORDINGS_KEY, "{oops")]));
        assert!(store.list().is_empty());

        // The next write replaces the corrupt blob.
        store.add(sample("A", "1")).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_unavailable_backend_degrades_reads() {
        let store = RecordingStore::new(BrokenStore);
        assert!(store.list().is_empty());
        assert_eq!(store.get_settings(), AppSettings::default());
        assert!(store.add(sample("A", "1")).is_err());
    }

    #[test]
    fn test_failed_read_does_not_overwrite_recordings() {
        let store = RecordingStore::new(FlakyReads::default());
        for name in ["A", "B", "C"] {
            store.add(sample(name, "1")).unwrap();
        }
        let before = store.list();

        store.backend().fail_next_get.set(true);
        assert!(store.add(sample("D", "2")).is_err());
        assert_eq!(store.list(), before);

        store.backend().fail_next_get.set(true);
        assert!(store.remove(&before[0].id).is_err());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_unreadable_entry_is_skipped_and_kept() {
        let raw = r#"[
            {"id":"rec_1_good","name":"Sara","number":"1","type":"incoming","duration":5,"date":"2024-03-05T10:30:00Z"},
            {"id":"rec_2_bad","name":"Omar","number":"2","type":"voicemail","duration":5,"date":"2024-03-05T10:30:00Z"}
        ]"#;
        let store = RecordingStore::new(MemoryStore::with_entries([(RECORDINGS_KEY, raw)]));

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id.as_str(), "rec_1_good");

        store.add(sample("New", "3")).unwrap();
        store.remove(&"rec_1_good".parse().unwrap()).unwrap();

        let stored = store.backend().get(RECORDINGS_KEY).unwrap().unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&stored).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["id"], "rec_2_bad");
        assert_eq!(entries[1]["type"], "voicemail");
    }

    #[test]
    fn test_offset_less_dates_are_listed() {
        let raw = r#"[
            {"id":"rec_1_a","name":"Sara","number":"1","type":"incoming","duration":5,"date":"2024-03-05T10:30:00Z"},
            {"id":"rec_2_b","name":"Omar","number":"2","type":"missed","duration":0,"date":"2024-03-05T10:30:00"}
        ]"#;
        let store = RecordingStore::new(MemoryStore::with_entries([(RECORDINGS_KEY, raw)]));
        assert_eq!(store.list().len(), 2);

        store.add(sample("New", "3")).unwrap();
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_default_settings() {
        let store = setup();
        assert_eq!(store.get_settings(), AppSettings::default());
    }

    #[test]
    fn test_update_settings_merges_partial() {
        let store = setup();
        let patch = SettingsPatch {
            auto_record: Some(false),
            ..SettingsPatch::default()
        };

        let returned = store.update_settings(&patch).unwrap();
        let expected = AppSettings {
            auto_record: false,
            ..AppSettings::default()
        };
        assert_eq!(returned, expected);
        assert_eq!(store.get_settings(), expected);
    }

    #[test]
    fn test_update_settings_keeps_earlier_updates() {
        let store = setup();
        store
            .update_settings(&SettingsPatch {
                theme: Some(ThemeMode::Dark),
                ..SettingsPatch::default()
            })
            .unwrap();
        store
            .update_settings(&SettingsPatch {
                audio_quality: Some(AudioQuality::Low),
                ..SettingsPatch::default()
            })
            .unwrap();

        let settings = store.get_settings();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.audio_quality, AudioQuality::Low);
        assert!(settings.auto_record);
    }

    #[test]
    fn test_partial_persisted_settings_fill_defaults() {
        let store = RecordingStore::new(MemoryStore::with_entries([(
            SETTINGS_KEY,
            r#"{"autoRecord":false}"#,
        )]));
        let settings = store.get_settings();
        assert!(!settings.auto_record);
        assert_eq!(settings.theme, ThemeMode::System);
    }

    #[test]
    fn test_corrupt_settings_use_defaults() {
        let store = RecordingStore::new(MemoryStore::with_entries([(SETTINGS_KEY, "nope")]));
        assert_eq!(store.get_settings(), AppSettings::default());
    }

    #[test]
    fn test_file_backed_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let added = {
            let store = RecordingStore::new(crate::store::FileStore::new(dir.path()));
            store.add(sample("Persisted", "555")).unwrap()
        };

        let reopened = RecordingStore::new(crate::store::FileStore::new(dir.path()));
        assert_eq!(reopened.list(), vec![added]);
    }
}
