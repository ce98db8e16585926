//! Application settings model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Audio quality used for new recordings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

/// Theme mode options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// Follow system preference
    #[default]
    System,
}

/// Application settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Start recording automatically when a call begins
    pub auto_record: bool,
    /// Encoding quality for new recordings
    pub audio_quality: AudioQuality,
    /// Theme mode
    pub theme: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_record: true,
            audio_quality: AudioQuality::High,
            theme: ThemeMode::System,
        }
    }
}

/// A partial settings update; `None` fields keep their current value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_record: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_quality: Option<AudioQuality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

impl SettingsPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.auto_record.is_none() && self.audio_quality.is_none() && self.theme.is_none()
    }
}

impl AppSettings {
    /// Return a copy with the patch's fields applied on top
    #[must_use]
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        if let Some(auto_record) = patch.auto_record {
            self.auto_record = auto_record;
        }
        if let Some(audio_quality) = patch.audio_quality {
            self.audio_quality = audio_quality;
        }
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        self
    }

    /// Decode a persisted settings object over the defaults.
    ///
    /// Each known key is decoded on its own: a missing key or a value that
    /// does not parse keeps the default. Fails only when `raw` is not a JSON
    /// object at all.
    pub fn from_json_over_defaults(raw: &str) -> Result<Self, Error> {
        let object: Map<String, Value> = serde_json::from_str(raw)?;
        let mut settings = Self::default();

        if let Some(value) = field::<bool>(&object, "autoRecord") {
            settings.auto_record = value;
        }
        if let Some(value) = field::<AudioQuality>(&object, "audioQuality") {
            settings.audio_quality = value;
        }
        if let Some(value) = field::<ThemeMode>(&object, "theme") {
            settings.theme = value;
        }

        Ok(settings)
    }
}

fn field<T: serde::de::DeserializeOwned>(object: &Map<String, Value>, key: &str) -> Option<T> {
    object
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

macro_rules! lowercase_enum_text {
    ($ty:ty, $label:literal, [$($variant:ident => $text:literal),+ $(,)?]) => {
        impl $ty {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(Error::InvalidInput(format!(
                        concat!("unknown ", $label, " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

lowercase_enum_text!(AudioQuality, "audio quality", [
    Low => "low",
    Medium => "medium",
    High => "high",
    Ultra => "ultra",
]);

lowercase_enum_text!(ThemeMode, "theme", [
    Light => "light",
    Dark => "dark",
    System => "system",
]);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_settings_default() {
        let settings = AppSettings::default();
        assert!(settings.auto_record);
        assert_eq!(settings.audio_quality, AudioQuality::High);
        assert_eq!(settings.theme, ThemeMode::System);
    }

    #[test]
    fn test_merge_only_touches_given_fields() {
        let patch = SettingsPatch {
            auto_record: Some(false),
            ..SettingsPatch::default()
        };
        let merged = AppSettings::default().merged(&patch);
        assert_eq!(
            merged,
            AppSettings {
                auto_record: false,
                ..AppSettings::default()
            }
        );
    }

    #[test]
    fn test_partial_object_fills_defaults() {
        let settings = AppSettings::from_json_over_defaults(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert!(settings.auto_record);
        assert_eq!(settings.audio_quality, AudioQuality::High);
    }

    #[test]
    fn test_bad_field_keeps_default() {
        let settings = AppSettings::from_json_over_defaults(
            r#"{"audioQuality":"lossless","autoRecord":false,"extra":1}"#,
        )
        .unwrap();
        assert_eq!(settings.audio_quality, AudioQuality::High);
        assert!(!settings.auto_record);
    }

    #[test]
    fn test_non_object_is_an_error() {
        assert!(AppSettings::from_json_over_defaults("[1,2]").is_err());
        assert!(AppSettings::from_json_over_defaults("{not json").is_err());
    }

    #[test]
    fn test_enum_text_round_trip() {
        assert_eq!("Ultra".parse::<AudioQuality>().unwrap(), AudioQuality::Ultra);
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert!("blue".parse::<ThemeMode>().is_err());
    }
}
