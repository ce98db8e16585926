use std::path::PathBuf;

use callrec_core::format::Locale;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "callrec")]
#[command(about = "Browse call recordings, statistics and settings from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the recordings store directory
    #[arg(long, global = true, value_name = "PATH")]
    pub store_dir: Option<PathBuf>,

    /// Display language for labels and dates (ar, en)
    #[arg(long, global = true, value_name = "LOCALE")]
    pub locale: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recordings, newest first
    #[command(alias = "ls")]
    List {
        /// Only show calls whose name or number contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Group calls under Today / Yesterday / date headings
        #[arg(long)]
        grouped: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Log a call recording
    #[command(alias = "new")]
    Add {
        /// Counterparty display name
        #[arg(long)]
        name: String,
        /// Counterparty phone number
        #[arg(long)]
        number: String,
        /// Call direction
        #[arg(long = "type", value_enum)]
        call_type: CallTypeArg,
        /// Recorded length in seconds
        #[arg(long, default_value = "0")]
        duration: u32,
        /// Call time as ISO-8601 (defaults to now)
        #[arg(long, value_name = "ISO8601")]
        date: Option<String>,
        /// Path of the stored audio file
        #[arg(long, value_name = "PATH")]
        audio_path: Option<String>,
    },
    /// Delete a recording
    Delete {
        /// Recording ID
        id: String,
    },
    /// Delete every recording
    Clear {
        /// Confirm deleting all recordings
        #[arg(long)]
        yes: bool,
    },
    /// Show call statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change app settings
    Settings {
        #[command(subcommand)]
        command: Option<SettingsCommands>,
    },
    /// Fill an empty store with demo calls
    Seed,
    /// Export recordings
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Configure CLI defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CallTypeArg {
    Incoming,
    Outgoing,
    Missed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AudioQualityArg {
    Low,
    Medium,
    High,
    Ultra,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update one or more settings
    Set {
        /// Record calls automatically (true/false)
        #[arg(long, value_name = "BOOL")]
        auto_record: Option<bool>,
        /// Recording quality
        #[arg(long, value_enum)]
        audio_quality: Option<AudioQualityArg>,
        /// Theme mode
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write default store directory and locale to the config file
    Init {
        /// Store directory to use when --store-dir is not given
        #[arg(long, value_name = "PATH")]
        store_dir: Option<PathBuf>,
        /// Default display language (ar, en)
        #[arg(long, value_name = "LOCALE")]
        locale: Option<Locale>,
    },
    /// Print the resolved configuration
    Show,
}

impl From<CallTypeArg> for callrec_core::CallType {
    fn from(value: CallTypeArg) -> Self {
        match value {
            CallTypeArg::Incoming => Self::Incoming,
            CallTypeArg::Outgoing => Self::Outgoing,
            CallTypeArg::Missed => Self::Missed,
        }
    }
}

impl From<AudioQualityArg> for callrec_core::models::AudioQuality {
    fn from(value: AudioQualityArg) -> Self {
        match value {
            AudioQualityArg::Low => Self::Low,
            AudioQualityArg::Medium => Self::Medium,
            AudioQualityArg::High => Self::High,
            AudioQualityArg::Ultra => Self::Ultra,
        }
    }
}

impl From<ThemeArg> for callrec_core::models::ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::System => Self::System,
        }
    }
}

impl From<ExportFormat> for callrec_core::export::ExportFormat {
    fn from(value: ExportFormat) -> Self {
        match value {
            ExportFormat::Json => Self::Json,
            ExportFormat::Csv => Self::Csv,
        }
    }
}
