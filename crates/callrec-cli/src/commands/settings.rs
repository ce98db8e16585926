use callrec_core::models::SettingsPatch;
use callrec_core::store::SettingsRepository;

use crate::cli::SettingsCommands;
use crate::commands::common::{format_settings_lines, AppContext};
use crate::error::CliError;

pub fn run_settings(
    command: Option<SettingsCommands>,
    context: &AppContext,
) -> Result<(), CliError> {
    match command.unwrap_or(SettingsCommands::Show { json: false }) {
        SettingsCommands::Show { json } => run_settings_show(json, context),
        SettingsCommands::Set {
            auto_record,
            audio_quality,
            theme,
        } => {
            let patch = SettingsPatch {
                auto_record,
                audio_quality: audio_quality.map(Into::into),
                theme: theme.map(Into::into),
            };
            run_settings_set(&patch, context)
        }
    }
}

pub fn run_settings_show(as_json: bool, context: &AppContext) -> Result<(), CliError> {
    let settings = context.open_store().get_settings();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        for line in format_settings_lines(&settings) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn run_settings_set(patch: &SettingsPatch, context: &AppContext) -> Result<(), CliError> {
    if patch.is_empty() {
        return Err(CliError::EmptySettingsUpdate);
    }

    let settings = context.open_store().update_settings(patch)?;
    for line in format_settings_lines(&settings) {
        println!("{line}");
    }
    Ok(())
}
