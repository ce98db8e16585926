use callrec_core::format::parse_date;
use callrec_core::store::RecordingRepository;
use callrec_core::{CallType, NewRecording};
use chrono::Utc;

use crate::commands::common::AppContext;
use crate::error::CliError;

pub struct AddArgs {
    pub name: String,
    pub number: String,
    pub call_type: CallType,
    pub duration: u32,
    pub date: Option<String>,
    pub audio_path: Option<String>,
}

pub fn build_new_recording(args: AddArgs) -> Result<NewRecording, CliError> {
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Utc::now(),
    };

    let mut recording = NewRecording::new(
        args.name.trim(),
        args.number.trim(),
        args.call_type,
        args.duration,
        date,
    );
    recording.audio_path = args
        .audio_path
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty());
    Ok(recording)
}

pub fn run_add(args: AddArgs, context: &AppContext) -> Result<(), CliError> {
    let recording = build_new_recording(args)?;
    let stored = context.open_store().add(recording)?;
    println!("{}", stored.id);
    Ok(())
}
