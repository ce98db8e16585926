use std::path::Path;

use callrec_core::export::render_recordings_export;
use callrec_core::store::RecordingRepository;

use crate::cli::ExportFormat;
use crate::commands::common::AppContext;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    context: &AppContext,
) -> Result<(), CliError> {
    let recordings = context.open_store().list();
    let rendered = render_recordings_export(&recordings, format.into())?;

    if let Some(path) = output_path {
        std::fs::write(path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
