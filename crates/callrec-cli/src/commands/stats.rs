use callrec_core::stats::compute_stats_now;
use callrec_core::store::RecordingRepository;

use crate::commands::common::{format_stats_lines, AppContext};
use crate::error::CliError;

pub fn run_stats(as_json: bool, context: &AppContext) -> Result<(), CliError> {
    let recordings = context.open_store().list();
    let stats = compute_stats_now(&recordings, context.locale);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in format_stats_lines(&stats) {
            println!("{line}");
        }
    }

    Ok(())
}
