use callrec_core::listing::{filter_groups, format_recordings, group_by_date};
use callrec_core::store::RecordingRepository;
use chrono::Local;

use crate::commands::common::{format_group_lines, format_recording_lines, AppContext};
use crate::error::CliError;

pub fn run_list(
    search: Option<&str>,
    grouped: bool,
    as_json: bool,
    context: &AppContext,
) -> Result<(), CliError> {
    let store = context.open_store();
    let rows = format_recordings(store.list(), &Local::now(), context.locale);
    let query = search.map(str::trim).unwrap_or_default();
    let groups = filter_groups(group_by_date(rows), query);

    if as_json {
        if grouped {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        } else {
            let rows: Vec<_> = groups.iter().flat_map(|group| &group.recordings).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        return Ok(());
    }

    if groups.is_empty() {
        println!("No recordings");
        return Ok(());
    }

    let lines = if grouped {
        format_group_lines(&groups)
    } else {
        let rows: Vec<_> = groups
            .into_iter()
            .flat_map(|group| group.recordings)
            .collect();
        format_recording_lines(&rows)
    };
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
