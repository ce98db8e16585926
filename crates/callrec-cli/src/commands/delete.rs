use callrec_core::store::RecordingRepository;

use crate::commands::common::{normalize_recording_identifier, AppContext};
use crate::error::CliError;

pub fn run_delete(id: &str, context: &AppContext) -> Result<(), CliError> {
    let id = normalize_recording_identifier(id)?;
    let store = context.open_store();

    if store.get(&id).is_none() {
        return Err(CliError::RecordingNotFound(id.to_string()));
    }

    store.remove(&id)?;
    println!("{id}");
    Ok(())
}
