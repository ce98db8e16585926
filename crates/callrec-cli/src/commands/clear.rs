use callrec_core::store::RecordingRepository;

use crate::commands::common::AppContext;
use crate::error::CliError;

pub fn run_clear(confirmed: bool, context: &AppContext) -> Result<(), CliError> {
    if !confirmed {
        return Err(CliError::ClearNotConfirmed);
    }

    let store = context.open_store();
    let count = store.list().len();
    store.remove_all()?;
    println!("Deleted {count} recordings");
    Ok(())
}
