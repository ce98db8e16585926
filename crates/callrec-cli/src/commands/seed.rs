use callrec_core::demo::seed_demo_data;
use chrono::Utc;

use crate::commands::common::AppContext;
use crate::error::CliError;

pub fn run_seed(context: &AppContext) -> Result<(), CliError> {
    let added = seed_demo_data(&context.open_store(), Utc::now())?;
    if added == 0 {
        println!("Store already has recordings; nothing seeded");
    } else {
        println!("Seeded {added} demo recordings");
    }
    Ok(())
}
