use std::path::PathBuf;

use callrec_core::format::Locale;
use callrec_core::store::KeyValueStore;

use crate::commands::common::AppContext;
use crate::config::{config_path, config_store, CliConfig};
use crate::error::CliError;

pub fn run_config_init(
    store_dir: Option<PathBuf>,
    locale: Option<Locale>,
) -> Result<(), CliError> {
    let store = config_store()?;
    let updated = init_config_in(&store, store_dir, locale)?;

    let path = config_path(&store)?;
    if updated {
        println!("Config written to {}", path.display());
    } else {
        println!("Config unchanged at {}", path.display());
    }
    Ok(())
}

/// Apply `config init` to the config held in `store`.
///
/// An unreadable config is replaced rather than reported, since this is the
/// command that repairs it. Returns whether the stored config changed.
pub fn init_config_in(
    store: &impl KeyValueStore,
    store_dir: Option<PathBuf>,
    locale: Option<Locale>,
) -> Result<bool, CliError> {
    let (mut config, replaced) = match CliConfig::load_from(store) {
        Ok(config) => (config, false),
        Err(error) => {
            tracing::warn!("Replacing unreadable CLI config: {error}");
            (CliConfig::default(), true)
        }
    };

    let updated = apply_config_init(&mut config, store_dir, locale) || replaced;
    config.save_to(store)?;
    Ok(updated)
}

/// Apply `config init` flags, returning whether anything changed
pub fn apply_config_init(
    config: &mut CliConfig,
    store_dir: Option<PathBuf>,
    locale: Option<Locale>,
) -> bool {
    let before = config.clone();
    if let Some(dir) = store_dir.filter(|dir| !dir.as_os_str().is_empty()) {
        config.store_dir = Some(dir);
    }
    if let Some(locale) = locale {
        config.locale = Some(locale);
    }
    *config != before
}

pub fn run_config_show(context: &AppContext) -> Result<(), CliError> {
    let path = config_path(&config_store()?)?;
    println!("config:    {}", path.display());
    println!("store_dir: {}", context.store_dir.display());
    println!("locale:    {}", context.locale.code());
    Ok(())
}
