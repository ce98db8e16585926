//! callrec CLI - Browse call recordings from the command line
//!
//! Lists, statistics and settings over the same local store the app uses.

mod cli;
mod commands;
mod config;
mod error;


use clap::Parser;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::add::{run_add, AddArgs};
use crate::commands::clear::run_clear;
use crate::commands::common::AppContext;
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_init, run_config_show};
use crate::commands::delete::run_delete;
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::seed::run_seed;
use crate::commands::settings::run_settings;
use crate::commands::stats::run_stats;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "callrec=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Neither of these needs the store, and `config init` must work even when
    // the existing config cannot be read.
    match &cli.command {
        Some(Commands::Completions { shell, output }) => {
            return run_completions(*shell, output.as_deref());
        }
        Some(Commands::Config {
            command: ConfigCommands::Init { store_dir, locale },
        }) => {
            return run_config_init(
                store_dir.clone().or_else(|| cli.store_dir.clone()),
                locale.or(cli.locale),
            );
        }
        _ => {}
    }

    let context = AppContext::resolve(cli.store_dir, cli.locale)?;

    match cli.command {
        None => run_list(None, false, false, &context)?,
        Some(Commands::List {
            search,
            grouped,
            json,
        }) => run_list(search.as_deref(), grouped, json, &context)?,
        Some(Commands::Add {
            name,
            number,
            call_type,
            duration,
            date,
            audio_path,
        }) => run_add(
            AddArgs {
                name,
                number,
                call_type: call_type.into(),
                duration,
                date,
                audio_path,
            },
            &context,
        )?,
        Some(Commands::Delete { id }) => run_delete(&id, &context)?,
        Some(Commands::Clear { yes }) => run_clear(yes, &context)?,
        Some(Commands::Stats { json }) => run_stats(json, &context)?,
        Some(Commands::Settings { command }) => run_settings(command, &context)?,
        Some(Commands::Seed) => run_seed(&context)?,
        Some(Commands::Export { format, output }) => {
            run_export(format, output.as_deref(), &context)?;
        }
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => run_config_show(&context)?,
        Some(
            Commands::Completions { .. }
            | Commands::Config {
                command: ConfigCommands::Init { .. },
            },
        ) => {}
    }

    Ok(())
}
