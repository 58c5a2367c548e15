//! component-librarian CLI
//!
//! Command-line front end for cataloging reusable code components.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let db = cli.db;
    let result = match cli.command {
        Commands::Add(args) => commands::add::run_add(db, args),
        Commands::Search {
            keyword,
            pattern,
            language,
            json,
        } => commands::search::run_search(db, keyword, pattern, language, json),
        Commands::Delete { id, yes } => commands::delete::run_delete(db, id, yes),
        Commands::List { json } => commands::list::run_list(db, json),
        Commands::Show { id } => commands::show::run_show(db, id),
        Commands::Vocab => {
            commands::vocab::run_vocab();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(db),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetDb { path } => commands::config::run_config_set_db(path),
            ConfigAction::ClearDb => commands::config::run_config_clear_db(),
        },
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// Route `log` output to stdout. Info lines are printed bare since they are
/// the command's normal output; other levels get a prefix.
fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        })
        .init();
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
