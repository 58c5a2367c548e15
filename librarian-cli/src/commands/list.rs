use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_librarian, print_component_json, print_component_table};

pub(crate) fn run_list(db: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let librarian = open_librarian(db)?;
    let components = librarian.try_list_all()?;

    if json {
        return print_component_json(&components);
    }

    log::info!(
        "{}",
        "Component Catalog".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", librarian.gateway().path().display());
    crate::log_blank();

    if components.is_empty() {
        log::info!("No components yet. Add one with 'component-librarian add'.");
        return Ok(());
    }
    print_component_table(&components);
    crate::log_blank();
    log::info!("{} component(s)", components.len());
    Ok(())
}
