use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use librarian_lib::settings::{self, Settings};

use crate::CliError;

/// Show the settings file and which database path is in effect.
pub(crate) fn run_config_show(db: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings::settings_path();
    let saved = Settings::load_or_default(&path);

    log::info!(
        "{}",
        "Component Librarian Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if db.is_some() {
        "--db"
    } else if saved.database_path().is_some() {
        "settings"
    } else {
        "default"
    };
    let resolved = settings::resolve_database_path(db);
    log::info!(
        "  Database:      {} {}",
        resolved.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
    );

    if path.exists() {
        let contents = saved
            .to_toml()
            .map_err(|e| CliError::config(format!("Failed to render settings: {e}")))?;
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {line}");
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save a default database path.
pub(crate) fn run_config_set_db(path: PathBuf) -> Result<(), CliError> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    settings::save_database_path(Some(&path))
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
    log::info!(
        "Default database set to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Forget the saved database path.
pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    settings::save_database_path(None)
        .map_err(|e| CliError::config(format!("Failed to save settings: {e}")))?;
    log::info!("Saved database path cleared.");
    Ok(())
}
