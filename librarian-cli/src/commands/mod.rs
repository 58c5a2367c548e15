pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod vocab;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use librarian_lib::settings::resolve_database_path;
use librarian_lib::{Component, Librarian};

use crate::CliError;

/// Open the catalog at the resolved database path, creating it if needed.
pub(crate) fn open_librarian(db: Option<PathBuf>) -> Result<Librarian, CliError> {
    let db_path = resolve_database_path(db);
    log::debug!("Using catalog database {}", db_path.display());
    Librarian::try_open(&db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open catalog database at {}: {}",
            db_path.display(),
            e
        ))
    })
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

/// Print components as a fixed-width table, one row per component.
pub(crate) fn print_component_table(components: &[Component]) {
    log::info!(
        "{}",
        format!(
            "{:>5}  {:<28} {:<12} {:<12} {:<16} {:<10}",
            "ID", "Name", "Pattern", "Language", "Author", "Added"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for c in components {
        log::info!(
            "{}  {:<28} {:<12} {:<12} {:<16} {}",
            format!("{:>5}", c.id).if_supports_color(Stdout, |t| t.cyan()),
            truncate_str(&c.name, 28),
            truncate_str(c.pattern(), 12),
            truncate_str(c.language(), 12),
            truncate_str(c.author(), 16),
            c.date_label(),
        );
    }
}

/// Print components as pretty JSON on stdout, bypassing the logger so the
/// output stays machine-readable.
pub(crate) fn print_component_json(components: &[Component]) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(components)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate_str("Facade", 10), "Facade");
        assert_eq!(truncate_str("Facade", 6), "Facade");
    }

    #[test]
    fn truncate_long_strings() {
        assert_eq!(truncate_str("Abstract Factory", 10), "Abstrac...");
        assert_eq!(truncate_str("Abstract", 2), "Ab");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate_str("Fábrica Abstracta", 8), "Fábri...");
    }
}
