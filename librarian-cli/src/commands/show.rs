use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_librarian;

pub(crate) fn run_show(db: Option<PathBuf>, id: String) -> Result<(), CliError> {
    let librarian = open_librarian(db)?;
    let c = librarian.get(id)?;

    log::info!(
        "{} {}",
        c.name.if_supports_color(Stdout, |t| t.bold()),
        format!("(#{})", c.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Pattern:     {}", c.pattern());
    log::info!(
        "  Category:    {}",
        c.pattern_category.as_deref().unwrap_or_default()
    );
    log::info!("  Language:    {}", c.language());
    log::info!("  Author:      {}", c.author());
    log::info!("  Added:       {}", c.date_label());

    if let Some(description) = c.description.as_deref().filter(|d| !d.is_empty()) {
        crate::log_blank();
        log::info!("{}", description);
    }

    crate::log_blank();
    log::info!("{}", "Code:".if_supports_color(Stdout, |t| t.cyan()));
    for line in c.code_snippet.as_deref().unwrap_or_default().lines() {
        log::info!("    {line}");
    }
    Ok(())
}
