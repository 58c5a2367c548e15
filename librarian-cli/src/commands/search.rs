use std::path::PathBuf;

use librarian_catalog::{is_known, LANGUAGES, PATTERN_TYPES};
use librarian_lib::ComponentFilter;

use crate::CliError;

use super::{open_librarian, print_component_json, print_component_table};

pub(crate) fn run_search(
    db: Option<PathBuf>,
    keyword: Option<String>,
    pattern: Option<String>,
    language: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let filter = ComponentFilter {
        keyword: keyword.unwrap_or_default(),
        pattern: pattern.unwrap_or_default(),
        language: language.unwrap_or_default(),
    };

    if !filter.pattern.is_empty() && !is_known(PATTERN_TYPES, &filter.pattern) {
        log::warn!(
            "'{}' is not one of the usual pattern types ({})",
            filter.pattern,
            PATTERN_TYPES.join(", "),
        );
    }
    if !filter.language.is_empty() && !is_known(LANGUAGES, &filter.language) {
        log::warn!(
            "'{}' is not one of the usual languages ({})",
            filter.language,
            LANGUAGES.join(", "),
        );
    }

    let librarian = open_librarian(db)?;
    let matches = librarian.try_search(&filter)?;

    if json {
        return print_component_json(&matches);
    }

    if matches.is_empty() {
        log::info!("No components match.");
        return Ok(());
    }
    print_component_table(&matches);
    crate::log_blank();
    log::info!("{} match(es)", matches.len());
    Ok(())
}
