use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use librarian_lib::NewComponent;

use crate::cli_types::AddArgs;
use crate::CliError;

use super::open_librarian;

pub(crate) fn run_add(db: Option<PathBuf>, args: AddArgs) -> Result<(), CliError> {
    let code_snippet = match (&args.code, &args.code_file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let request = NewComponent {
        name: args.name,
        pattern_name: args.pattern,
        pattern_category: args.category,
        language: args.language,
        description: args.description,
        code_snippet,
        author: args.author,
    };

    let librarian = open_librarian(db)?;
    let confirmation = librarian.create(&request)?;
    log::info!(
        "{}",
        confirmation
            .to_string()
            .if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
