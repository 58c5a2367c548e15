use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_librarian;

pub(crate) fn run_delete(db: Option<PathBuf>, id: String, yes: bool) -> Result<(), CliError> {
    let librarian = open_librarian(db)?;

    // Name the component in the prompt when it can be found. A bad id is
    // reported before asking anything.
    let label = match librarian.get(id.as_str()) {
        Ok(component) => format!("'{}' (#{})", component.name, component.id),
        Err(e) if e.is_validation() => return Err(e.into()),
        Err(_) => format!("#{}", id.trim()),
    };

    if !yes && !confirm(&format!("Delete component {label}?"))? {
        log::info!("Cancelled.");
        return Ok(());
    }

    let confirmation = librarian.delete(id)?;
    log::info!(
        "{}",
        confirmation
            .to_string()
            .if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but "y"/"yes" means no.
fn confirm(question: &str) -> Result<bool, CliError> {
    print!("{question} [y/N]: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
