use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use librarian_catalog::{CATEGORIES, LANGUAGES, PATTERN_TYPES};

pub(crate) fn run_vocab() {
    for (title, values) in [
        ("Pattern types", PATTERN_TYPES),
        ("Categories", CATEGORIES),
        ("Languages", LANGUAGES),
    ] {
        log::info!("{}:", title.if_supports_color(Stdout, |t| t.bold()));
        log::info!("  {}", values.join(", "));
    }
}
