//! Data model types for the component catalog.
//!
//! A component is a reusable code example tagged with the design pattern it
//! illustrates, a category, its language and its author.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Component ───────────────────────────────────────────────────────────────

/// A stored component, as read back from the catalog database.
///
/// `id` and `date_added` are assigned by the store on insert and never change.
/// Every column but `id` and `name` is nullable at the store level, so rows
/// written outside this crate can read back with `None` fields. A
/// `date_added` that is missing or isn't a `YYYY-MM-DD` date is also `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: i64,
    pub name: String,
    pub pattern_name: Option<String>,
    pub pattern_category: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
    pub code_snippet: Option<String>,
    pub author: Option<String>,
    pub date_added: Option<NaiveDate>,
}

impl Component {
    /// Pattern name, or an empty string when unset.
    pub fn pattern(&self) -> &str {
        self.pattern_name.as_deref().unwrap_or_default()
    }

    /// Language, or an empty string when unset.
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or_default()
    }

    /// Author, or an empty string when unset.
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    /// `date_added` as `YYYY-MM-DD`, or an empty string when unknown.
    pub fn date_label(&self) -> String {
        self.date_added
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// The fields written by an insert. The store supplies `id`; the caller
/// supplies `date_added` separately at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewComponent {
    pub name: String,
    pub pattern_name: String,
    pub pattern_category: String,
    pub language: String,
    pub description: String,
    pub code_snippet: String,
    pub author: String,
}

// ── Vocabularies ────────────────────────────────────────────────────────────

/// Pattern types offered when tagging a component.
pub const PATTERN_TYPES: &[&str] = &["Structural", "Behavioral", "Creational"];

/// Component categories offered when tagging a component.
pub const CATEGORIES: &[&str] = &["Container", "Algorithm", "Utility", "Security", "Other"];

/// Languages offered when tagging a component.
pub const LANGUAGES: &[&str] = &["C", "C++", "Python", "Java", "JavaScript"];

/// Check a value against one of the vocabularies (exact, case-sensitive).
///
/// The vocabularies are suggestions: the store accepts any text, so this is
/// only used to warn about values a filter is unlikely to match.
pub fn is_known(vocabulary: &[&str], value: &str) -> bool {
    vocabulary.contains(&value)
}
