//! Validation and orchestration between a front end and the catalog store.
//!
//! Every operation is a single stateless request/response. Mutations are
//! validated first; nothing reaches the [`Gateway`] until the input passes.

use std::fmt;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use librarian_catalog::{Component, NewComponent};
use librarian_db::{ComponentFilter, Gateway};

use crate::error::{LibrarianError, ValidationError};

/// Successful outcome of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Saved,
    Deleted,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::Saved => f.write_str("Component saved successfully!"),
            Confirmation::Deleted => f.write_str("Component deleted successfully!"),
        }
    }
}

/// A component id as a front end supplies it: already numeric, or raw text
/// from an input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef {
    Id(i64),
    Text(String),
}

impl ComponentRef {
    /// The numeric id. Text is parsed after trimming surrounding whitespace.
    pub fn resolve(&self) -> Result<i64, ValidationError> {
        match self {
            ComponentRef::Id(id) => Ok(*id),
            ComponentRef::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| ValidationError::InvalidId),
        }
    }
}

impl From<i64> for ComponentRef {
    fn from(id: i64) -> Self {
        ComponentRef::Id(id)
    }
}

impl From<&str> for ComponentRef {
    fn from(text: &str) -> Self {
        ComponentRef::Text(text.to_string())
    }
}

impl From<String> for ComponentRef {
    fn from(text: String) -> Self {
        ComponentRef::Text(text)
    }
}

/// Check the required fields, in order, stopping at the first failure:
/// name, code snippet, pattern, language.
///
/// Name and code must have non-whitespace content; pattern and language
/// only need to be non-empty.
pub fn validate(request: &NewComponent) -> Result<(), ValidationError> {
    if request.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if request.code_snippet.trim().is_empty() {
        return Err(ValidationError::CodeRequired);
    }
    if request.pattern_name.is_empty() {
        return Err(ValidationError::PatternRequired);
    }
    if request.language.is_empty() {
        return Err(ValidationError::LanguageRequired);
    }
    Ok(())
}

/// Trim the free-text fields. Pattern, category and language come from
/// fixed choices and are stored as given.
pub fn normalize(request: &NewComponent) -> NewComponent {
    NewComponent {
        name: request.name.trim().to_string(),
        pattern_name: request.pattern_name.clone(),
        pattern_category: request.pattern_category.clone(),
        language: request.language.clone(),
        description: request.description.trim().to_string(),
        code_snippet: request.code_snippet.trim().to_string(),
        author: request.author.trim().to_string(),
    }
}

/// Convert an operation result into the `(success, message)` pair a
/// dialog-style front end displays.
pub fn feedback(result: &Result<Confirmation, LibrarianError>) -> (bool, String) {
    match result {
        Ok(confirmation) => (true, confirmation.to_string()),
        Err(e) => (false, e.to_string()),
    }
}

/// The creation date stamped on new components.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Orchestration layer over an owned [`Gateway`].
#[derive(Debug, Clone)]
pub struct Librarian {
    gateway: Gateway,
}

impl Librarian {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Open the catalog at `path`. Schema errors are logged, not returned.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Gateway::open(path))
    }

    pub fn try_open(path: impl Into<PathBuf>) -> Result<Self, LibrarianError> {
        Ok(Self::new(Gateway::try_open(path)?))
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Validate, normalize, date-stamp and insert a component.
    pub fn create(&self, request: &NewComponent) -> Result<Confirmation, LibrarianError> {
        validate(request)?;
        let component = normalize(request);
        if self.gateway.insert_component(&component, today()) {
            log::debug!("Saved component '{}'", component.name);
            Ok(Confirmation::Saved)
        } else {
            Err(LibrarianError::SaveFailed)
        }
    }

    /// Components matching `filter`. A store error also yields an empty list;
    /// use [`Librarian::try_search`] to tell the two apart.
    pub fn search(&self, filter: &ComponentFilter) -> Vec<Component> {
        self.gateway.search_components(filter)
    }

    pub fn try_search(&self, filter: &ComponentFilter) -> Result<Vec<Component>, LibrarianError> {
        Ok(self.gateway.try_search_components(filter)?)
    }

    /// Delete by id.
    ///
    /// Succeeds for ids that don't exist; the store doesn't report whether a
    /// row was removed.
    pub fn delete(&self, id: impl Into<ComponentRef>) -> Result<Confirmation, LibrarianError> {
        let id = id.into().resolve()?;
        if self.gateway.delete_component(id) {
            log::debug!("Deleted component {id}");
            Ok(Confirmation::Deleted)
        } else {
            Err(LibrarianError::DeleteFailed)
        }
    }

    /// Every component, unfiltered. Empty on store error.
    pub fn list_all(&self) -> Vec<Component> {
        self.gateway.all_components()
    }

    pub fn try_list_all(&self) -> Result<Vec<Component>, LibrarianError> {
        Ok(self.gateway.try_all_components()?)
    }

    /// A single component by id.
    pub fn get(&self, id: impl Into<ComponentRef>) -> Result<Component, LibrarianError> {
        let id = id.into().resolve()?;
        self.gateway
            .try_find_component(id)?
            .ok_or(LibrarianError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewComponent {
        NewComponent {
            name: "Singleton".to_string(),
            pattern_name: "Creational".to_string(),
            pattern_category: "Utility".to_string(),
            language: "Java".to_string(),
            description: "desc".to_string(),
            code_snippet: "class S{}".to_string(),
            author: "Alice".to_string(),
        }
    }

    #[test]
    fn validation_order_short_circuits() {
        let mut r = request();
        r.name = "   ".to_string();
        r.code_snippet = String::new();
        r.language = String::new();
        assert_eq!(validate(&r), Err(ValidationError::NameRequired));

        r.name = "x".to_string();
        assert_eq!(validate(&r), Err(ValidationError::CodeRequired));

        r.code_snippet = "\n code \t".to_string();
        r.pattern_name = String::new();
        assert_eq!(validate(&r), Err(ValidationError::PatternRequired));

        r.pattern_name = "Structural".to_string();
        assert_eq!(validate(&r), Err(ValidationError::LanguageRequired));

        r.language = "C".to_string();
        assert_eq!(validate(&r), Ok(()));
    }

    #[test]
    fn normalize_trims_free_text_only() {
        let mut r = request();
        r.name = "  Singleton ".to_string();
        r.description = " desc\n".to_string();
        r.code_snippet = "\tclass S{}  ".to_string();
        r.author = " Alice ".to_string();
        r.language = " Java".to_string();

        let n = normalize(&r);
        assert_eq!(n.name, "Singleton");
        assert_eq!(n.description, "desc");
        assert_eq!(n.code_snippet, "class S{}");
        assert_eq!(n.author, "Alice");
        assert_eq!(n.language, " Java");
    }

    #[test]
    fn component_ref_parsing() {
        assert_eq!(ComponentRef::from(42).resolve(), Ok(42));
        assert_eq!(ComponentRef::from("17").resolve(), Ok(17));
        assert_eq!(ComponentRef::from(" 17 ").resolve(), Ok(17));
        assert_eq!(ComponentRef::from("-3").resolve(), Ok(-3));
        assert_eq!(
            ComponentRef::from("abc").resolve(),
            Err(ValidationError::InvalidId)
        );
        assert_eq!(
            ComponentRef::from("").resolve(),
            Err(ValidationError::InvalidId)
        );
        assert_eq!(
            ComponentRef::from("1.5".to_string()).resolve(),
            Err(ValidationError::InvalidId)
        );
    }

    #[test]
    fn feedback_pairs() {
        assert_eq!(
            feedback(&Ok(Confirmation::Saved)),
            (true, "Component saved successfully!".to_string())
        );
        assert_eq!(
            feedback(&Err(ValidationError::InvalidId.into())),
            (false, "Invalid component ID.".to_string())
        );
        assert_eq!(
            feedback(&Err(LibrarianError::SaveFailed)),
            (false, "Database error occurred.".to_string())
        );
    }
}
