//! Filtered read statements for the component catalog.
//!
//! A search is a list of predicates, each a SQL fragment paired with the
//! values bound to its placeholders. Values never appear in the SQL text.

use crate::schema::COMPONENT_COLUMNS;

/// Optional search criteria. Empty fields don't filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentFilter {
    /// Substring matched against `name` or `description`.
    pub keyword: String,
    /// Exact match on `pattern_name`.
    pub pattern: String,
    /// Exact match on `language`.
    pub language: String,
}

impl ComponentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// True when no criterion is set, i.e. the search selects every row.
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.pattern.is_empty() && self.language.is_empty()
    }
}

#[derive(Debug)]
struct Predicate {
    clause: &'static str,
    params: Vec<String>,
}

/// A built SELECT and the values for its `?` placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub sql: String,
    pub params: Vec<String>,
}

/// Build the search statement for a filter.
///
/// Keyword matching uses SQLite `LIKE`, so it follows the store's default
/// collation (ASCII case-insensitive) and `%`/`_` in the keyword act as
/// wildcards. Row order is whatever the store returns.
pub fn build_search(filter: &ComponentFilter) -> SelectStatement {
    let mut predicates = vec![Predicate {
        clause: "1=1",
        params: Vec::new(),
    }];

    if !filter.keyword.is_empty() {
        let pattern = format!("%{}%", filter.keyword);
        predicates.push(Predicate {
            clause: "(name LIKE ? OR description LIKE ?)",
            params: vec![pattern.clone(), pattern],
        });
    }

    if !filter.pattern.is_empty() {
        predicates.push(Predicate {
            clause: "pattern_name = ?",
            params: vec![filter.pattern.clone()],
        });
    }

    if !filter.language.is_empty() {
        predicates.push(Predicate {
            clause: "language = ?",
            params: vec![filter.language.clone()],
        });
    }

    let where_clause = predicates
        .iter()
        .map(|p| p.clause)
        .collect::<Vec<_>>()
        .join(" AND ");
    let params = predicates.into_iter().flat_map(|p| p.params).collect();

    SelectStatement {
        sql: format!("SELECT {COMPONENT_COLUMNS} FROM components WHERE {where_clause}"),
        params,
    }
}

/// Statement selecting a single component by id.
pub fn select_by_id() -> String {
    format!("SELECT {COMPONENT_COLUMNS} FROM components WHERE component_id = ?1")
}

/// Statement selecting every component.
pub fn select_all() -> String {
    format!("SELECT {COMPONENT_COLUMNS} FROM components")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_part(stmt: &SelectStatement) -> &str {
        stmt.sql.split(" WHERE ").nth(1).unwrap()
    }

    #[test]
    fn empty_filter_selects_everything() {
        let stmt = build_search(&ComponentFilter::new());
        assert_eq!(where_part(&stmt), "1=1");
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn keyword_binds_twice_with_wildcards() {
        let stmt = build_search(&ComponentFilter::new().with_keyword("Observer"));
        assert_eq!(
            where_part(&stmt),
            "1=1 AND (name LIKE ? OR description LIKE ?)"
        );
        assert_eq!(stmt.params, vec!["%Observer%", "%Observer%"]);
    }

    #[test]
    fn all_filters_in_fixed_order() {
        let filter = ComponentFilter::new()
            .with_language("Java")
            .with_pattern("Creational")
            .with_keyword("Sing");
        let stmt = build_search(&filter);
        assert_eq!(
            where_part(&stmt),
            "1=1 AND (name LIKE ? OR description LIKE ?) AND pattern_name = ? AND language = ?"
        );
        assert_eq!(stmt.params, vec!["%Sing%", "%Sing%", "Creational", "Java"]);
    }

    #[test]
    fn values_never_reach_sql_text() {
        let filter = ComponentFilter::new()
            .with_keyword("'; DROP TABLE components; --")
            .with_language("x' OR '1'='1");
        let stmt = build_search(&filter);
        assert!(!stmt.sql.contains("DROP"));
        assert!(!stmt.sql.contains("'1'='1"));
        assert_eq!(stmt.params.len(), 3);
    }

    #[test]
    fn filter_is_empty() {
        assert!(ComponentFilter::new().is_empty());
        assert!(!ComponentFilter::new().with_pattern("Structural").is_empty());
    }
}
