//! Single execution path for every statement against the catalog file.
//!
//! Each call opens a connection, runs exactly one statement in autocommit
//! mode, and drops the connection before returning. The sentinel methods
//! (`execute`, `insert_component`, `search_components`, ...) log failures and
//! return an empty list or `false`; the `try_*` methods return the error.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use librarian_catalog::{Component, NewComponent};
use rusqlite::types::{ToSql, ValueRef};
use rusqlite::{params, Row};
use thiserror::Error;

use crate::query::{self, ComponentFilter};
use crate::schema::{self, SCHEMA_SQL};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Whether a statement produces rows or changes the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Read,
    Write,
}

/// Result of a statement run through the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    Rows(Vec<Component>),
    Written(bool),
}

impl Execution {
    /// The rows of a read; empty for a write.
    pub fn into_rows(self) -> Vec<Component> {
        match self {
            Execution::Rows(rows) => rows,
            Execution::Written(_) => Vec::new(),
        }
    }

    /// Whether a write succeeded. Reads always report `false`.
    pub fn written(&self) -> bool {
        matches!(self, Execution::Written(true))
    }

    fn failed(mode: ExecMode) -> Self {
        match mode {
            ExecMode::Read => Execution::Rows(Vec::new()),
            ExecMode::Write => Execution::Written(false),
        }
    }
}

/// Owner of the catalog file location.
///
/// Holds only the path; no connection outlives a single call.
#[derive(Debug, Clone)]
pub struct Gateway {
    path: PathBuf,
}

impl Gateway {
    /// Open the catalog at `path`, creating the table if it's missing.
    ///
    /// A failure to create the table is logged; later calls will report
    /// their own failures through the usual sentinels.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let gateway = Self { path: path.into() };
        gateway.execute(SCHEMA_SQL, &[], ExecMode::Write);
        gateway
    }

    /// Like [`Gateway::open`], but returns the schema error instead of logging it.
    pub fn try_open(path: impl Into<PathBuf>) -> Result<Self, GatewayError> {
        let gateway = Self { path: path.into() };
        gateway.try_execute(SCHEMA_SQL, &[], ExecMode::Write)?;
        log::debug!("Catalog ready at {}", gateway.path.display());
        Ok(gateway)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run one statement. Failures are logged and turned into
    /// `Rows(vec![])` for reads or `Written(false)` for writes.
    ///
    /// Every row of a [`ExecMode::Read`] is mapped to a [`Component`] by
    /// column name, so reads must select the full
    /// [`COMPONENT_COLUMNS`](crate::schema::COMPONENT_COLUMNS) list. Any
    /// other projection (`COUNT(*)`, a single column, ...) fails to map and
    /// comes back as `Rows(vec![])`.
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql], mode: ExecMode) -> Execution {
        match self.try_execute(sql, params, mode) {
            Ok(execution) => execution,
            Err(e) => {
                log::error!("Database error: {e}");
                Execution::failed(mode)
            }
        }
    }

    /// Run one statement and return any store error.
    ///
    /// Read statements must select
    /// [`COMPONENT_COLUMNS`](crate::schema::COMPONENT_COLUMNS); a projection
    /// missing any of them is an error here rather than an empty list.
    pub fn try_execute(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
        mode: ExecMode,
    ) -> Result<Execution, GatewayError> {
        log::debug!("{mode:?} with {} bound value(s): {}", params.len(), sql.trim());
        let conn = schema::connect(&self.path)?;
        match mode {
            ExecMode::Read => {
                let mut stmt = conn.prepare(sql)?;
                let rows = stmt.query_map(params, row_to_component)?;
                let components = rows.collect::<Result<Vec<_>, _>>()?;
                Ok(Execution::Rows(components))
            }
            ExecMode::Write => {
                conn.execute(sql, params)?;
                Ok(Execution::Written(true))
            }
        }
    }

    // ── Writes ──────────────────────────────────────────────────────────────

    /// Insert one component stamped with `date_added`.
    pub fn insert_component(&self, component: &NewComponent, date_added: NaiveDate) -> bool {
        self.execute(
            "INSERT INTO components (name, pattern_name, pattern_category, language,
                 description, code_snippet, author, date_added)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                component.name,
                component.pattern_name,
                component.pattern_category,
                component.language,
                component.description,
                component.code_snippet,
                component.author,
                date_added,
            ],
            ExecMode::Write,
        )
        .written()
    }

    /// Delete a component by id.
    ///
    /// The affected row count isn't checked: deleting an id that doesn't
    /// exist still returns `true`.
    pub fn delete_component(&self, id: i64) -> bool {
        self.execute(
            "DELETE FROM components WHERE component_id = ?1",
            params![id],
            ExecMode::Write,
        )
        .written()
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    /// Every component, in store order. Empty on error.
    pub fn all_components(&self) -> Vec<Component> {
        self.execute(&query::select_all(), &[], ExecMode::Read)
            .into_rows()
    }

    pub fn try_all_components(&self) -> Result<Vec<Component>, GatewayError> {
        Ok(self
            .try_execute(&query::select_all(), &[], ExecMode::Read)?
            .into_rows())
    }

    /// Components matching a filter. Empty on error.
    pub fn search_components(&self, filter: &ComponentFilter) -> Vec<Component> {
        let stmt = query::build_search(filter);
        self.execute(&stmt.sql, &bind(&stmt.params), ExecMode::Read)
            .into_rows()
    }

    pub fn try_search_components(
        &self,
        filter: &ComponentFilter,
    ) -> Result<Vec<Component>, GatewayError> {
        let stmt = query::build_search(filter);
        Ok(self
            .try_execute(&stmt.sql, &bind(&stmt.params), ExecMode::Read)?
            .into_rows())
    }

    /// Look up a single component by id.
    pub fn try_find_component(&self, id: i64) -> Result<Option<Component>, GatewayError> {
        Ok(self
            .try_execute(&query::select_by_id(), params![id], ExecMode::Read)?
            .into_rows()
            .into_iter()
            .next())
    }
}

fn bind(values: &[String]) -> Vec<&dyn ToSql> {
    values.iter().map(|v| v as &dyn ToSql).collect()
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

fn row_to_component(row: &Row<'_>) -> rusqlite::Result<Component> {
    Ok(Component {
        id: row.get("component_id")?,
        name: row.get("name")?,
        pattern_name: row.get("pattern_name")?,
        pattern_category: row.get("pattern_category")?,
        language: row.get("language")?,
        description: row.get("description")?,
        code_snippet: row.get("code_snippet")?,
        author: row.get("author")?,
        date_added: date_column(row.get_ref("date_added")?),
    })
}

/// Missing or malformed dates map to `None` so one bad row can't fail a read.
fn date_column(value: ValueRef<'_>) -> Option<NaiveDate> {
    let text = match value {
        ValueRef::Text(bytes) => std::str::from_utf8(bytes).ok()?,
        _ => return None,
    };
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
