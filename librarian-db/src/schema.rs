//! SQLite schema creation for the component catalog.

use std::path::Path;

use rusqlite::Connection;

/// Default file name of the catalog database.
pub const DEFAULT_DB_NAME: &str = "component_librarian.db";

/// Column list used by every read, in table order.
pub const COMPONENT_COLUMNS: &str = "component_id, name, pattern_name, pattern_category, language,
                description, code_snippet, author, date_added";

/// Creates the components table if it doesn't exist.
///
/// This is idempotent: safe to run against an existing database.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS components (
    component_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    pattern_name TEXT,
    pattern_category TEXT,
    language TEXT,
    description TEXT,
    code_snippet TEXT,
    author TEXT,
    date_added DATE
)
"#;

/// Open a connection to the catalog file, creating the file if needed.
///
/// Connections are short-lived: the gateway opens one per statement and
/// drops it before returning.
pub fn connect(path: &Path) -> rusqlite::Result<Connection> {
    Connection::open(path)
}
