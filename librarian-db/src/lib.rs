//! SQLite persistence layer for the component catalog.
//!
//! Provides schema creation, a single statement-execution path, and the
//! insert/delete/search/list operations built on it (via rusqlite with the
//! bundled feature).

pub mod gateway;
pub mod query;
pub mod schema;

pub use gateway::{ExecMode, Execution, Gateway, GatewayError};
pub use query::{build_search, ComponentFilter, SelectStatement};
pub use schema::{COMPONENT_COLUMNS, DEFAULT_DB_NAME};
