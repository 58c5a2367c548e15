//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "component-librarian")]
#[command(about = "Catalog reusable code components by design pattern", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to the saved setting, then ./component_librarian.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields of a new component. Empty values are left for validation to reject.
#[derive(Args, Clone)]
pub(crate) struct AddArgs {
    /// Component name (required)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Pattern type, e.g. Creational, Structural, Behavioral (required)
    #[arg(short, long, default_value = "")]
    pub pattern: String,

    /// Category, e.g. Container, Algorithm, Utility
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Programming language (required)
    #[arg(short, long, default_value = "")]
    pub language: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Code snippet text (required unless --code-file is given)
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read the code snippet from a file
    #[arg(long)]
    pub code_file: Option<PathBuf>,

    /// Component author
    #[arg(short, long, default_value = "")]
    pub author: String,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a component to the catalog
    Add(AddArgs),

    /// Search by keyword (name or description) and exact pattern/language
    Search {
        /// Substring to look for in name or description
        keyword: Option<String>,

        /// Only components with exactly this pattern type
        #[arg(short, long)]
        pattern: Option<String>,

        /// Only components in exactly this language
        #[arg(short, long)]
        language: Option<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a component by id
    Delete {
        /// Component id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List every component
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one component, including its code snippet
    Show {
        /// Component id
        id: String,
    },

    /// List the suggested pattern types, categories and languages
    Vocab,

    /// Manage saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the database path in effect
    Show,

    /// Print the settings file path
    Path,

    /// Save a default database path
    SetDb {
        /// Path to the catalog database file
        path: PathBuf,
    },

    /// Forget the saved database path
    ClearDb,
}
