//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `simak add` - Register a student
//! - `simak list [QUERY]` - List or search students
//! - `simak update <NIM>` - Edit a student record
//! - `simak remove <NIM>` - Delete a student record
//! - `simak reset` - Delete all records
//! - `simak import <FILE>` / `simak export` - JSON data exchange

mod add;
mod export;
mod import;
mod list;
mod remove;
mod reset;
mod update;

pub use add::AddCommand;
pub use export::ExportCommand;
pub use import::ImportCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use reset::ResetCommand;
pub use update::UpdateCommand;

use crate::error::CliResult;
use crate::output;
use crate::storage::RecordStore;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Simak - a student record manager for the command line.
///
/// Records are kept in a single JSON data file. Every mutating command
/// persists the full record list before reporting success.
#[derive(Parser, Debug)]
#[command(name = "simak")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A student record manager", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the record data file (overrides the default location)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new student
    #[command(alias = "a")]
    Add(AddCommand),

    /// List students, optionally filtered by a search query
    #[command(alias = "ls")]
    List(ListCommand),

    /// Update an existing student record
    #[command(alias = "u")]
    Update(UpdateCommand),

    /// Remove a student record
    #[command(alias = "rm")]
    Remove(RemoveCommand),

    /// Remove all student records
    Reset(ResetCommand),

    /// Import records from a JSON file, replacing the current data
    #[command(alias = "i")]
    Import(ImportCommand),

    /// Export all records to a JSON file
    #[command(alias = "e")]
    Export(ExportCommand),
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Open the record store, honoring a `--data-file` override.
///
/// Surfaces a non-fatal load warning when the persisted blob was unusable.
pub(crate) fn open_store(data_file: Option<&Path>) -> CliResult<RecordStore> {
    let store = match data_file {
        Some(path) => RecordStore::open_at(path)?,
        None => RecordStore::open()?,
    };

    if let Some(warning) = store.load_warning() {
        output::print_warning(warning);
    }

    Ok(store)
}
