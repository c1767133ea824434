//! Import subcommand implementation.
//!
//! Handles `simak import <FILE>`. The file content replaces the entire
//! record list; import failures leave the prior data untouched.

use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Import records from a JSON file, replacing the current data.
#[derive(Parser, Debug)]
pub struct ImportCommand {
    /// JSON file containing an array of student records
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(&self, data_file: Option<&Path>, quiet: bool) -> CliResult<()> {
        let raw = fs::read_to_string(&self.file).map_err(|e| {
            CliError::Other(format!("failed to read {}: {}", self.file.display(), e))
        })?;

        let mut store = super::open_store(data_file)?;
        let count = store.import_all(&raw)?;

        if !quiet {
            output::print_success(&format!("Imported {} student record(s).", count));
        }

        Ok(())
    }
}
