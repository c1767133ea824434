//! Remove subcommand implementation.
//!
//! Handles `simak remove <NIM>`. The record's name and NIM are shown in the
//! confirmation prompt; cancelling performs no mutation.

use crate::config::AppSettings;
use crate::error::{CliResult, StoreError};
use crate::output;
use crate::types::Nim;
use clap::Parser;
use std::path::Path;

/// Remove a student record.
#[derive(Parser, Debug)]
pub struct RemoveCommand {
    /// NIM of the record to remove
    #[arg(value_name = "NIM")]
    pub nim: Nim,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(
        &self,
        settings: &AppSettings,
        data_file: Option<&Path>,
        quiet: bool,
    ) -> CliResult<()> {
        let mut store = super::open_store(data_file)?;

        let student = store
            .get(&self.nim)
            .ok_or_else(|| StoreError::NotFound(self.nim.to_string()))?;
        let nama = student.nama.clone();

        if settings.confirm_destructive && !self.yes {
            let prompt = format!("Remove {} with NIM {}?", nama, self.nim);
            if !output::confirm(&prompt)? {
                if !quiet {
                    output::print_info("Nothing removed.");
                }
                return Ok(());
            }
        }

        store.remove(&self.nim)?;

        if !quiet {
            output::print_success(&format!("Student {} ({}) removed.", nama, self.nim));
        }

        Ok(())
    }
}
