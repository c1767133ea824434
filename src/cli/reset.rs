//! Reset subcommand implementation.
//!
//! Handles `simak reset`, which deletes every stored record after an
//! explicit confirmation.

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use std::path::Path;

/// Remove all student records.
#[derive(Parser, Debug)]
pub struct ResetCommand {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ResetCommand {
    /// Execute the reset command.
    pub fn execute(
        &self,
        settings: &AppSettings,
        data_file: Option<&Path>,
        quiet: bool,
    ) -> CliResult<()> {
        let mut store = super::open_store(data_file)?;

        if settings.confirm_destructive && !self.yes {
            let prompt = format!(
                "This deletes ALL {} stored student record(s) and cannot be undone. Continue?",
                store.len()
            );
            if !output::confirm(&prompt)? {
                if !quiet {
                    output::print_info("Nothing removed.");
                }
                return Ok(());
            }
        }

        let count = store.reset_all()?;

        if !quiet {
            output::print_success(&format!("All student data reset ({} record(s) removed).", count));
        }

        Ok(())
    }
}
