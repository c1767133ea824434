//! Export subcommand implementation.
//!
//! Handles `simak export`. The default target file is named with the current
//! date (`data_mahasiswa_YYYY-MM-DD.json`), matching the files produced by
//! earlier versions of this tool.

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use chrono::Local;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Export all records to a JSON file.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Output file path (default: data_mahasiswa_<date>.json)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(
        &self,
        settings: &AppSettings,
        data_file: Option<&Path>,
        quiet: bool,
    ) -> CliResult<()> {
        let store = super::open_store(data_file)?;
        let json = store.export_all()?;

        if self.stdout {
            println!("{}", json);
            return Ok(());
        }

        let path = match &self.output_file {
            Some(path) => path.clone(),
            None => {
                let name = format!("data_mahasiswa_{}.json", Local::now().format("%Y-%m-%d"));
                match &settings.export_dir {
                    Some(dir) => dir.join(name),
                    None => PathBuf::from(name),
                }
            }
        };

        fs::write(&path, &json).map_err(|e| {
            CliError::Other(format!("failed to write {}: {}", path.display(), e))
        })?;

        if !quiet {
            output::print_success(&format!(
                "Exported {} student record(s) to {}.",
                store.len(),
                path.display()
            ));
        }

        Ok(())
    }
}
