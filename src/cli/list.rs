//! List subcommand implementation.
//!
//! Handles `simak list [QUERY]` for listing and searching students.

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use clap::Parser;
use std::path::Path;

/// List students, optionally filtered by a search query.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Search query matched case-insensitively against nama, NIM, and prodi
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(
        &self,
        settings: &AppSettings,
        data_file: Option<&Path>,
        _quiet: bool,
    ) -> CliResult<()> {
        let store = super::open_store(data_file)?;

        let filter = self.query.as_deref().unwrap_or("");
        let records = store.list(filter);
        let format = self
            .output
            .unwrap_or_else(|| default_format(&settings.default_output_format));

        output::print_records(&records, store.len(), format)?;

        Ok(())
    }
}

/// Resolve the configured default output format, falling back to plain.
fn default_format(name: &str) -> OutputFormat {
    match name {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_resolution() {
        assert_eq!(default_format("json"), OutputFormat::Json);
        assert_eq!(default_format("csv"), OutputFormat::Csv);
        assert_eq!(default_format("plain"), OutputFormat::Plain);
        assert_eq!(default_format("bogus"), OutputFormat::Plain);
    }
}
