//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV listings of student
//! records, plus the notification and confirmation helpers used by the CLI.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::print_csv;
pub use json_format::print_json;
pub use plain::{confirm, print_error, print_info, print_success, print_table, print_warning};

use crate::cli::OutputFormat;
use crate::storage::Student;
use std::io;

/// Format and print a record listing according to the specified format.
pub fn print_records(records: &[&Student], total: usize, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::print_table(records, total),
        OutputFormat::Json => json_format::print_json(records),
        OutputFormat::Csv => csv_format::print_csv(records),
    }
}
