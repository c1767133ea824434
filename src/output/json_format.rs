//! JSON output formatting.

use crate::storage::Student;
use std::io;

/// Print records in JSON format.
pub fn print_json(records: &[&Student]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
