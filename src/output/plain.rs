//! Plain text output formatting.
//!
//! Produces the human-readable table view, notification lines, and the
//! interactive confirmation prompt.

use crate::storage::Student;
use console::{style, Term};
use std::io::{self, Write};

/// Print records as a human-readable table with a count footer.
///
/// `total` is the full store size, shown next to the match count when a
/// filter cut the listing down.
pub fn print_table(records: &[&Student], total: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if records.is_empty() {
        if total == 0 {
            writeln!(out, "{}", style("No student data stored yet.").dim())?;
        } else {
            writeln!(
                out,
                "{}",
                style("No students match the search query.").dim()
            )?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        style("───────────────────────────────────────────────────────────────────").dim()
    )?;
    writeln!(
        out,
        "{:<24}  {:<12}  {:<6}  {:<14}  {}",
        style("NAMA").bold(),
        style("NIM").bold(),
        style("PRODI").bold(),
        style("TELEPON").bold(),
        style("ANGKATAN").bold()
    )?;
    writeln!(
        out,
        "{}",
        style("───────────────────────────────────────────────────────────────────").dim()
    )?;

    for student in records {
        writeln!(
            out,
            "{:<24}  {:<12}  {:<6}  {:<14}  {}",
            truncate_string(&student.nama, 24),
            student.nim,
            student.prodi,
            placeholder(&student.telepon),
            placeholder(&student.angkatan)
        )?;
    }

    writeln!(
        out,
        "{}",
        style("───────────────────────────────────────────────────────────────────").dim()
    )?;

    if records.len() == total {
        writeln!(out, "{} {} student(s)", style("Total:").bold(), total)?;
    } else {
        writeln!(
            out,
            "{} {} of {} student(s)",
            style("Matched:").bold(),
            records.len(),
            total
        )?;
    }

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Ask the user to confirm a destructive action. Defaults to "no".
pub fn confirm(prompt: &str) -> io::Result<bool> {
    let term = Term::stdout();
    term.write_str(&format!(
        "{} {} [y/N] ",
        style("?").yellow().bold(),
        prompt
    ))?;

    let answer = term.read_line()?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Show "—" for fields the form left empty.
fn placeholder(s: &str) -> &str {
    if s.is_empty() {
        "—"
    } else {
        s
    }
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder(""), "—");
        assert_eq!(placeholder("0812"), "0812");
    }
}
