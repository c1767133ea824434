//! Add subcommand implementation.
//!
//! Handles `simak add` for registering a new student.

use crate::error::CliResult;
use crate::output;
use crate::storage::Student;
use crate::types::{BloodGroup, Gender, Nim, Religion, StudyProgram};
use chrono::Utc;
use clap::Parser;
use std::path::Path;

/// Register a new student.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Full name
    #[arg(long)]
    pub nama: String,

    /// Student identification number (must be unique)
    #[arg(long)]
    pub nim: Nim,

    /// Gender
    #[arg(long = "jenis-kelamin", value_enum)]
    pub jenis_kelamin: Gender,

    /// Program of study
    #[arg(long, value_enum)]
    pub prodi: StudyProgram,

    /// Place of birth
    #[arg(long = "tempat-lahir")]
    pub tempat_lahir: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long = "tanggal-lahir")]
    pub tanggal_lahir: Option<String>,

    /// Blood group
    #[arg(long = "golongan-darah", value_enum)]
    pub golongan_darah: Option<BloodGroup>,

    /// Religion
    #[arg(long, value_enum)]
    pub agama: Option<Religion>,

    /// Home address
    #[arg(long)]
    pub alamat: Option<String>,

    /// Phone number
    #[arg(long)]
    pub telepon: Option<String>,

    /// Academic advisor
    #[arg(long)]
    pub dosen: Option<String>,

    /// Enrollment year
    #[arg(long)]
    pub angkatan: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, data_file: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut store = super::open_store(data_file)?;

        let student = Student {
            nama: self.nama.trim().to_string(),
            nim: self.nim.clone(),
            jenis_kelamin: self.jenis_kelamin.to_string(),
            tempat_lahir: opt_trimmed(&self.tempat_lahir),
            tanggal_lahir: opt_trimmed(&self.tanggal_lahir),
            golongan_darah: self.golongan_darah.map(|g| g.to_string()).unwrap_or_default(),
            agama: self.agama.map(|a| a.to_string()).unwrap_or_default(),
            alamat: opt_trimmed(&self.alamat),
            telepon: opt_trimmed(&self.telepon),
            prodi: self.prodi.to_string(),
            dosen: opt_trimmed(&self.dosen),
            angkatan: opt_trimmed(&self.angkatan),
            created_at: Utc::now(),
        };

        store.add(student)?;

        if !quiet {
            output::print_success(&format!(
                "Student {} ({}) registered.",
                self.nama.trim(),
                self.nim
            ));
        }

        Ok(())
    }
}

/// Trimmed value of an optional flag, empty string when absent.
fn opt_trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}
