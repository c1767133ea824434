//! Update subcommand implementation.
//!
//! Handles `simak update <NIM>` for editing an existing record. Only fields
//! given as flags are changed; everything else, including the creation
//! timestamp, stays as it was.

use crate::error::{CliError, CliResult};
use crate::output;
use crate::storage::StudentPatch;
use crate::types::{BloodGroup, Gender, Nim, Religion, StudyProgram};
use clap::Parser;
use std::path::Path;

/// Update an existing student record.
#[derive(Parser, Debug)]
pub struct UpdateCommand {
    /// NIM of the record to update
    #[arg(value_name = "NIM")]
    pub nim: Nim,

    /// New full name
    #[arg(long)]
    pub nama: Option<String>,

    /// New NIM (must not collide with another record)
    #[arg(long = "new-nim")]
    pub new_nim: Option<Nim>,

    /// New gender
    #[arg(long = "jenis-kelamin", value_enum)]
    pub jenis_kelamin: Option<Gender>,

    /// New program of study
    #[arg(long, value_enum)]
    pub prodi: Option<StudyProgram>,

    /// New place of birth
    #[arg(long = "tempat-lahir")]
    pub tempat_lahir: Option<String>,

    /// New date of birth (YYYY-MM-DD)
    #[arg(long = "tanggal-lahir")]
    pub tanggal_lahir: Option<String>,

    /// New blood group
    #[arg(long = "golongan-darah", value_enum)]
    pub golongan_darah: Option<BloodGroup>,

    /// New religion
    #[arg(long, value_enum)]
    pub agama: Option<Religion>,

    /// New home address
    #[arg(long)]
    pub alamat: Option<String>,

    /// New phone number
    #[arg(long)]
    pub telepon: Option<String>,

    /// New academic advisor
    #[arg(long)]
    pub dosen: Option<String>,

    /// New enrollment year
    #[arg(long)]
    pub angkatan: Option<String>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(&self, data_file: Option<&Path>, quiet: bool) -> CliResult<()> {
        let patch = StudentPatch {
            nama: self.nama.as_ref().map(|v| v.trim().to_string()),
            nim: self.new_nim.clone(),
            jenis_kelamin: self.jenis_kelamin.map(|v| v.to_string()),
            tempat_lahir: self.tempat_lahir.as_ref().map(|v| v.trim().to_string()),
            tanggal_lahir: self.tanggal_lahir.as_ref().map(|v| v.trim().to_string()),
            golongan_darah: self.golongan_darah.map(|v| v.to_string()),
            agama: self.agama.map(|v| v.to_string()),
            alamat: self.alamat.as_ref().map(|v| v.trim().to_string()),
            telepon: self.telepon.as_ref().map(|v| v.trim().to_string()),
            prodi: self.prodi.map(|v| v.to_string()),
            dosen: self.dosen.as_ref().map(|v| v.trim().to_string()),
            angkatan: self.angkatan.as_ref().map(|v| v.trim().to_string()),
        };

        if patch.is_empty() {
            return Err(CliError::Other(
                "nothing to update: pass at least one field flag".to_string(),
            ));
        }

        let mut store = super::open_store(data_file)?;
        store.update(&self.nim, patch)?;

        if !quiet {
            output::print_success(&format!("Record {} updated.", self.nim));
        }

        Ok(())
    }
}
